use crate::{http::FetchError, model::SearchResponse};

/// Identifies a dispatch; only the latest one may update the results area.
pub type Generation = u64;

#[derive(Debug, Clone)]
pub enum Event {
    SearchFinished {
        generation: Generation,
        outcome: Result<SearchResponse, FetchError>,
    },
}
