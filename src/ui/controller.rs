use std::sync::Arc;

use flume::Sender;
use tracing::{debug, error, info};

use crate::{
    event::events::{Event, Generation},
    http::{FetchError, LyricsBackend},
    i18n::{Key, Locale},
    model::{SearchQuery, SearchResponse},
    ui::renderer::ResultsRenderer,
};

/// Dispatches searches and applies the outcome of the latest one.
pub struct QueryController {
    backend: Arc<dyn LyricsBackend>,
    event_tx: Sender<Event>,
    locale: Locale,
    latest: Generation,
}

impl QueryController {
    pub fn new(backend: Arc<dyn LyricsBackend>, event_tx: Sender<Event>, locale: Locale) -> Self {
        Self {
            backend,
            event_tx,
            locale,
            latest: 0,
        }
    }

    /// Sends `raw` to the backend unless it is blank after trimming.
    ///
    /// Must be called from within a tokio runtime. The outcome arrives on the
    /// event channel as [`Event::SearchFinished`].
    pub fn dispatch_search(
        &mut self,
        raw: &str,
        renderer: &mut ResultsRenderer,
    ) -> Option<Generation> {
        let Some(query) = SearchQuery::parse(raw) else {
            debug!("Ignoring blank query");
            return None;
        };

        self.latest += 1;
        let generation = self.latest;
        info!("Search #{} for {:?}", generation, query.as_str());

        renderer.render_loading();
        tokio::spawn(run_request(
            self.backend.clone(),
            query,
            generation,
            self.event_tx.clone(),
        ));

        Some(generation)
    }

    /// Applies a finished request. Returns `false` when the outcome is stale.
    pub fn complete(
        &self,
        generation: Generation,
        outcome: Result<SearchResponse, FetchError>,
        renderer: &mut ResultsRenderer,
    ) -> bool {
        if generation != self.latest {
            debug!(
                "Dropping stale search #{} (latest is #{})",
                generation, self.latest
            );
            return false;
        }

        match outcome {
            Ok(SearchResponse { results }) if results.is_empty() => {
                info!("Search #{} found nothing", generation);
                renderer.render_empty();
            }
            Ok(SearchResponse { results }) => {
                info!("Search #{} found {} songs", generation, results.len());
                renderer.render_list(results);
            }
            Err(err @ FetchError::Status(_)) => {
                error!("Search #{} failed: {}", generation, err);
                renderer.render_error(self.locale.get(Key::ServerError));
            }
            Err(err) => {
                error!("Search #{} failed: {}", generation, err);
                renderer.render_error(&err.to_string());
            }
        }

        true
    }
}

async fn run_request(
    backend: Arc<dyn LyricsBackend>,
    query: SearchQuery,
    generation: Generation,
    event_tx: Sender<Event>,
) {
    let outcome = backend.query_lyrics(&query).await;
    if event_tx
        .send_async(Event::SearchFinished {
            generation,
            outcome,
        })
        .await
        .is_err()
    {
        debug!("Search #{} finished after the UI closed", generation);
    }
}
