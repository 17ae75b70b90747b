use crate::model::SongResult;

/// What the results area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Results(Vec<SongResult>),
    Empty,
    Error(String),
}

impl UiState {
    pub fn results(&self) -> &[SongResult] {
        match self {
            UiState::Results(results) => results,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown(SongResult),
}

impl ModalState {
    pub fn is_shown(&self) -> bool {
        matches!(self, ModalState::Shown(_))
    }
}

/// Element receiving key presses while the modal is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SearchBar,
    Results,
}
