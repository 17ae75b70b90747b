#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    // Search bar
    Input(char),
    Backspace,
    Submit,
    FocusSearchBar,
    FocusResults,

    // Results
    SelectNext,
    SelectPrevious,
    OpenSelected,
    OpenResult(usize),

    // Modal
    CloseModal,
    ScrollModal(i32),
}
