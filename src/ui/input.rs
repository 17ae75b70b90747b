use crate::ui::{message::AppMessage, state::Focus};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines moved by PageUp / PageDown inside the modal.
pub const PAGE_SCROLL: i32 = 10;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, focus: Focus, modal_open: bool) -> Option<AppMessage> {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            return Some(AppMessage::Quit);
        }

        if modal_open {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(AppMessage::CloseModal),
                KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::ScrollModal(1)),
                KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::ScrollModal(-1)),
                KeyCode::PageDown => Some(AppMessage::ScrollModal(PAGE_SCROLL)),
                KeyCode::PageUp => Some(AppMessage::ScrollModal(-PAGE_SCROLL)),
                _ => None,
            };
        }

        match focus {
            Focus::SearchBar => match key.code {
                KeyCode::Enter => Some(AppMessage::Submit),
                KeyCode::Backspace => Some(AppMessage::Backspace),
                KeyCode::Tab | KeyCode::Down | KeyCode::Esc => Some(AppMessage::FocusResults),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(AppMessage::Input(c))
                }
                _ => None,
            },
            Focus::Results => match key.code {
                KeyCode::Char('q') => Some(AppMessage::Quit),
                KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::SelectNext),
                KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::SelectPrevious),
                KeyCode::Enter => Some(AppMessage::OpenSelected),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => {
                    Some(AppMessage::FocusSearchBar)
                }
                _ => None,
            },
        }
    }
}
