use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        layout::Hitboxes,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

/// Lines scrolled per mouse wheel notch inside the modal.
const WHEEL_SCROLL: i32 = 3;

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains finished background work.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    app.update(AppMessage::Input(c));
                }
            }
            TerminalEvent::Tick => return Ok(app.has_focus),
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::SearchFinished {
                generation,
                outcome,
            } => {
                app.controller
                    .complete(generation, outcome, &mut app.renderer);
            }
        }
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        let modal_open = app.renderer.modal().is_shown();
        if let Some(msg) = InputHandler::handle_key(key, app.focus, modal_open) {
            app.update(msg);
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        let modal_open = app.renderer.modal().is_shown();
        if let Some(msg) = Self::mouse_message(evt, &app.hitboxes, modal_open) {
            debug!("Mouse {:?} -> {:?}", evt.kind, msg);
            app.update(msg);
        }
    }

    pub fn mouse_message(
        evt: MouseEvent,
        hitboxes: &Hitboxes,
        modal_open: bool,
    ) -> Option<AppMessage> {
        let (column, row) = (evt.column, evt.row);
        match evt.kind {
            MouseEventKind::Down(MouseButton::Left) if modal_open => hitboxes
                .on_close_modal(column, row)
                .then_some(AppMessage::CloseModal),
            MouseEventKind::Down(MouseButton::Left) => {
                let position = ratatui::layout::Position::new(column, row);
                if hitboxes.search_button.contains(position) {
                    Some(AppMessage::Submit)
                } else if hitboxes.search_bar.contains(position) {
                    Some(AppMessage::FocusSearchBar)
                } else {
                    hitboxes.result_at(column, row).map(AppMessage::OpenResult)
                }
            }
            MouseEventKind::ScrollDown if modal_open => Some(AppMessage::ScrollModal(WHEEL_SCROLL)),
            MouseEventKind::ScrollUp if modal_open => Some(AppMessage::ScrollModal(-WHEEL_SCROLL)),
            MouseEventKind::ScrollDown => Some(AppMessage::SelectNext),
            MouseEventKind::ScrollUp => Some(AppMessage::SelectPrevious),
            _ => None,
        }
    }
}
