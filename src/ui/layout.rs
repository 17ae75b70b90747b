use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    i18n::Key,
    ui::{app::App, components::result_list::ROW_HEIGHT, state::Focus},
    util::colors,
};

/// Clickable regions recorded by the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitboxes {
    pub search_bar: Rect,
    pub search_button: Rect,
    pub results: Rect,
    pub result_offset: usize,
    pub result_count: usize,
    pub close_modal: Option<Rect>,
}

impl Hitboxes {
    /// Index of the result row under the given cell.
    pub fn result_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.results.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.result_offset + usize::from(row - self.results.y) / ROW_HEIGHT;
        (index < self.result_count).then_some(index)
    }

    pub fn on_close_modal(&self, column: u16, row: u16) -> bool {
        self.close_modal
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let locale = self.app.locale;
        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title(locale.get(Key::AppName))
            .title_alignment(Alignment::Center);
        let inner = frame_block.inner(area);
        f.render_widget(frame_block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let button_width = locale.get(Key::SearchButton).width() as u16 + 6;
        let search_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(button_width)])
            .split(chunks[0]);

        let modal_open = self.app.renderer.modal().is_shown();
        let hitboxes = &mut self.app.hitboxes;
        hitboxes.search_bar = search_chunks[0];
        hitboxes.search_button = search_chunks[1];

        self.app.search_bar.render(
            f,
            search_chunks[0],
            search_chunks[1],
            self.app.focus == Focus::SearchBar && !modal_open,
            locale,
        );

        self.app.renderer.draw_results(
            f,
            chunks[1],
            self.app.focus == Focus::Results && !modal_open,
            hitboxes,
        );

        let hint = if modal_open {
            Key::HintModal
        } else {
            match self.app.focus {
                Focus::SearchBar => Key::HintSearchBar,
                Focus::Results => Key::HintResults,
            }
        };
        f.render_widget(
            Paragraph::new(locale.get(hint))
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::MUTED)),
            chunks[2],
        );

        self.app.renderer.draw_modal(f, area, hitboxes);
    }
}
