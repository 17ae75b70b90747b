use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, List, ListState, Paragraph, Wrap},
};
use tracing::debug;

use crate::{
    i18n::{Key, Locale},
    model::SongResult,
    ui::{
        components::{
            lyrics_modal::LyricsModal, result_list::result_item, spinner::Spinner,
        },
        layout::Hitboxes,
        state::{ModalState, UiState},
        util::centered_rect,
    },
    util::{
        colors,
        text::{sanitize, sanitize_inline},
    },
};

const MODAL_WIDTH_PERCENT: u16 = 80;
const MODAL_HEIGHT_PERCENT: u16 = 80;

/// Owns the results area and the lyrics modal.
pub struct ResultsRenderer {
    locale: Locale,
    state: UiState,
    modal: ModalState,
    list_state: ListState,
    modal_scroll: u16,
    modal_max_scroll: u16,
}

impl ResultsRenderer {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            state: UiState::Idle,
            modal: ModalState::Hidden,
            list_state: ListState::default(),
            modal_scroll: 0,
            modal_max_scroll: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn render_loading(&mut self) {
        self.list_state = ListState::default();
        self.state = UiState::Loading;
    }

    pub fn render_list(&mut self, results: Vec<SongResult>) {
        self.list_state = ListState::default();
        if !results.is_empty() {
            self.list_state.select(Some(0));
        }
        self.state = UiState::Results(results);
    }

    pub fn render_empty(&mut self) {
        self.list_state = ListState::default();
        self.state = UiState::Empty;
    }

    pub fn render_error(&mut self, message: &str) {
        self.list_state = ListState::default();
        self.state = UiState::Error(message.to_string());
    }

    pub fn show_detail(&mut self, song: SongResult) {
        debug!("Showing lyrics for '{}'", song.heading());
        // Unknown until the wrapped body is measured by the next draw.
        self.modal_max_scroll = u16::MAX;
        self.modal_scroll = 0;
        self.modal = ModalState::Shown(song);
    }

    pub fn hide_modal(&mut self) {
        self.modal = ModalState::Hidden;
        self.modal_scroll = 0;
    }

    /// Heading shown in the modal frame, if the modal is open.
    pub fn modal_title(&self) -> Option<String> {
        match &self.modal {
            ModalState::Shown(song) => Some(sanitize_inline(&song.heading())),
            ModalState::Hidden => None,
        }
    }

    /// Full lyrics shown in the modal body, printed as plain text.
    pub fn modal_body(&self) -> Option<String> {
        match &self.modal {
            ModalState::Shown(song) => Some(sanitize(&song.lyrics)),
            ModalState::Hidden => None,
        }
    }

    pub fn scroll_modal(&mut self, delta: i32) {
        if !self.modal.is_shown() {
            return;
        }
        let max = i32::from(self.modal_max_scroll);
        self.modal_scroll = (i32::from(self.modal_scroll) + delta).clamp(0, max) as u16;
    }

    pub fn modal_scroll(&self) -> u16 {
        self.modal_scroll
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self) {
        let count = self.state.results().len();
        if count == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1).min(count - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.state.results().is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    /// Opens the detail view of the highlighted row.
    pub fn open_selected(&mut self) -> bool {
        match self.list_state.selected() {
            Some(index) => self.open(index),
            None => false,
        }
    }

    /// Opens the detail view of the row at `index`.
    pub fn open(&mut self, index: usize) -> bool {
        let Some(song) = self.state.results().get(index).cloned() else {
            return false;
        };
        self.list_state.select(Some(index));
        self.show_detail(song);
        true
    }

    pub fn draw_results(
        &mut self,
        f: &mut Frame,
        area: Rect,
        focused: bool,
        hitboxes: &mut Hitboxes,
    ) {
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(self.locale.get(Key::ResultsTitle));
        let inner = block.inner(area);
        f.render_widget(block, area);

        hitboxes.results = Rect::default();
        hitboxes.result_offset = 0;
        hitboxes.result_count = 0;

        match &self.state {
            UiState::Idle => {
                placeholder(f, inner, self.locale.get(Key::IdlePrompt), colors::MUTED)
            }
            UiState::Loading => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label(self.locale.get(Key::Searching));
                f.render_widget(spinner, inner);
            }
            UiState::Empty => placeholder(f, inner, self.locale.get(Key::NoResults), colors::MUTED),
            UiState::Error(message) => {
                let text = self.locale.error(&sanitize_inline(message));
                placeholder(f, inner, &text, colors::ERROR);
            }
            UiState::Results(results) => {
                let list = List::new(results.iter().map(result_item))
                    .highlight_style(Style::default().bg(colors::SURFACE))
                    .highlight_symbol("▌");
                f.render_stateful_widget(list, inner, &mut self.list_state);

                hitboxes.results = inner;
                hitboxes.result_offset = self.list_state.offset();
                hitboxes.result_count = results.len();
            }
        }
    }

    pub fn draw_modal(&mut self, f: &mut Frame, area: Rect, hitboxes: &mut Hitboxes) {
        hitboxes.close_modal = None;

        let (Some(title), Some(body)) = (self.modal_title(), self.modal_body()) else {
            return;
        };

        let modal_area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area);
        self.modal_max_scroll = LyricsModal::max_scroll(&body, modal_area);
        self.modal_scroll = self.modal_scroll.min(self.modal_max_scroll);

        let close_label = self.locale.get(Key::CloseModal);
        f.render_widget(
            LyricsModal::new(&title, &body, close_label).scroll(self.modal_scroll),
            modal_area,
        );
        hitboxes.close_modal = Some(LyricsModal::close_area(close_label, modal_area));
    }
}

/// Single centered message filling the results area.
fn placeholder(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let [_, line, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let paragraph = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color).add_modifier(Modifier::ITALIC));
    f.render_widget(paragraph, line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use ratatui::{Terminal, backend::TestBackend};

    fn song(title: &str, artist: &str, lyrics: &str) -> SongResult {
        SongResult {
            title: title.to_string(),
            artist: artist.to_string(),
            lyrics: lyrics.to_string(),
        }
    }

    fn renderer() -> ResultsRenderer {
        ResultsRenderer::new(Locale::new(Language::English))
    }

    #[test]
    fn test_starts_idle_and_hidden() {
        let r = renderer();
        assert_eq!(r.state(), &UiState::Idle);
        assert_eq!(r.modal(), &ModalState::Hidden);
    }

    #[test]
    fn test_each_render_replaces_prior_content() {
        let mut r = renderer();
        r.render_list(vec![song("A", "B", "C")]);
        assert_eq!(r.selected(), Some(0));

        r.render_error("boom");
        assert_eq!(r.state(), &UiState::Error("boom".to_string()));
        assert_eq!(r.selected(), None);

        r.render_empty();
        assert_eq!(r.state(), &UiState::Empty);
    }

    #[test]
    fn test_show_detail_keeps_full_lyrics() {
        let mut r = renderer();
        let lyrics = "C".repeat(100);
        r.render_list(vec![song("A", "B", &lyrics)]);
        assert!(r.open(0));

        assert_eq!(r.modal_title().as_deref(), Some("A - B"));
        assert_eq!(r.modal_body().as_deref(), Some(lyrics.as_str()));
        assert!(r.modal().is_shown());
    }

    #[test]
    fn test_hide_modal_leaves_results_alone() {
        let mut r = renderer();
        r.render_list(vec![song("A", "B", "C")]);
        r.open_selected();
        r.render_loading();
        r.hide_modal();

        assert_eq!(r.modal(), &ModalState::Hidden);
        assert_eq!(r.state(), &UiState::Loading);
    }

    #[test]
    fn test_show_detail_is_reentrant() {
        let mut r = renderer();
        r.show_detail(song("A", "B", "one\ntwo\nthree"));
        r.scroll_modal(2);
        assert_eq!(r.modal_scroll(), 2);

        r.show_detail(song("X", "Y", "other"));
        assert_eq!(r.modal_title().as_deref(), Some("X - Y"));
        assert_eq!(r.modal_scroll(), 0);
    }

    #[test]
    fn test_modal_body_is_plain_text() {
        let mut r = renderer();
        r.show_detail(song("A", "B", "\u{1b}]0;pwned\u{7}line"));
        assert_eq!(r.modal_body().as_deref(), Some("]0;pwnedline"));
    }

    fn draw(r: &mut ResultsRenderer) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut hitboxes = Hitboxes::default();
        terminal
            .draw(|f| r.draw_modal(f, f.area(), &mut hitboxes))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut r = renderer();
        r.scroll_modal(5);
        assert_eq!(r.modal_scroll(), 0);

        let lyrics = (1..=40).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        r.show_detail(song("A", "B", &lyrics));
        r.scroll_modal(1000);
        draw(&mut r);
        let max = r.modal_scroll();
        assert!(max > 0 && max < 40);

        r.scroll_modal(10);
        assert_eq!(r.modal_scroll(), max);
        r.scroll_modal(-1000);
        assert_eq!(r.modal_scroll(), 0);
    }

    #[test]
    fn test_end_of_wrapped_lyrics_is_reachable() {
        let mut r = renderer();
        let lyrics = format!("{}THEEND", "word ".repeat(400));
        r.show_detail(song("A", "B", &lyrics));
        assert!(!draw(&mut r).contains("THEEND"));

        for _ in 0..100 {
            r.scroll_modal(10);
        }
        assert!(draw(&mut r).contains("THEEND"));
        assert!(r.modal_scroll() > 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut r = renderer();
        r.select_next();
        assert_eq!(r.selected(), None);

        r.render_list(vec![song("A", "B", "C"), song("D", "E", "F")]);
        r.select_previous();
        assert_eq!(r.selected(), Some(0));
        r.select_next();
        r.select_next();
        assert_eq!(r.selected(), Some(1));
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut r = renderer();
        r.render_list(vec![song("A", "B", "C")]);
        assert!(!r.open(3));
        assert!(!r.modal().is_shown());
    }
}
