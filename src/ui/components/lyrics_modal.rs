use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

/// Overlay with a song heading, its full lyrics and a close control.
pub struct LyricsModal<'a> {
    title: &'a str,
    body: &'a str,
    close_label: &'a str,
    scroll: u16,
}

impl<'a> LyricsModal<'a> {
    pub fn new(title: &'a str, body: &'a str, close_label: &'a str) -> Self {
        Self {
            title,
            body,
            close_label,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Region of the close control inside a modal drawn at `area`.
    pub fn close_area(close_label: &str, area: Rect) -> Rect {
        let width = (Self::close_text(close_label).width() as u16).min(area.width.saturating_sub(2));
        Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y,
            width,
            height: area.height.min(1),
        }
    }

    /// Furthest scroll offset that still fills the body of a modal drawn at
    /// `area`, counted in wrapped rows.
    pub fn max_scroll(body: &str, area: Rect) -> u16 {
        let inner = Self::frame().inner(area);
        if inner.width == 0 {
            return 0;
        }
        let rows = Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .line_count(inner.width);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height)
    }

    fn frame() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
    }

    fn close_text(close_label: &str) -> String {
        format!("[x {}]", close_label)
    }
}

impl Widget for LyricsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Self::frame()
            .border_style(Style::default().fg(colors::PRIMARY))
            .style(Style::default().bg(colors::SURFACE))
            .title(Line::from(format!(" {} ", self.title)).style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .title(
                Line::from(Self::close_text(self.close_label))
                    .alignment(Alignment::Right)
                    .style(Style::default().fg(colors::ERROR)),
            );

        Paragraph::new(self.body)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
