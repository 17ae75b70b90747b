use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    i18n::{Key, Locale},
    util::colors,
};

/// Text input paired with the button that submits it.
#[derive(Debug, Default)]
pub struct SearchBar {
    input: String,
}

impl SearchBar {
    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    pub fn render(
        &self,
        f: &mut Frame,
        bar_area: Rect,
        button_area: Rect,
        focused: bool,
        locale: Locale,
    ) {
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(locale.get(Key::SearchTitle))
            .border_style(border_style);
        let inner = block.inner(bar_area);

        let visible = visible_tail(&self.input, inner.width.saturating_sub(1) as usize);
        f.render_widget(Paragraph::new(visible).block(block), bar_area);

        if focused && inner.width > 0 {
            let x = inner.x + (visible.width() as u16).min(inner.width - 1);
            f.set_cursor_position((x, inner.y));
        }

        let button = Paragraph::new(locale.get(Key::SearchButton))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(colors::BACKGROUND)
                    .bg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(colors::PRIMARY)),
            );
        f.render_widget(button, button_area);
    }
}

/// Longest suffix of `text` that fits in `width` columns.
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = i;
    }
    &text[start..]
}
