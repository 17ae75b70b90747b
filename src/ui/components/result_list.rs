use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::{model::SongResult, util::colors, util::text::sanitize_inline};

/// Terminal rows taken by one rendered result.
pub const ROW_HEIGHT: usize = 3;

const AVATAR_WIDTH: usize = 5;

/// Avatar glyph, title, artist and snippet stacked over [`ROW_HEIGHT`] lines.
pub fn result_item(song: &SongResult) -> ListItem<'static> {
    let avatar = format!("[{}]", sanitize_inline(&song.avatar()));
    let indent = " ".repeat(AVATAR_WIDTH);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:<width$}", avatar, width = AVATAR_WIDTH),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                sanitize_inline(&song.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                sanitize_inline(&song.artist),
                Style::default().fg(colors::MUTED),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(
                sanitize_inline(&song.snippet()),
                Style::default().fg(colors::NEUTRAL),
            ),
        ]),
    ];

    ListItem::new(lines)
}
