//! Status bar rendering with keybindings and report summary

use crate::report::Fingerprint;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Report-level facts shown on the left of the status bar
pub struct StatusRenderData<'a> {
    pub source_name: &'a str,
    pub fingerprint: Fingerprint,
    pub connected: usize,
    pub total: usize,
    pub hide_disconnected: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sep_style = Style::default()
        .bg(DEFAULT_THEME.selection_bg)
        .fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(
            format!(" {}/{} connected ", data.connected, data.total),
            Style::default()
                .bg(if data.connected > 0 {
                    DEFAULT_THEME.primary
                } else {
                    DEFAULT_THEME.error
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.fingerprint),
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .fg(DEFAULT_THEME.number),
        ),
        Span::styled("|", sep_style),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.selection_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.selection_bg)
        .fg(DEFAULT_THEME.fg);

    let mut right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" c ", key_style),
        Span::styled(" filter ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if data.hide_disconnected {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " CONNECTED ONLY ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }
    right_spans.push(Span::styled(format!(" {} ", data.source_name), sep_style));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.selection_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
