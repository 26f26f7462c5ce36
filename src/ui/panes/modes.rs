//! Modes pane rendering

use super::layout::{clamp_scroll, pane_block, visible_height};
use crate::parser::model::{Output, OutputMode, Rate};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the mode list of the selected output
pub fn render_modes_pane(
    frame: &mut Frame,
    area: Rect,
    output: Option<&Output>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Modes ", is_focused);

    let modes = output.map(|output| output.modes.as_slice()).unwrap_or(&[]);
    if modes.is_empty() {
        let paragraph = Paragraph::new("(no modes)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area);
    clamp_scroll(scroll_offset, modes.len(), height);

    let items: Vec<ListItem> = modes
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|mode| ListItem::new(mode_line(mode)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// `1920x1080i   60.00*+  59.94`, padded so rates line up in columns.
fn mode_line(mode: &OutputMode) -> Line<'static> {
    let name = if mode.interlaced {
        format!("{}i", mode.resolution)
    } else {
        mode.resolution.to_string()
    };
    let name_style = if mode.current_rate().is_some() {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let mut spans = vec![Span::styled(format!("{:<12}", name), name_style)];
    spans.extend(mode.rates.iter().map(rate_span));
    Line::from(spans)
}

fn rate_span(rate: &Rate) -> Span<'static> {
    let marker = match (rate.is_current, rate.is_preferred) {
        (true, true) => "*+",
        (true, false) => "* ",
        (false, true) => " +",
        (false, false) => "  ",
    };
    let style = if rate.is_current {
        Style::default()
            .fg(DEFAULT_THEME.current_rate)
            .add_modifier(Modifier::BOLD)
    } else if rate.is_preferred {
        Style::default().fg(DEFAULT_THEME.preferred_rate)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    };
    Span::styled(format!("{:>7.2}{}", rate.value, marker), style)
}
