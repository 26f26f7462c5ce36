//! Output list pane

use super::layout::pane_block;
use crate::parser::model::Output;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the output list, one row per output:
/// `● eDP-1 1920x1080 [primary]`
pub fn render_outputs_pane(
    frame: &mut Frame,
    area: Rect,
    outputs: &[&Output],
    selected: usize,
    is_focused: bool,
) {
    let block = pane_block(" Outputs ", is_focused);

    if outputs.is_empty() {
        let paragraph = Paragraph::new("(no outputs)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = outputs.iter().map(|output| output_row(output)).collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(DEFAULT_THEME.selection_bg)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn output_row(output: &Output) -> ListItem<'_> {
    let (marker, marker_color) = if output.is_connected {
        ("● ", DEFAULT_THEME.success)
    } else {
        ("○ ", DEFAULT_THEME.comment)
    };
    let name_style = if output.is_connected {
        Style::default().fg(DEFAULT_THEME.fg)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(marker_color)),
        Span::styled(output.name.as_str(), name_style),
    ];
    if let Some(resolution) = output.resolution {
        spans.push(Span::styled(
            format!(" {}", resolution),
            Style::default().fg(DEFAULT_THEME.number),
        ));
    }
    if output.is_primary {
        spans.push(Span::styled(
            " [primary]",
            Style::default().fg(DEFAULT_THEME.primary),
        ));
    }

    ListItem::new(Line::from(spans))
}
