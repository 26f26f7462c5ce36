//! Details pane: geometry of the selected output and its property table
//!
//! Properties are listed sorted by name. Long values without spaces, such as
//! the EDID hex blob, are cut into fixed-width rows so the whole value can
//! be scrolled through.

use super::layout::{clamp_scroll, pane_block, visible_height};
use crate::parser::model::Output;
use crate::report::status_label;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Hex digits per row when showing a blob value; 16 EDID bytes.
const BLOB_ROW_WIDTH: usize = 32;

/// Render the details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    output: Option<&Output>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Details ", is_focused);

    let Some(output) = output else {
        let paragraph = Paragraph::new("(nothing selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = detail_lines(output);
    let height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(height)
        .collect();
    frame.render_widget(Paragraph::new(visible).block(block), area);
}

fn detail_lines(output: &Output) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            output.name.as_str(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        field("status", status_text(output)),
    ];

    if let (Some(resolution), Some(position)) = (output.resolution, output.position) {
        lines.push(field("mode", format!("{}{}", resolution, position)));
    } else {
        lines.push(field("mode", "disabled".to_string()));
    }
    lines.push(field("rotation", output.rotation.keyword().to_string()));
    lines.push(field("reflection", output.reflection.to_string()));
    if !output.dimensions.is_zero() {
        lines.push(field(
            "size",
            format!(
                "{}mm x {}mm",
                output.dimensions.width_mm, output.dimensions.height_mm
            ),
        ));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Properties ({})", output.properties.len()),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )));

    let mut properties: Vec<(&String, &String)> = output.properties.iter().collect();
    properties.sort();
    for (name, value) in properties {
        if value.len() > BLOB_ROW_WIDTH && !value.contains(' ') {
            lines.push(Line::from(Span::styled(
                format!("  {}:", name),
                Style::default().fg(DEFAULT_THEME.property_name),
            )));
            for chunk in blob_rows(value) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", chunk),
                    Style::default().fg(DEFAULT_THEME.number),
                )));
            }
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", name),
                    Style::default().fg(DEFAULT_THEME.property_name),
                ),
                Span::styled(value.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
        }
    }

    lines
}

fn status_text(output: &Output) -> String {
    let mut status = status_label(output).to_string();
    if output.is_primary {
        status.push_str(", primary");
    }
    status
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<11}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Cut a value into fixed-width rows. Non-ASCII values stay on one row so a
/// cut never splits a character.
fn blob_rows(value: &str) -> Vec<&str> {
    if !value.is_ascii() {
        return vec![value];
    }
    value
        .as_bytes()
        .chunks(BLOB_ROW_WIDTH)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect()
}
