//! Field rendering utilities shared by the generator form and the auth dialog

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = display_text(field);
    let is_placeholder = display_value.is_empty();
    let display_str = if is_placeholder {
        field.placeholder.unwrap_or("").to_string()
    } else {
        display_value
    };
    let value_style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };

    let cursor = if is_active && !field.is_select() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else if field.is_select() {
        let arrows = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Line::from(vec![
            Span::styled("◂ ", arrows),
            Span::styled(display_str, value_style),
            Span::styled(" ▸", arrows),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let marker = if field.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn display_text(field: &FormField) -> String {
    let value = field.display_value();
    if field.masked {
        "•".repeat(value.chars().count())
    } else {
        value
    }
}
