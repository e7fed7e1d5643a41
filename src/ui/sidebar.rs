//! Category sidebar

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the category list, favorites first
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::Sidebar;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected_id = app.state.selected_category().id;
    let mut lines = Vec::new();
    for (idx, category) in app.state.sorted_categories().iter().enumerate() {
        let under_cursor = focused && idx == app.state.sidebar_index;

        let cursor = if under_cursor { "▸ " } else { "  " };
        let star = if app.state.is_favorite(category.id) {
            Span::styled("★ ", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("  ")
        };

        let mut name_style = Style::default().fg(category.color);
        if category.id == selected_id {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        if under_cursor {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }

        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            star,
            Span::styled(category.name, name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", category.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
