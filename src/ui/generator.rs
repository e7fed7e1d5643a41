//! Generator form panel for the selected category

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const TEXTAREA_HEIGHT: u16 = 5;

/// Draw the form for the selected category plus the Generate button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::Form;
    let category = app.state.selected_category();
    let form = &app.state.form;

    let border_style = if focused {
        Style::default().fg(category.color)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", category.name))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| {
            if f.is_multiline() {
                Constraint::Length(TEXTAREA_HEIGHT)
            } else {
                Constraint::Length(FIELD_HEIGHT)
            }
        })
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let is_active = focused && i == form.active_field_index;
        draw_field(frame, chunks[i], field, is_active);
    }

    let button_area = centered_button(chunks[form.fields.len()]);
    render_button(
        frame,
        button_area,
        "Generate QR Code",
        category.color,
        focused && form.is_buttons_row_active(),
    );
}

fn centered_button(area: Rect) -> Rect {
    let width = area.width.min(24);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
