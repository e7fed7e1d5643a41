//! Layout components (panes and status bar)

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the three-pane layout: sidebar, form, preview
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Sidebar
            Constraint::Min(30),    // Form
            Constraint::Length(44), // Preview
        ])
        .split(rows[0]);

    (panes[0], panes[1], panes[2])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Session indicator
    let session = if app.state.user.is_some() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(session);

    let hints = get_focus_hints(app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused pane
fn get_focus_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Sidebar => "j/k:nav  Enter:select  f:fav  ^L:sign in  ^Y:copy  ^S:save",
        Focus::Form => "Tab:next  ◂/▸:option  Enter:generate  Esc:back  ^Y:copy  ^S:save",
    }
}
