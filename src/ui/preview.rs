//! Preview panel: generated QR code, payload string, and account usage

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draw the preview panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // QR preview
            Constraint::Length(4), // Payload
            Constraint::Length(6), // Account
        ])
        .split(area);

    draw_qr(frame, chunks[0], app);
    draw_payload(frame, chunks[1], app);
    draw_account(frame, chunks[2], app);
}

fn draw_qr(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.state.preview {
        Some(preview) => {
            let lines: Vec<Line> = preview.lines().map(|l| Line::from(l.to_string())).collect();
            // Center the code vertically when there is room
            let height = lines.len() as u16;
            let qr_area = if inner.height > height {
                Rect {
                    y: inner.y + (inner.height - height) / 2,
                    height,
                    ..inner
                }
            } else {
                inner
            };
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                qr_area,
            );
        }
        None => {
            frame.render_widget(
                Paragraph::new("Fill in the form and press Generate")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                Rect {
                    y: inner.y + inner.height / 2,
                    height: 2.min(inner.height),
                    ..inner
                },
            );
        }
    }
}

fn draw_payload(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = match &app.state.payload {
        Some(payload) => Paragraph::new(payload.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false }),
        None => Paragraph::new("Nothing generated yet").style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(text, inner);
}

fn draw_account(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.state.user {
        Some(user) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(inner);

            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Green)),
                    Span::styled(
                        user.name.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", user.email),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                rows[0],
            );

            if user.is_premium {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "Premium: unlimited saves",
                        Style::default().fg(Color::Yellow),
                    )),
                    rows[1],
                );
            } else {
                let ratio = if user.max_qr_codes == 0 {
                    0.0
                } else {
                    (user.qr_codes_count as f64 / user.max_qr_codes as f64).min(1.0)
                };
                frame.render_widget(
                    Gauge::default()
                        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
                        .ratio(ratio)
                        .label(format!(
                            "{}/{} saved",
                            user.qr_codes_count, user.max_qr_codes
                        )),
                    rows[1],
                );
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!("{} saves remaining", user.remaining()),
                        Style::default().fg(Color::DarkGray),
                    )),
                    rows[2],
                );
            }
        }
        None => {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        "Not signed in",
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(Span::styled(
                        "Ctrl+L to sign in. Saving a PNG requires an account.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
                .wrap(Wrap { trim: true }),
                inner,
            );
        }
    }
}
