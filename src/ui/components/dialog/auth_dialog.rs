//! Auth dialog component (login / register tabs plus OTP verification)

use super::base::centered_rect;
use crate::state::{AuthForm, AuthStage, AuthTab};
use crate::ui::field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const DIALOG_WIDTH: u16 = 54;

/// Render the auth dialog overlay centered on the screen
pub fn render_auth_dialog(frame: &mut Frame, form: &AuthForm) {
    let field_rows = form.fields.len() as u16 * FIELD_HEIGHT;
    // tabs/info line + fields + busy line + hints + borders
    let height = 2 + field_rows + 1 + 2 + 2;
    let area = centered_rect(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let title = match (form.tab, form.stage) {
        (AuthTab::Login, _) => " Sign In ",
        (AuthTab::Register, AuthStage::Credentials) => " Create Account ",
        (AuthTab::Register, AuthStage::Otp) => " Verify Email ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(form.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    // Header: tabs for the credential stage, an info line for the OTP stage
    match form.stage {
        AuthStage::Credentials => {
            let tab_style = |active: bool| {
                if active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            };
            let tabs = Line::from(vec![
                Span::styled(" Login ", tab_style(form.tab == AuthTab::Login)),
                Span::raw(" │ "),
                Span::styled(" Register ", tab_style(form.tab == AuthTab::Register)),
            ]);
            frame.render_widget(Paragraph::new(tabs), chunks[0]);
        }
        AuthStage::Otp => {
            let info = Line::from(Span::styled(
                format!("We've sent a verification code to {}", form.pending_email),
                Style::default().fg(Color::Gray),
            ));
            frame.render_widget(Paragraph::new(info), chunks[0]);
        }
    }

    for (i, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[i + 1], field, i == form.active_field_index);
    }

    let busy_row = chunks[form.fields.len() + 1];
    if form.busy {
        let busy_label = match (form.tab, form.stage) {
            (AuthTab::Login, _) => "Signing in...",
            (AuthTab::Register, AuthStage::Credentials) => "Sending code...",
            (AuthTab::Register, AuthStage::Otp) => "Verifying...",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                busy_label,
                Style::default().fg(Color::Yellow),
            )),
            busy_row,
        );
    }

    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let mut hints = vec![
        key("Tab"),
        Span::raw(" next  "),
        key("Enter"),
        Span::raw(" submit  "),
    ];
    if form.stage == AuthStage::Credentials {
        hints.push(key("Ctrl+T"));
        hints.push(Span::raw(" switch tab  "));
        hints.push(key("Ctrl+G"));
        hints.push(Span::raw(" Google  "));
    }
    hints.push(key("Esc"));
    hints.push(Span::raw(" close"));
    frame.render_widget(
        Paragraph::new(Line::from(hints)),
        chunks[form.fields.len() + 2],
    );
}
