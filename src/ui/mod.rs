//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod generator;
mod layout;
mod preview;
mod sidebar;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, form_area, preview_area) = layout::create_layout(area);

    sidebar::draw(frame, sidebar_area, app);
    generator::draw(frame, form_area, app);
    preview::draw(frame, preview_area, app);

    layout::draw_status_bar(frame, app);

    // Modal overlays, topmost last
    if let Some(auth) = &app.state.auth_dialog {
        components::render_auth_dialog(frame, auth);
    }
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, app.state.pending_errors());
    }
}
