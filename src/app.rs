//! Application state and core logic

use crate::auth::{AuthProvider, MockedAuthService};
use crate::config::TuiConfig;
use crate::qr::{payload, render};
use crate::state::{AppState, AuthForm, AuthStage, AuthTab, Focus, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Auth provider (a simulation in this build)
    auth: Box<dyn AuthProvider>,
    /// Persisted preferences
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load config: {e}");
            TuiConfig::default()
        });
        Self::with_parts(Box::new(MockedAuthService::new()), config)
    }

    fn with_parts(auth: Box<dyn AuthProvider>, config: TuiConfig) -> Self {
        let mut state = AppState::default();
        if let Some(favorites) = &config.favorites {
            for id in favorites {
                if !state.is_favorite(id) {
                    state.toggle_favorite(id);
                }
            }
        }
        if let Some(last) = &config.last_category {
            state.select_category_id(last);
        }
        // Place the cursor on the restored category
        let selected = state.selected_category().id;
        state.sidebar_index = state
            .sorted_categories()
            .iter()
            .position(|c| c.id == selected)
            .unwrap_or(0);

        Self {
            state,
            auth,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle auth dialog (modal)
        if self.state.auth_dialog.is_some() {
            self.handle_auth_key(key).await?;
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.quit = true;
                    return Ok(());
                }
                KeyCode::Char('l') => {
                    self.toggle_session();
                    return Ok(());
                }
                KeyCode::Char('y') => {
                    self.copy_payload()?;
                    return Ok(());
                }
                KeyCode::Char('s') => {
                    self.save_png();
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.state.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Form => self.handle_form_key(key),
        }
        Ok(())
    }

    /// Handle keys while the sidebar has focus
    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.sidebar_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.sidebar_up(),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                let category = self.state.category_under_cursor();
                self.state.select_category(category);
                self.state.focus = Focus::Form;
                self.config.last_category = Some(category.id.to_string());
                self.save_config();
            }
            KeyCode::Char('f') => {
                let id = self.state.category_under_cursor().id;
                self.state.toggle_favorite(id);
                let mut favorites: Vec<String> = self.state.favorites.iter().cloned().collect();
                favorites.sort();
                self.config.favorites = Some(favorites);
                self.save_config();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys while the form has focus
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.focus = Focus::Sidebar;
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.next_field();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.prev_field();
                return;
            }
            _ => {}
        }

        if self.state.form.is_buttons_row_active() {
            if key.code == KeyCode::Enter {
                self.generate();
            }
            return;
        }

        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };

        if field.is_select() {
            match key.code {
                KeyCode::Left => field.prev_option(),
                KeyCode::Right | KeyCode::Char(' ') => field.next_option(),
                KeyCode::Enter => self.state.form.next_field(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.push_char(c)
            }
            KeyCode::Backspace => field.pop_char(),
            KeyCode::Enter if field.is_multiline() => field.push_char('\n'),
            KeyCode::Enter => self.state.form.next_field(),
            _ => {}
        }
    }

    /// Encode the form into a payload string and render the preview
    fn generate(&mut self) {
        let missing = self.state.form.missing_required();
        if !missing.is_empty() {
            self.state.push_error(format!(
                "Please fill in the required fields: {}",
                missing.join(", ")
            ));
            return;
        }

        let category = self.state.selected_category();
        let values = self.state.form.values();
        let data = payload::encode(category.id, &values);
        if data.is_empty() {
            self.state
                .push_error("Nothing to encode. Fill in at least one field.");
            return;
        }

        match render::render_unicode(&data) {
            Ok(preview) => {
                tracing::info!(category = category.id, len = data.len(), "generated");
                self.state.payload = Some(data);
                self.state.preview = Some(preview);
                self.state.status_message = Some("QR Code Generated!".to_string());
            }
            Err(e) => self.state.push_error(format!("Failed to generate: {e}")),
        }
    }

    /// Copy the generated payload to the system clipboard
    fn copy_payload(&mut self) -> Result<()> {
        let Some(data) = self.state.payload.clone() else {
            self.state.push_error("Generate a QR code first");
            return Ok(());
        };
        self.copy_to_clipboard(&data)?;
        self.state.status_message = Some("Copied to clipboard!".to_string());
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Save the generated code as a PNG, gated on the session and its plan
    fn save_png(&mut self) {
        let Some(data) = self.state.payload.clone() else {
            self.state.push_error("Generate a QR code first");
            return;
        };

        let Some(user) = &mut self.state.user else {
            self.state.auth_dialog = Some(AuthForm::new());
            return;
        };
        if user.at_limit() {
            let max_qr_codes = user.max_qr_codes;
            self.state.push_error(format!(
                "You've reached your plan limit of {} QR codes",
                max_qr_codes
            ));
            return;
        }

        let mut opts = render::RenderOptions::default();
        if let Some(width) = self.config.qr_width {
            opts.width = width;
        }
        let path = render::download_path(
            &self.config.output_path(),
            self.state.form.category.name,
            chrono::Utc::now().timestamp_millis(),
        );

        match render::save_png(&data, &opts, &path) {
            Ok(()) => {
                user.qr_codes_count += 1;
                tracing::info!(path = %path.display(), "saved png");
                self.state.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => self.state.push_error(format!("Failed to save: {e}")),
        }
    }

    /// Ctrl+L: open the auth dialog, or sign out when a session exists
    fn toggle_session(&mut self) {
        if self.state.user.take().is_some() {
            self.state.status_message = Some("Signed out".to_string());
        } else {
            self.state.auth_dialog = Some(AuthForm::new());
        }
    }

    /// Handle keys while the auth dialog is open
    async fn handle_auth_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.state.auth_dialog.as_mut() else {
            return Ok(());
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') if form.stage == AuthStage::Credentials => {
                    form.switch_tab();
                    return Ok(());
                }
                KeyCode::Char('g') if form.stage == AuthStage::Credentials => {
                    self.login_with_google().await;
                    return Ok(());
                }
                KeyCode::Char('c') => {
                    self.quit = true;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }

        match key.code {
            KeyCode::Esc => {
                if form.stage == AuthStage::Otp {
                    form.back_to_credentials();
                } else {
                    self.state.auth_dialog = None;
                }
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => self.submit_auth().await,
            KeyCode::Char(c) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the auth dialog in its current tab and stage
    async fn submit_auth(&mut self) {
        let Some(form) = self.state.auth_dialog.as_mut() else {
            return;
        };
        let tab = form.tab;
        let stage = form.stage;
        let email = form.value_of("email").to_string();
        let password = form.value_of("password").to_string();
        let confirm = form.value_of("confirmPassword").to_string();
        let name = form.value_of("name").to_string();
        let otp = form.value_of("otp").to_string();
        let pending_name = form.pending_name.clone();
        let pending_email = form.pending_email.clone();
        form.busy = true;

        match (tab, stage) {
            (AuthTab::Login, _) => match self.auth.login(&email, &password).await {
                Ok(user) => {
                    self.state.status_message = Some(format!("Welcome back, {}!", user.name));
                    self.state.user = Some(user);
                    self.state.auth_dialog = None;
                    return;
                }
                Err(e) => self.state.push_error(e.to_string()),
            },
            (AuthTab::Register, AuthStage::Credentials) => {
                match self.auth.send_otp(&name, &email, &password, &confirm).await {
                    Ok(()) => {
                        if let Some(form) = self.state.auth_dialog.as_mut() {
                            form.advance_to_otp();
                        }
                    }
                    Err(e) => self.state.push_error(e.to_string()),
                }
            }
            (AuthTab::Register, AuthStage::Otp) => {
                match self.auth.verify_otp(&pending_name, &pending_email, &otp).await {
                    Ok(user) => {
                        self.state.status_message = Some("Account created!".to_string());
                        self.state.user = Some(user);
                        self.state.auth_dialog = None;
                        return;
                    }
                    Err(e) => self.state.push_error(e.to_string()),
                }
            }
        }

        if let Some(form) = self.state.auth_dialog.as_mut() {
            form.busy = false;
        }
    }

    /// Federated sign-in from the auth dialog
    async fn login_with_google(&mut self) {
        if let Some(form) = self.state.auth_dialog.as_mut() {
            form.busy = true;
        }
        match self.auth.login_with_google().await {
            Ok(user) => {
                self.state.status_message = Some(format!("Welcome, {}!", user.name));
                self.state.user = Some(user);
                self.state.auth_dialog = None;
            }
            Err(e) => {
                self.state.push_error(e.to_string());
                if let Some(form) = self.state.auth_dialog.as_mut() {
                    form.busy = false;
                }
            }
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!("failed to save config: {e}");
        }
    }
}
