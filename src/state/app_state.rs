//! Application state definitions

use super::forms::{AuthForm, CategoryForm};
use crate::auth::User;
use crate::qr::catalog::{category_by_id, Category, CATEGORIES};
use std::collections::HashSet;

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Form,
}

impl Focus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Sidebar => Self::Form,
            Self::Form => Self::Sidebar,
        };
    }
}

/// Main application state
pub struct AppState {
    // Category selection
    pub sidebar_index: usize,
    pub form: CategoryForm,
    pub favorites: HashSet<String>,

    // Last generated output, recomputed on demand
    pub payload: Option<String>,
    pub preview: Option<String>,

    // Session
    pub user: Option<User>,
    pub auth_dialog: Option<AuthForm>,

    // UI state
    pub focus: Focus,
    pub status_message: Option<String>,
    error_queue: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sidebar_index: 0,
            form: CategoryForm::new(&CATEGORIES[0]),
            favorites: HashSet::new(),
            payload: None,
            preview: None,
            user: None,
            auth_dialog: None,
            focus: Focus::default(),
            status_message: None,
            error_queue: Vec::new(),
        }
    }
}

impl AppState {
    /// The currently selected category
    pub fn selected_category(&self) -> &'static Category {
        self.form.category
    }

    /// Categories in sidebar order: favorites first, catalog order otherwise
    pub fn sorted_categories(&self) -> Vec<&'static Category> {
        let mut categories: Vec<_> = CATEGORIES.iter().collect();
        categories.sort_by_key(|c| !self.favorites.contains(c.id));
        categories
    }

    /// Category under the sidebar cursor
    pub fn category_under_cursor(&self) -> &'static Category {
        let sorted = self.sorted_categories();
        sorted[self.sidebar_index.min(sorted.len() - 1)]
    }

    /// Move the sidebar cursor down (wraps)
    pub fn sidebar_down(&mut self) {
        self.sidebar_index = (self.sidebar_index + 1) % CATEGORIES.len();
    }

    /// Move the sidebar cursor up (wraps)
    pub fn sidebar_up(&mut self) {
        if self.sidebar_index == 0 {
            self.sidebar_index = CATEGORIES.len() - 1;
        } else {
            self.sidebar_index -= 1;
        }
    }

    /// Select a category: the form is replaced wholesale and any generated
    /// output is dropped, so no value can leak across category schemas.
    pub fn select_category(&mut self, category: &'static Category) {
        self.form = CategoryForm::new(category);
        self.payload = None;
        self.preview = None;
    }

    /// Select a category by id (used when restoring from config)
    pub fn select_category_id(&mut self, id: &str) -> bool {
        match category_by_id(id) {
            Some(category) => {
                self.select_category(category);
                true
            }
            None => false,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle favorite status for a category id
    pub fn toggle_favorite(&mut self, id: &str) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.to_string());
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_queue.push(message.into());
    }

    /// Check if there are errors to display
    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Current error being displayed (front of queue)
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    /// Errors waiting behind the one on display
    pub fn pending_errors(&self) -> usize {
        self.error_queue.len().saturating_sub(1)
    }

    /// Dismiss the currently displayed error
    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_first_category() {
        let state = AppState::default();
        assert_eq!(state.selected_category().id, "website-links");
        assert_eq!(state.focus, Focus::Sidebar);
    }

    #[test]
    fn test_switching_category_resets_form_values() {
        let mut state = AppState::default();
        for c in "https://a.com".chars() {
            state.form.fields[0].push_char(c);
        }
        assert!(!state.form.values().is_empty());

        state.select_category(&CATEGORIES[8]);
        assert_eq!(state.selected_category().id, "wifi-auth");
        assert!(state.form.values().is_empty());
    }

    #[test]
    fn test_switching_category_drops_generated_output() {
        let mut state = AppState::default();
        state.payload = Some("https://a.com".to_string());
        state.preview = Some("█".to_string());
        state.select_category(&CATEGORIES[1]);
        assert!(state.payload.is_none());
        assert!(state.preview.is_none());
    }

    #[test]
    fn test_select_category_id() {
        let mut state = AppState::default();
        assert!(state.select_category_id("creative-fun"));
        assert_eq!(state.selected_category().id, "creative-fun");
        assert!(!state.select_category_id("no-such-category"));
        assert_eq!(state.selected_category().id, "creative-fun");
    }

    #[test]
    fn test_sidebar_cursor_wraps() {
        let mut state = AppState::default();
        state.sidebar_up();
        assert_eq!(state.sidebar_index, CATEGORIES.len() - 1);
        state.sidebar_down();
        assert_eq!(state.sidebar_index, 0);
    }

    #[test]
    fn test_favorites_sort_first_and_keep_catalog_order() {
        let mut state = AppState::default();
        state.toggle_favorite("wifi-auth");
        state.toggle_favorite("creative-fun");

        let sorted = state.sorted_categories();
        assert_eq!(sorted[0].id, "wifi-auth");
        assert_eq!(sorted[1].id, "creative-fun");
        assert_eq!(sorted[2].id, "website-links");
        assert_eq!(sorted.len(), CATEGORIES.len());
    }

    #[test]
    fn test_toggle_favorite_twice_removes() {
        let mut state = AppState::default();
        state.toggle_favorite("wifi-auth");
        assert!(state.is_favorite("wifi-auth"));
        state.toggle_favorite("wifi-auth");
        assert!(!state.is_favorite("wifi-auth"));
    }

    #[test]
    fn test_error_queue_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first");
        state.push_error("second");
        assert_eq!(state.current_error(), Some("first"));
        assert_eq!(state.pending_errors(), 1);
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error();
    }
}
