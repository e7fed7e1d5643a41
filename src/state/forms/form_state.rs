//! Form state management and form structs

use super::field::FormField;
use crate::qr::catalog::Category;
use std::collections::HashMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Form for the currently selected category, built from its catalog schema.
///
/// Switching categories replaces the whole form, so values can never leak
/// from one category's schema into another's.
#[derive(Debug, Clone)]
pub struct CategoryForm {
    pub category: &'static Category,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl CategoryForm {
    pub fn new(category: &'static Category) -> Self {
        Self {
            category,
            fields: category.fields.iter().map(FormField::from_def).collect(),
            active_field_index: 0,
        }
    }

    /// Returns true if the trailing Generate button row is active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Collect the current values as the name → string map handed to the
    /// encoder. Empty fields are omitted; the encoder coalesces absent keys
    /// to empty strings.
    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| (f.name.to_string(), f.as_text().to_string()))
            .collect()
    }

    /// Labels of required fields that are still empty
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required && f.is_empty())
            .map(|f| f.label)
            .collect()
    }
}

impl Form for CategoryForm {
    fn field_count(&self) -> usize {
        // All schema fields plus the Generate button row
        self.fields.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

/// Which tab of the auth dialog is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

/// Registration progresses from credentials to OTP verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStage {
    #[default]
    Credentials,
    Otp,
}

/// State of the auth dialog (login / register tabs plus the OTP step)
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub stage: AuthStage,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    /// True while a simulated request is in flight
    pub busy: bool,
    /// Registration details carried into the OTP stage
    pub pending_name: String,
    pub pending_email: String,
}

impl AuthForm {
    pub fn new() -> Self {
        let mut form = Self {
            tab: AuthTab::Login,
            stage: AuthStage::Credentials,
            fields: Vec::new(),
            active_field_index: 0,
            busy: false,
            pending_name: String::new(),
            pending_email: String::new(),
        };
        form.rebuild_fields();
        form
    }

    /// Switch between the Login and Register tabs, resetting the fields
    pub fn switch_tab(&mut self) {
        self.tab.toggle();
        self.stage = AuthStage::Credentials;
        self.rebuild_fields();
    }

    /// Move to the OTP verification stage, keeping the registration details
    pub fn advance_to_otp(&mut self) {
        self.pending_name = self.value_of("name").to_string();
        self.pending_email = self.value_of("email").to_string();
        self.stage = AuthStage::Otp;
        self.rebuild_fields();
    }

    /// Return from the OTP stage to the credential fields (resend path)
    pub fn back_to_credentials(&mut self) {
        self.stage = AuthStage::Credentials;
        self.rebuild_fields();
    }

    fn rebuild_fields(&mut self) {
        self.fields = match (self.tab, self.stage) {
            (AuthTab::Login, _) => vec![
                FormField::text("email", "Email", "Enter your email"),
                FormField::text("password", "Password", "Enter your password").masked(),
            ],
            (AuthTab::Register, AuthStage::Credentials) => vec![
                FormField::text("name", "Full Name", "Enter your full name"),
                FormField::text("email", "Email", "Enter your email"),
                FormField::text("password", "Password", "Create a password").masked(),
                FormField::text("confirmPassword", "Confirm Password", "Confirm your password")
                    .masked(),
            ],
            (AuthTab::Register, AuthStage::Otp) => vec![FormField::text(
                "otp",
                "Verification Code",
                "Enter 6-digit code",
            )],
        };
        self.active_field_index = 0;
    }

    /// Value of a named field ("" when absent)
    pub fn value_of(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(FormField::as_text)
            .unwrap_or("")
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AuthForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::catalog::category_by_id;

    fn form(id: &str) -> CategoryForm {
        CategoryForm::new(category_by_id(id).unwrap())
    }

    mod category_form {
        use super::*;

        #[test]
        fn test_new_builds_schema_fields() {
            let f = form("website-links");
            assert_eq!(f.fields.len(), 2);
            assert_eq!(f.fields[0].name, "url");
            assert_eq!(f.active_field_index, 0);
        }

        #[test]
        fn test_field_count_includes_buttons_row() {
            let f = form("website-links");
            assert_eq!(f.field_count(), 3);
        }

        #[test]
        fn test_next_field_reaches_buttons_row_and_wraps() {
            let mut f = form("website-links");
            f.next_field();
            f.next_field();
            assert!(f.is_buttons_row_active());
            f.next_field();
            assert_eq!(f.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut f = form("website-links");
            f.prev_field();
            assert!(f.is_buttons_row_active());
        }

        #[test]
        fn test_active_field_mut_is_none_on_buttons_row() {
            let mut f = form("website-links");
            f.set_active_field(2);
            assert!(f.get_active_field_mut().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut f = form("website-links");
            f.set_active_field(100);
            assert_eq!(f.active_field_index, 2);
        }

        #[test]
        fn test_values_omits_empty_fields() {
            let mut f = form("website-links");
            for c in "https://a.com".chars() {
                f.fields[0].push_char(c);
            }
            let values = f.values();
            assert_eq!(values.get("url").map(String::as_str), Some("https://a.com"));
            assert!(!values.contains_key("title"));
        }

        #[test]
        fn test_values_keys_subset_of_schema() {
            let mut f = form("payments-donations");
            for field in &mut f.fields {
                if field.is_select() {
                    field.next_option();
                } else {
                    field.push_char('1');
                }
            }
            let names: Vec<_> = f.category.fields.iter().map(|d| d.name).collect();
            for key in f.values().keys() {
                assert!(names.contains(&key.as_str()));
            }
        }

        #[test]
        fn test_missing_required_lists_labels() {
            let f = form("contact-communication");
            let missing = f.missing_required();
            assert_eq!(missing, vec!["Contact Type", "Full Name", "Phone Number"]);
        }

        #[test]
        fn test_missing_required_empty_when_filled() {
            let mut f = form("website-links");
            for c in "https://a.com".chars() {
                f.fields[0].push_char(c);
            }
            assert!(f.missing_required().is_empty());
        }

        #[test]
        fn test_new_form_has_no_values_from_previous_category() {
            // Category switch is modeled as constructing a fresh form.
            let mut wifi = form("wifi-auth");
            for c in "Home".chars() {
                wifi.fields[1].push_char(c);
            }
            let contact = form("contact-communication");
            assert!(contact.values().is_empty());
        }
    }

    mod auth_form {
        use super::*;

        #[test]
        fn test_login_tab_fields() {
            let f = AuthForm::new();
            assert_eq!(f.tab, AuthTab::Login);
            assert_eq!(f.fields.len(), 2);
            assert!(f.fields[1].masked);
        }

        #[test]
        fn test_switch_tab_rebuilds_register_fields() {
            let mut f = AuthForm::new();
            f.switch_tab();
            assert_eq!(f.tab, AuthTab::Register);
            assert_eq!(f.fields.len(), 4);
            assert_eq!(f.fields[0].name, "name");
        }

        #[test]
        fn test_advance_to_otp_keeps_registration_details() {
            let mut f = AuthForm::new();
            f.switch_tab();
            for c in "Ada".chars() {
                f.fields[0].push_char(c);
            }
            for c in "ada@example.com".chars() {
                f.fields[1].push_char(c);
            }
            f.advance_to_otp();
            assert_eq!(f.stage, AuthStage::Otp);
            assert_eq!(f.fields.len(), 1);
            assert_eq!(f.pending_name, "Ada");
            assert_eq!(f.pending_email, "ada@example.com");
        }

        #[test]
        fn test_back_to_credentials_resets_stage() {
            let mut f = AuthForm::new();
            f.switch_tab();
            f.advance_to_otp();
            f.back_to_credentials();
            assert_eq!(f.stage, AuthStage::Credentials);
            assert_eq!(f.fields.len(), 4);
        }

        #[test]
        fn test_value_of_unknown_field_is_empty() {
            let f = AuthForm::new();
            assert_eq!(f.value_of("otp"), "");
        }

        #[test]
        fn test_field_navigation_wraps() {
            let mut f = AuthForm::new();
            f.next_field();
            assert_eq!(f.active_field(), 1);
            f.next_field();
            assert_eq!(f.active_field(), 0);
            f.prev_field();
            assert_eq!(f.active_field(), 1);
        }
    }
}
