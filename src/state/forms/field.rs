//! Form field value objects

use crate::qr::catalog::{FieldDef, FieldKind};

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Cursor into a fixed option list; `None` until the user picks one.
    Select {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub kind: FieldKind,
    /// Render the value as bullets (passwords in the auth dialog).
    pub masked: bool,
    pub value: FieldValue,
}

impl FormField {
    /// Build an empty field from a catalog definition
    pub fn from_def(def: &FieldDef) -> Self {
        let value = match def.kind {
            FieldKind::Select => FieldValue::Select {
                options: def.options,
                selected: None,
            },
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name: def.name,
            label: def.label,
            placeholder: def.placeholder,
            required: def.required,
            kind: def.kind,
            masked: false,
            value,
        }
    }

    /// Create a free-standing text field (auth dialog fields are not part of
    /// the catalog)
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder: Some(placeholder),
            required: true,
            kind: FieldKind::Text,
            masked: false,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Mark the field as masked (password entry)
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::TextArea
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select { .. })
    }

    /// Get the effective string value ("" when nothing is entered/selected)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { options, selected } => {
                selected.map(|i| options[i]).unwrap_or("")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        // Number fields only accept digits and a decimal point.
        if self.kind == FieldKind::Number && !c.is_ascii_digit() && c != '.' {
            return;
        }
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Select { .. } => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Advance a select field to the next option (wraps)
    pub fn next_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(selected.map_or(0, |i| (i + 1) % options.len()));
        }
    }

    /// Move a select field to the previous option (wraps)
    pub fn prev_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(selected.map_or(options.len() - 1, |i| {
                if i == 0 {
                    options.len() - 1
                } else {
                    i - 1
                }
            }));
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => match selected {
                Some(i) => options[*i].to_string(),
                None => String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::catalog::category_by_id;

    fn field(category_id: &str, name: &str) -> FormField {
        let def = category_by_id(category_id)
            .unwrap()
            .fields
            .iter()
            .find(|f| f.name == name)
            .unwrap();
        FormField::from_def(def)
    }

    #[test]
    fn test_text_field_push_and_pop() {
        let mut f = field("website-links", "url");
        f.push_char('a');
        f.push_char('b');
        assert_eq!(f.as_text(), "ab");
        f.pop_char();
        assert_eq!(f.as_text(), "a");
    }

    #[test]
    fn test_number_field_rejects_letters() {
        let mut f = field("payments-donations", "amount");
        f.push_char('1');
        f.push_char('x');
        f.push_char('.');
        f.push_char('5');
        assert_eq!(f.as_text(), "1.5");
    }

    #[test]
    fn test_select_starts_unselected() {
        let f = field("contact-communication", "type");
        assert!(f.is_select());
        assert_eq!(f.as_text(), "");
        assert!(f.is_empty());
    }

    #[test]
    fn test_select_cycles_forward_and_wraps() {
        let mut f = field("contact-communication", "type");
        f.next_option();
        assert_eq!(f.as_text(), "vCard");
        for _ in 0..4 {
            f.next_option();
        }
        assert_eq!(f.as_text(), "WhatsApp");
        f.next_option();
        assert_eq!(f.as_text(), "vCard");
    }

    #[test]
    fn test_select_prev_from_unselected_picks_last() {
        let mut f = field("contact-communication", "type");
        f.prev_option();
        assert_eq!(f.as_text(), "WhatsApp");
    }

    #[test]
    fn test_select_ignores_typed_chars() {
        let mut f = field("contact-communication", "type");
        f.push_char('x');
        assert_eq!(f.as_text(), "");
    }

    #[test]
    fn test_clear_resets_both_kinds() {
        let mut text = field("website-links", "url");
        text.push_char('a');
        text.clear();
        assert!(text.is_empty());

        let mut select = field("contact-communication", "type");
        select.next_option();
        select.clear();
        assert!(select.is_empty());
    }

    #[test]
    fn test_multiline_follows_kind() {
        assert!(field("contact-communication", "message").is_multiline());
        assert!(!field("website-links", "url").is_multiline());
    }
}
