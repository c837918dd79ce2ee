//! Form field value objects

/// Represents a single text field with its configuration, value, and
/// validation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Minimum length in characters
    pub min_len: usize,
    /// Shown under the field when validation fails
    pub invalid_message: String,
    /// Current validation error, if any
    pub error: Option<String>,
    /// Set after the first validation; from then on every edit re-validates
    pub checked: bool,
}

impl FormField {
    /// Create a new text field with a minimum-length rule
    pub fn text(
        name: &str,
        label: &str,
        placeholder: &str,
        min_len: usize,
        invalid_message: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            min_len,
            invalid_message: invalid_message.to_string(),
            error: None,
            checked: false,
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.revalidate_if_checked();
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.revalidate_if_checked();
    }

    /// Clear the field value and its error
    pub fn clear(&mut self) {
        self.value.clear();
        self.reset_validation();
    }

    /// Forget any validation outcome
    pub fn reset_validation(&mut self) {
        self.error = None;
        self.checked = false;
    }

    /// Check the minimum-length rule, recording the outcome on the field
    pub fn validate(&mut self) -> bool {
        self.checked = true;
        if self.value.chars().count() < self.min_len {
            self.error = Some(self.invalid_message.clone());
            false
        } else {
            self.error = None;
            true
        }
    }

    fn revalidate_if_checked(&mut self) {
        if self.checked {
            self.validate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_field() -> FormField {
        FormField::text("name", "Name", "Mike", 2, "Name must be at least 2 characters.")
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = name_field();
        assert_eq!(field.as_text(), "");
        assert!(field.error.is_none());
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = name_field();
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        field.pop_char();
        assert_eq!(field.as_text(), "J");
    }

    #[test]
    fn test_validate_sets_and_clears_error() {
        let mut field = name_field();
        field.set_text("M");
        assert!(!field.validate());
        assert_eq!(
            field.error.as_deref(),
            Some("Name must be at least 2 characters.")
        );

        field.set_text("Mi");
        assert!(field.validate());
        assert!(field.error.is_none());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut field = name_field();
        field.set_text("é");
        assert!(!field.validate());
        field.set_text("Zoë");
        assert!(field.validate());
    }

    #[test]
    fn test_checked_field_revalidates_on_edit() {
        let mut field = name_field();
        field.set_text("M");
        field.validate();
        field.push_char('i');
        assert!(field.error.is_none());
        field.pop_char();
        assert!(field.error.is_some());
    }

    #[test]
    fn test_untouched_field_does_not_validate_on_edit() {
        let mut field = name_field();
        field.push_char('M');
        assert!(field.error.is_none());
    }

    #[test]
    fn test_clear_resets_error() {
        let mut field = name_field();
        field.validate();
        assert!(field.error.is_some());
        field.clear();
        assert!(field.error.is_none());
        assert!(!field.checked);
    }
}
