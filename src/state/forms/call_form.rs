//! Call request form state and validation

use super::field::FormField;
use super::preset::{demo_option, DEMO_OPTIONS};
use thiserror::Error;

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
}

/// Which fields the form asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormVariant {
    /// Ask for (and send) the contact's company name
    pub require_company: bool,
}

/// Identifies one of the text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    PhoneNumber,
    CompanyName,
}

/// What occupies a focusable row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// Preset selector
    Preset,
    /// A text input
    Field(FieldId),
    /// Submit button
    Submit,
}

/// Validated user input, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequestInput {
    pub name: String,
    pub phone_number: String,
    pub company_name: Option<String>,
}

/// A field that failed its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Every failed field from one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
impl ValidationErrors {
    /// Message for a given field, if it failed
    pub fn message_for(&self, field: FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Call request form
#[derive(Debug, Clone)]
pub struct CallRequestForm {
    pub variant: FormVariant,
    pub name: FormField,
    pub phone_number: FormField,
    pub company_name: FormField,
    /// Preset last chosen in the selector; `None` shows the placeholder
    pub selected_preset: Option<usize>,
    pub active_field_index: usize,
}

impl CallRequestForm {
    /// Create a form prefilled with the first preset
    pub fn new(variant: FormVariant) -> Self {
        let mut form = Self {
            variant,
            name: FormField::text(
                "name",
                "Name",
                "Mike",
                2,
                "Name must be at least 2 characters.",
            ),
            phone_number: FormField::text(
                "phone_number",
                "Phone Number",
                "+351912580952",
                10,
                "Phone number must be at least 10 characters.",
            ),
            company_name: FormField::text(
                "company_name",
                "Company Name",
                "Drifter",
                2,
                "Company name must be at least 2 characters.",
            ),
            selected_preset: None,
            active_field_index: 0,
        };
        form.fill_from_preset(0);
        form
    }

    /// Ordered list of focusable rows for this variant
    pub fn rows(&self) -> Vec<FormRow> {
        let mut rows = vec![
            FormRow::Preset,
            FormRow::Field(FieldId::Name),
            FormRow::Field(FieldId::PhoneNumber),
        ];
        if self.variant.require_company {
            rows.push(FormRow::Field(FieldId::CompanyName));
        }
        rows.push(FormRow::Submit);
        rows
    }

    /// Row at the given index
    pub fn row(&self, index: usize) -> Option<FormRow> {
        self.rows().get(index).copied()
    }

    /// Row that currently has focus
    pub fn active_row(&self) -> FormRow {
        self.row(self.active_field_index).unwrap_or(FormRow::Submit)
    }

    /// Text inputs shown for this variant, in display order
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.rows()
            .into_iter()
            .filter_map(|row| match row {
                FormRow::Field(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::CompanyName => &self.company_name,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::PhoneNumber => &mut self.phone_number,
            FieldId::CompanyName => &mut self.company_name,
        }
    }

    /// Replace every field value with the preset at `index`.
    /// Out-of-range indices leave the form untouched and return false.
    pub fn select_preset(&mut self, index: usize) -> bool {
        if !self.fill_from_preset(index) {
            return false;
        }
        self.selected_preset = Some(index);
        true
    }

    /// Move the selector to the next preset (wraps around)
    pub fn next_preset(&mut self) -> bool {
        let next = match self.selected_preset {
            Some(i) => (i + 1) % DEMO_OPTIONS.len(),
            None => 0,
        };
        self.select_preset(next)
    }

    /// Move the selector to the previous preset (wraps around)
    pub fn prev_preset(&mut self) -> bool {
        let prev = match self.selected_preset {
            Some(0) | None => DEMO_OPTIONS.len() - 1,
            Some(i) => i - 1,
        };
        self.select_preset(prev)
    }

    fn fill_from_preset(&mut self, index: usize) -> bool {
        let Some(option) = demo_option(index) else {
            return false;
        };
        self.name.set_text(option.name);
        self.phone_number.set_text(option.phone_number);
        self.company_name.set_text(option.company_name);
        self.name.reset_validation();
        self.phone_number.reset_validation();
        self.company_name.reset_validation();
        true
    }

    /// Validate all visible fields. Every failing field records its message.
    pub fn validate(&mut self) -> Result<CallRequestInput, ValidationErrors> {
        let mut errors = Vec::new();
        for id in self.field_ids() {
            let field = self.field_mut(id);
            if !field.validate() {
                errors.push(FieldError {
                    field: id,
                    message: field.invalid_message.clone(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        Ok(CallRequestInput {
            name: self.name.as_text().to_string(),
            phone_number: self.phone_number.as_text().to_string(),
            company_name: self
                .variant
                .require_company
                .then(|| self.company_name.as_text().to_string()),
        })
    }

    /// Whether the submit button row has focus
    pub fn is_submit_row_active(&self) -> bool {
        self.active_row() == FormRow::Submit
    }
}

impl Default for CallRequestForm {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}

impl Form for CallRequestForm {
    fn field_count(&self) -> usize {
        self.rows().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_row() {
            FormRow::Field(id) => Some(self.field_mut(id)),
            FormRow::Preset | FormRow::Submit => None,
        }
    }
}
