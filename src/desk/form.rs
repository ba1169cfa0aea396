use std::collections::BTreeMap;

use crate::types::Priority;
use crate::utils::validation::{Field, ValidationErrors};

/// Raw values typed into the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub priority: Priority,
}

impl TicketForm {
    /// An empty form with `priority` preselected.
    pub fn blank(priority: Priority) -> Self {
        Self {
            priority,
            ..Default::default()
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Per-field error markers currently shown next to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMarkers {
    markers: BTreeMap<Field, String>,
}

impl FieldMarkers {
    pub fn mark(&mut self, field: Field, message: impl Into<String>) {
        self.markers.insert(field, message.into());
    }

    pub fn unmark(&mut self, field: Field) {
        self.markers.remove(&field);
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Replace every marker with the failures in `errors`.
    pub fn replace_with(&mut self, errors: &ValidationErrors) {
        self.clear();
        for e in errors.iter() {
            self.mark(e.field, e.message.clone());
        }
    }

    pub fn is_marked(&self, field: Field) -> bool {
        self.markers.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.markers.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.markers.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_submission;

    #[test]
    fn test_blank_form_keeps_priority() {
        let form = TicketForm::blank(Priority::High);
        assert_eq!(form.priority, Priority::High);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_form_field_access() {
        let mut form = TicketForm::default();
        form.set(Field::Email, "x@y.zz");
        form.set(Field::Message, String::from("Screen stays black"));
        assert_eq!(form.email, "x@y.zz");
        assert_eq!(form.message, "Screen stays black");
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_markers_replace_with_errors() {
        let mut markers = FieldMarkers::default();
        markers.mark(Field::Name, "stale");

        let errors = validate_submission("Alice", "bad", "short").unwrap_err();
        markers.replace_with(&errors);

        assert!(!markers.is_marked(Field::Name));
        assert!(markers.is_marked(Field::Email));
        assert!(markers.is_marked(Field::Message));
        let fields: Vec<Field> = markers.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Email, Field::Message]);
    }
}
