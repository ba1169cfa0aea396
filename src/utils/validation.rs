//! Validation rules for ticket submissions.
//!
//! Every entry point (the one-shot CLI, the interactive shell, and the store
//! itself) goes through these functions so a stored ticket always satisfies
//! the same rules.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for the submitter's name (in characters, after trimming).
pub const MIN_NAME_LENGTH: usize = 3;

/// Minimum length for the message body (in characters, after trimming).
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// `local@domain.tld`: no whitespace or `@` in any part, at least one dot after the `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid")
});

// ============================================================================
// Error types
// ============================================================================

/// A form field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Message => write!(f, "message"),
        }
    }
}

/// A single failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failure found in one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> std::result::Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

// ============================================================================
// Field rules
// ============================================================================

/// Validates the submitter's name: at least `MIN_NAME_LENGTH` characters once trimmed.
pub fn validate_name(name: &str) -> std::result::Result<(), FieldError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::new(
            Field::Name,
            format!("must be at least {MIN_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Validates the shape of an email address.
pub fn validate_email(email: &str) -> std::result::Result<(), FieldError> {
    if !EMAIL_REGEX.is_match(email.trim()) {
        return Err(FieldError::new(
            Field::Email,
            "must be a valid address like user@example.com",
        ));
    }
    Ok(())
}

/// Validates the message body: at least `MIN_MESSAGE_LENGTH` characters once trimmed.
pub fn validate_message(message: &str) -> std::result::Result<(), FieldError> {
    if message.trim().chars().count() < MIN_MESSAGE_LENGTH {
        return Err(FieldError::new(
            Field::Message,
            format!("must be at least {MIN_MESSAGE_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Runs the rule belonging to `field`.
pub fn validate_field(field: Field, value: &str) -> std::result::Result<(), FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
    }
}

/// Runs all three rules and collects every failure.
pub fn validate_submission(
    name: &str,
    email: &str,
    message: &str,
) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for result in [
        validate_name(name),
        validate_email(email),
        validate_message(message),
    ] {
        if let Err(e) = result {
            errors.push(e);
        }
    }
    errors.into_result()
}
