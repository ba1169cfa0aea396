use thiserror::Error;

use crate::utils::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum TicketDeskError {
    #[error("please correct the errors: {0}")]
    Validation(ValidationErrors),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid filter '{0}'")]
    InvalidFilter(String),

    #[error("invalid ticket id '{0}'")]
    InvalidTicketId(String),

    #[error("unknown time zone '{0}'")]
    InvalidTimeZone(String),

    #[error("no ticket ids left after {0}")]
    IdsExhausted(u64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<ValidationErrors> for TicketDeskError {
    fn from(errors: ValidationErrors) -> Self {
        TicketDeskError::Validation(errors)
    }
}

impl TicketDeskError {
    /// Constructor used by `enum_display_fromstr!` for priorities.
    pub fn invalid_priority(s: String) -> Self {
        TicketDeskError::InvalidPriority(s)
    }
}

pub type Result<T> = std::result::Result<T, TicketDeskError>;
