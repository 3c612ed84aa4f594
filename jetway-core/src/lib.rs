pub mod input;
pub mod search;

/// Caller input rejected before it reaches the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid date-time '{0}': expected YYYY-MM-DD HH:MM or RFC 3339")]
    InvalidDateTime(String),
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl CoreError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
