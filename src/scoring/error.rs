use thiserror::Error;

/// Failures the scoring engine reports to its callers.
///
/// Neither variant is fatal: `InvalidInput` aborts one computation and should be
/// shown to the user as a validation message, `UnparseableDeadline` is absorbed
/// by [`crate::scoring::deadline_urgency`] into a neutral band.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("unparseable deadline '{0}'")]
    UnparseableDeadline(String),
}

impl EngineError {
    pub fn invalid(field: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
