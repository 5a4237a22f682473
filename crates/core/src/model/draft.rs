use thiserror::Error;

/// Errors raised while turning submitted form data into an insertable record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DraftError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("score must be an integer, got `{raw}`")]
    InvalidScore { raw: String },
}

/// Take a required field, rejecting absence.
///
/// An empty string is a present value; only a field that was never submitted
/// counts as missing.
pub(crate) fn required(field: &'static str, value: Option<String>) -> Result<String, DraftError> {
    value.ok_or(DraftError::MissingField { field })
}
