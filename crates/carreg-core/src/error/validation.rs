use super::Error;

/// Error when a submitted field fails validation (pattern or range).
#[derive(Debug)]
pub(super) struct ValidationError {
    field: &'static str,
    reason: Box<str>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid `{}`: {}", self.field, self.reason)
    }
}

impl Error {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            field,
            reason: reason.into().into(),
        }))
    }

    pub fn is_validation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Validation(_)))
    }
}
