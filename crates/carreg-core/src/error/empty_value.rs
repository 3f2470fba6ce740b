use super::Error;

/// Error when a filter token ends in a dangling colon, e.g. `and:`.
///
/// Only raised for two-segment tokens; `or:eq:` carries an explicit empty
/// value and parses.
#[derive(Debug)]
pub(super) struct EmptyValueError {
    token: Box<str>,
}

impl std::error::Error for EmptyValueError {}

impl core::fmt::Display for EmptyValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "empty filter value: `{}`", self.token)
    }
}

impl Error {
    pub fn empty_value(token: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyValue(EmptyValueError {
            token: token.into().into(),
        }))
    }

    pub fn is_empty_value(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::EmptyValue(_)))
    }
}
