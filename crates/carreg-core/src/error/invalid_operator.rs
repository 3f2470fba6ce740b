use super::Error;

/// Error when a filter token names an operator outside
/// `eq, neq, gt, get, lt, let, like`.
#[derive(Debug)]
pub(super) struct InvalidOperatorError {
    keyword: Box<str>,
}

impl std::error::Error for InvalidOperatorError {}

impl core::fmt::Display for InvalidOperatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid filter operator: `{}`", self.keyword)
    }
}

impl Error {
    pub fn invalid_operator(keyword: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidOperator(InvalidOperatorError {
            keyword: keyword.into().into(),
        }))
    }

    pub fn is_invalid_operator(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidOperator(_)))
    }
}
