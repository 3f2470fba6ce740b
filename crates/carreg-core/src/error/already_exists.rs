use super::Error;

/// Error when a write collides with a unique constraint, such as a
/// registration number already present in the table.
#[derive(Debug)]
pub(super) struct AlreadyExistsError {
    context: Option<Box<str>>,
}

impl std::error::Error for AlreadyExistsError {}

impl core::fmt::Display for AlreadyExistsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("record already exists")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an already-exists error.
    ///
    /// Drivers translate store-native unique violations into this kind so
    /// callers never match on SQLSTATE codes.
    pub fn already_exists(context: impl Into<String>) -> Error {
        let context = context.into();
        let context = (!context.is_empty()).then(|| context.into());
        Error::from(super::ErrorKind::AlreadyExists(AlreadyExistsError { context }))
    }

    pub fn is_already_exists(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::AlreadyExists(_)))
    }
}
