use super::Error;

/// Error when the external registry cannot describe a registration number.
#[derive(Debug)]
pub(super) struct RegistryLookupError {
    reg_num: Box<str>,
}

impl std::error::Error for RegistryLookupError {}

impl core::fmt::Display for RegistryLookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "registry lookup failed for `{}`", self.reg_num)
    }
}

impl Error {
    /// Creates a registry lookup error caused by `cause`.
    pub fn registry_lookup(reg_num: impl Into<String>, cause: Error) -> Error {
        cause.context(Error::from(super::ErrorKind::RegistryLookup(
            RegistryLookupError {
                reg_num: reg_num.into().into(),
            },
        )))
    }

    pub fn is_registry_lookup(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::RegistryLookup(_)))
    }
}
