use super::Error;

/// Error when an update is compiled from a patch with no field present.
///
/// Returned instead of emitting `UPDATE .. SET WHERE ..`. Callers decide
/// whether this is a no-op or a rejected request.
#[derive(Debug)]
pub(super) struct NoFieldsToUpdateError;

impl std::error::Error for NoFieldsToUpdateError {}

impl core::fmt::Display for NoFieldsToUpdateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no fields to update")
    }
}

impl Error {
    pub fn no_fields_to_update() -> Error {
        Error::from(super::ErrorKind::NoFieldsToUpdate(NoFieldsToUpdateError))
    }

    pub fn is_no_fields_to_update(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NoFieldsToUpdate(_)))
    }
}
