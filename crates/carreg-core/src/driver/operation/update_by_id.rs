use super::Operation;
use crate::CarPatch;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateById {
    pub id: i64,

    /// Fields to change. Must not be empty.
    pub patch: CarPatch,
}

impl From<UpdateById> for Operation {
    fn from(value: UpdateById) -> Self {
        Self::UpdateById(value)
    }
}
