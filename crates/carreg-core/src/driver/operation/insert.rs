use super::Operation;
use crate::Car;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Records to save. Ids are assigned by the store.
    pub cars: Vec<Car>,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
