use super::Operation;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteById {
    pub id: i64,
}

impl From<DeleteById> for Operation {
    fn from(value: DeleteById) -> Self {
        Self::DeleteById(value)
    }
}
