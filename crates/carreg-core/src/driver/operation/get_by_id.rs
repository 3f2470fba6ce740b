use super::Operation;

#[derive(Debug, Clone, PartialEq)]
pub struct GetById {
    pub id: i64,
}

impl From<GetById> for Operation {
    fn from(value: GetById) -> Self {
        Self::GetById(value)
    }
}
