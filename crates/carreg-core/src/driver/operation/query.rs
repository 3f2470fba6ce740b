use super::Operation;
use crate::{Filter, Pagination};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub filter: Filter,
    pub pagination: Pagination,
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
