mod delete_by_id;
pub use delete_by_id::DeleteById;

mod get_by_id;
pub use get_by_id::GetById;

mod insert;
pub use insert::Insert;

mod query;
pub use query::Query;

mod update_by_id;
pub use update_by_id::UpdateById;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Save new records, skipping registration numbers already stored
    Insert(Insert),

    /// Delete one record by id
    DeleteById(DeleteById),

    /// Get one record by id
    GetById(GetById),

    /// List records matching a filter, optionally paginated
    Query(Query),

    /// Apply a sparse patch to one record by id
    UpdateById(UpdateById),
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Insert(_) => "insert",
            Operation::DeleteById(_) => "delete_by_id",
            Operation::GetById(_) => "get_by_id",
            Operation::Query(_) => "query",
            Operation::UpdateById(_) => "update_by_id",
        }
    }
}
