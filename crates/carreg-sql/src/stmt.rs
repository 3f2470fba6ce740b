mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

pub use carreg_core::driver::operation::{DeleteById, GetById, Insert, Query, UpdateById};

use carreg_core::{driver::Operation, filter::Column};

/// Most bind parameters one statement may carry. The wire protocol encodes
/// the count as an `i16`.
pub const MAX_PARAMS: usize = i16::MAX as usize;

/// Most rows a single `INSERT` may carry without exceeding [`MAX_PARAMS`].
pub const MAX_INSERT_ROWS: usize = MAX_PARAMS / Column::ALL.len();

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    DeleteById(DeleteById),
    GetById(GetById),
    Insert(Insert),
    Query(Query),
    UpdateById(UpdateById),
}

impl Statement {
    pub fn is_update(&self) -> bool {
        matches!(self, Statement::UpdateById(_))
    }

    /// Returns `true` when executing the statement yields car rows rather
    /// than an affected-row count.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::GetById(_) | Statement::Query(_))
    }

    /// Returns `true` when the SQL text of this statement is drawn from a
    /// small set fixed by the column table, independent of caller input.
    ///
    /// Query text grows with the caller's filter and insert text with the
    /// batch size, so neither qualifies. Update text depends only on which
    /// columns the patch sets.
    pub fn has_fixed_shape(&self) -> bool {
        matches!(
            self,
            Statement::CreateTable(_)
                | Statement::DropTable(_)
                | Statement::DeleteById(_)
                | Statement::GetById(_)
                | Statement::UpdateById(_)
        )
    }
}

/// Splits a batch insert into statements of at most [`MAX_INSERT_ROWS`]
/// rows each, preserving row order.
///
/// A batch that already fits, including an empty one, is returned as a
/// single statement.
pub fn insert_chunks(insert: Insert) -> Vec<Statement> {
    if insert.cars.len() <= MAX_INSERT_ROWS {
        return vec![Statement::Insert(insert)];
    }

    insert
        .cars
        .chunks(MAX_INSERT_ROWS)
        .map(|cars| {
            Statement::Insert(Insert {
                cars: cars.to_vec(),
            })
        })
        .collect()
}

impl From<Operation> for Statement {
    fn from(value: Operation) -> Self {
        match value {
            Operation::Insert(stmt) => Statement::Insert(stmt),
            Operation::DeleteById(stmt) => Statement::DeleteById(stmt),
            Operation::GetById(stmt) => Statement::GetById(stmt),
            Operation::Query(stmt) => Statement::Query(stmt),
            Operation::UpdateById(stmt) => Statement::UpdateById(stmt),
        }
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Statement::Query(value)
    }
}

impl From<UpdateById> for Statement {
    fn from(value: UpdateById) -> Self {
        Statement::UpdateById(value)
    }
}
