use super::{Formatter, Params, ToSql};

use carreg_core::filter::Column;

/// Storage type of a column, as written in `CREATE TABLE`.
pub(super) struct ColumnType(pub(super) Column);

impl ToSql for ColumnType {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            match self.0 {
                Column::Year => "INTEGER NOT NULL",
                Column::RegNum => "TEXT NOT NULL UNIQUE",
                Column::OwnerPatronymic => "TEXT NOT NULL DEFAULT ''",
                _ => "TEXT NOT NULL",
            }
        );
    }
}
