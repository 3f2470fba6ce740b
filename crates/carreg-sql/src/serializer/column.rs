use super::{Comma, Formatter, Ident, Params, ToSql, ID_COLUMN};

use carreg_core::filter::Column;

impl ToSql for Column {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        Ident(self.storage_name()).to_sql(f);
    }
}

/// Every stored column, primary key first, in the order rows are decoded.
pub(super) struct Columns;

impl ToSql for Columns {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(ID_COLUMN) ", " Comma(Column::ALL));
    }
}
