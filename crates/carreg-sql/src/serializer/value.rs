use super::{Formatter, Params, ToSql};

use carreg_core::Value;

impl ToSql for &Value {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let placeholder = f.params.push(self);
        placeholder.to_sql(f);
    }
}

impl ToSql for Value {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        (&self).to_sql(f);
    }
}
