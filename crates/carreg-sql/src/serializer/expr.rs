use super::{Formatter, Params, ToSql};

use carreg_core::{
    filter::{Operator, Union},
    Filter, Pagination, Predicate, Value,
};

impl ToSql for &Filter {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let mut emitted = false;
        for predicate in self {
            if emitted {
                fmt!(f, " " predicate.union " ");
            }
            predicate.to_sql(f);
            emitted = true;
        }
    }
}

impl ToSql for &Predicate {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let value = Value::from(&self.value);
        fmt!(f, self.column " " self.op " " value);
    }
}

impl ToSql for Operator {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            match self {
                Operator::Eq => "=",
                Operator::Ne => "<>",
                Operator::Gt => ">",
                Operator::Ge => ">=",
                Operator::Lt => "<",
                Operator::Le => "<=",
                Operator::Like => "LIKE",
            }
        );
    }
}

impl ToSql for Union {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            match self {
                Union::And => "AND",
                Union::Or => "OR",
            }
        );
    }
}

impl ToSql for Pagination {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if !self.is_enabled() {
            return;
        }

        let limit = Value::from(self.limit);
        let offset = Value::from(self.offset);
        fmt!(f, " LIMIT " limit " OFFSET " offset);
    }
}
