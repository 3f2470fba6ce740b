use super::{ty::ColumnType, Columns, Comma, Formatter, Ident, Params, ToSql, ID_COLUMN};

use crate::stmt::{self, Statement};

use carreg_core::{filter::Column, Value};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::DeleteById(stmt) => stmt.to_sql(f),
            Statement::GetById(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::UpdateById(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table_name = f.serializer.table_name();
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let columns = Comma(
            Column::ALL
                .into_iter()
                .map(|column| (column, " ", ColumnType(column))),
        );

        fmt!(
            f,
            "CREATE TABLE " if_not_exists table_name " ("
            Ident(ID_COLUMN) " SERIAL PRIMARY KEY, " columns ")"
        );
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table_name = f.serializer.table_name();
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        fmt!(f, "DROP TABLE " if_exists table_name);
    }
}

impl ToSql for &stmt::DeleteById {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table_name = f.serializer.table_name();
        let id = Value::from(self.id);

        fmt!(f, "DELETE FROM " table_name " WHERE " Ident(ID_COLUMN) " = " id);
    }
}

impl ToSql for &stmt::GetById {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table_name = f.serializer.table_name();
        let id = Value::from(self.id);

        fmt!(f, "SELECT " Columns " FROM " table_name " WHERE " Ident(ID_COLUMN) " = " id);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table_name = f.serializer.table_name();
        let rows = Comma(self.cars.iter().map(|car| {
            let values = Comma(Column::ALL.into_iter().map(move |column| car.value(column)));
            ("(", values, ")")
        }));
        let conflict = Column::RegNum;

        fmt!(
            f,
            "INSERT INTO " table_name " (" Comma(Column::ALL) ") VALUES " rows
            " ON CONFLICT (" conflict ") DO NOTHING"
        );
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table_name = f.serializer.table_name();
        let filter = if self.filter.is_empty() {
            None
        } else {
            Some((" WHERE ", &self.filter))
        };

        fmt!(f, "SELECT " Columns " FROM " table_name filter self.pagination);
    }
}

impl ToSql for &stmt::UpdateById {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table_name = f.serializer.table_name();

        fmt!(f, "UPDATE " table_name " SET ");

        let mut emitted = false;
        for (column, value) in self.patch.assignments() {
            if emitted {
                fmt!(f, ", ");
            }
            fmt!(f, column " = " value);
            emitted = true;
        }

        let id = Value::from(self.id);
        fmt!(f, " WHERE " Ident(ID_COLUMN) " = " id);
    }
}
