#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::Columns;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use carreg_core::{Error, Result};

/// Name of the storage primary key column.
const ID_COLUMN: &str = "car_id";

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Unquoted name of the car table. Quoted on output.
    table: &'a str,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    /// Creates a serializer emitting PostgreSQL syntax (`$n` placeholders)
    /// against `table`.
    pub fn postgresql(table: &'a str) -> Self {
        Serializer { table }
    }

    pub fn table(&self) -> &'a str {
        self.table
    }

    /// Serializes `stmt`, pushing every bound value onto `params`.
    ///
    /// Statements that cannot produce valid SQL fail before anything is
    /// written, leaving `params` untouched.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        verify(stmt)?;

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        Ok(ret)
    }

    fn table_name(&self) -> Ident<&str> {
        Ident(self.table)
    }
}

fn verify(stmt: &Statement) -> Result<()> {
    match stmt {
        Statement::UpdateById(update) if update.patch.is_empty() => {
            Err(Error::no_fields_to_update())
        }
        Statement::Insert(insert) if insert.cars.is_empty() => {
            carreg_core::bail!("cannot insert an empty batch of cars")
        }
        _ => Ok(()),
    }
}
