use carreg_core::Value as CoreValue;
use postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};

/// A bind parameter converted to whatever type the server inferred for its
/// placeholder.
///
/// Filter values arrive as text, so a text value bound against an integer
/// column is parsed here. A value that does not parse fails the query with a
/// `BindError`.
#[derive(Debug)]
pub struct Value(pub(crate) CoreValue);

/// A caller-supplied value that does not fit the column it is compared with.
#[derive(Debug)]
pub(crate) struct BindError {
    value: String,
    ty: Type,
}

impl std::error::Error for BindError {}

impl core::fmt::Display for BindError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}` is not a valid {}", self.value, self.ty)
    }
}

impl Value {
    fn convert<T, E>(
        &self,
        ty: &Type,
        converted: std::result::Result<T, E>,
    ) -> std::result::Result<T, Box<dyn std::error::Error + Sync + Send>> {
        converted.map_err(|_| self.bind_error(ty))
    }

    fn bind_error(&self, ty: &Type) -> Box<dyn std::error::Error + Sync + Send> {
        let value = match &self.0 {
            CoreValue::Null => "NULL".to_string(),
            CoreValue::I64(value) => value.to_string(),
            CoreValue::String(value) => value.clone(),
        };
        Box::new(BindError {
            value,
            ty: ty.clone(),
        })
    }
}

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            CoreValue::Null => Ok(IsNull::Yes),
            CoreValue::I64(value) => match *ty {
                Type::INT2 => self.convert(ty, i16::try_from(*value))?.to_sql(ty, out),
                Type::INT4 => self.convert(ty, i32::try_from(*value))?.to_sql(ty, out),
                Type::INT8 => value.to_sql(ty, out),
                _ => value.to_string().to_sql(ty, out),
            },
            CoreValue::String(value) => match *ty {
                Type::INT2 => self.convert(ty, value.trim().parse::<i16>())?.to_sql(ty, out),
                Type::INT4 => self.convert(ty, value.trim().parse::<i32>())?.to_sql(ty, out),
                Type::INT8 => self.convert(ty, value.trim().parse::<i64>())?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
        }
    }

    accepts!(INT2, INT4, INT8, TEXT, VARCHAR);
    to_sql_checked!();
}
