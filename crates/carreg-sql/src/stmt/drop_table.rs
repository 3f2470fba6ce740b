use super::Statement;

#[derive(Debug, Clone, Default)]
pub struct DropTable {
    /// Whether or not to include `IF EXISTS` in the SQL.
    pub if_exists: bool,
}

impl Statement {
    pub fn drop_table() -> Self {
        DropTable { if_exists: false }.into()
    }

    pub fn drop_table_if_exists() -> Self {
        DropTable { if_exists: true }.into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
