use super::Statement;

/// Creates the car table if it does not already exist.
#[derive(Debug, Clone, Default)]
pub struct CreateTable {
    pub if_not_exists: bool,
}

impl Statement {
    pub fn create_table() -> Self {
        CreateTable {
            if_not_exists: false,
        }
        .into()
    }

    pub fn create_table_if_not_exists() -> Self {
        CreateTable {
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
