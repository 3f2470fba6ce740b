use crate::{Error, Result};

/// A filterable column of the car table.
///
/// This is the closed allow-list between caller-supplied names and storage
/// identifiers. Caller text only ever becomes a column through
/// [`Column::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    RegNum,
    Mark,
    Model,
    Year,
    OwnerName,
    OwnerSurname,
    OwnerPatronymic,
}

impl Column {
    /// Every column, in the fixed order used for filter collection and for
    /// update assignments.
    pub const ALL: [Column; 7] = [
        Column::RegNum,
        Column::Mark,
        Column::Model,
        Column::Year,
        Column::OwnerName,
        Column::OwnerSurname,
        Column::OwnerPatronymic,
    ];

    /// Name used in query strings.
    pub const fn name(self) -> &'static str {
        match self {
            Column::RegNum => "reg_num",
            Column::Mark => "mark",
            Column::Model => "model",
            Column::Year => "year",
            Column::OwnerName => "owner_name",
            Column::OwnerSurname => "owner_surname",
            Column::OwnerPatronymic => "owner_patronymic",
        }
    }

    /// Unquoted storage identifier. Storage columns are named after their
    /// query-string names.
    pub const fn storage_name(self) -> &'static str {
        self.name()
    }

    pub fn from_name(name: &str) -> Result<Column> {
        Column::ALL
            .into_iter()
            .find(|column| column.name() == name)
            .ok_or_else(|| Error::unknown_column(name))
    }
}

impl core::fmt::Display for Column {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Column::from_name(s)
    }
}
