use crate::{filter::Column, Value};

use serde::{Deserialize, Serialize};

/// A vehicle registration record.
///
/// The owner's full name is stored inline on the record rather than in a
/// separate table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "carId", default)]
    pub id: i32,

    #[serde(rename = "regNum")]
    pub reg_num: String,

    pub mark: String,

    pub model: String,

    pub year: u16,

    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,

    pub surname: String,

    #[serde(default)]
    pub patronymic: String,
}

/// A sparse update to a [`Car`].
///
/// `None` leaves the stored field untouched. Only fields that are `Some`
/// are written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarPatch {
    #[serde(rename = "regNum", skip_serializing_if = "Option::is_none")]
    pub reg_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerPatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
}

impl Car {
    /// The stored value of `column`.
    pub fn value(&self, column: Column) -> Value {
        match column {
            Column::RegNum => Value::from(&self.reg_num),
            Column::Mark => Value::from(&self.mark),
            Column::Model => Value::from(&self.model),
            Column::Year => Value::from(self.year),
            Column::OwnerName => Value::from(&self.owner.name),
            Column::OwnerSurname => Value::from(&self.owner.surname),
            Column::OwnerPatronymic => Value::from(&self.owner.patronymic),
        }
    }
}

impl CarPatch {
    /// The new value for `column`, or `None` when the patch leaves it
    /// untouched.
    pub fn value(&self, column: Column) -> Option<Value> {
        match column {
            Column::RegNum => self.reg_num.as_ref().map(Value::from),
            Column::Mark => self.mark.as_ref().map(Value::from),
            Column::Model => self.model.as_ref().map(Value::from),
            Column::Year => self.year.map(Value::from),
            Column::OwnerName => self.owner_name().map(Value::from),
            Column::OwnerSurname => self.owner_surname().map(Value::from),
            Column::OwnerPatronymic => self.owner_patronymic().map(Value::from),
        }
    }

    /// Present fields in [`Column::ALL`] order.
    pub fn assignments(&self) -> impl Iterator<Item = (Column, Value)> + '_ {
        Column::ALL
            .into_iter()
            .filter_map(|column| Some((column, self.value(column)?)))
    }

    /// Returns `true` when no leaf field is present.
    ///
    /// An `owner` object whose sub-fields are all absent counts as empty.
    pub fn is_empty(&self) -> bool {
        self.reg_num.is_none()
            && self.mark.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.owner.as_ref().map_or(true, OwnerPatch::is_empty)
    }

    pub fn reg_num(mut self, value: impl Into<String>) -> Self {
        self.reg_num = Some(value.into());
        self
    }

    pub fn mark(mut self, value: impl Into<String>) -> Self {
        self.mark = Some(value.into());
        self
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.model = Some(value.into());
        self
    }

    pub fn year(mut self, value: u16) -> Self {
        self.year = Some(value);
        self
    }

    pub fn owner(mut self, owner: OwnerPatch) -> Self {
        self.owner = Some(owner);
        self
    }

    fn owner_field(&self, f: impl Fn(&OwnerPatch) -> Option<&String>) -> Option<&String> {
        self.owner.as_ref().and_then(f)
    }

    pub fn owner_name(&self) -> Option<&String> {
        self.owner_field(|owner| owner.name.as_ref())
    }

    pub fn owner_surname(&self) -> Option<&String> {
        self.owner_field(|owner| owner.surname.as_ref())
    }

    pub fn owner_patronymic(&self) -> Option<&String> {
        self.owner_field(|owner| owner.patronymic.as_ref())
    }
}

impl OwnerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.patronymic.is_none()
    }
}
