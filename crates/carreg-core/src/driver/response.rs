use crate::{Car, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Records returned by the operation
    Cars(Vec<Car>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn cars(cars: Vec<Car>) -> Self {
        Self {
            rows: Rows::Cars(cars),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        self.rows.into_count()
    }

    pub fn into_cars(self) -> Result<Vec<Car>> {
        self.rows.into_cars()
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_cars(&self) -> bool {
        matches!(self, Self::Cars(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Cars(_) => crate::bail!("expected a row count, got records"),
        }
    }

    pub fn into_cars(self) -> Result<Vec<Car>> {
        match self {
            Rows::Cars(cars) => Ok(cars),
            Rows::Count(_) => crate::bail!("expected records, got a row count"),
        }
    }
}
