use crate::{config::FilterPolicy, registry::RegistryClient, Db, Validator};

use carreg_core::{
    filter::{Column, FilterAdder},
    Car, CarPatch, Error, Filter, Pagination, Result,
};
use tracing::{debug, info, warn};

use std::sync::Arc;

/// Business operations on car records.
#[derive(Debug, Clone)]
pub struct CarService {
    db: Db,
    registry: Arc<dyn RegistryClient>,
    validator: Arc<Validator>,
    filter_policy: FilterPolicy,
}

impl CarService {
    pub fn new(db: Db, registry: Arc<dyn RegistryClient>, validator: Validator) -> CarService {
        CarService {
            db,
            registry,
            validator: Arc::new(validator),
            filter_policy: FilterPolicy::default(),
        }
    }

    pub fn filter_policy(mut self, policy: FilterPolicy) -> CarService {
        self.filter_policy = policy;
        self
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Looks up every registration number in the registry and saves the
    /// results. Nothing is saved if any lookup fails.
    ///
    /// Returns the number of new records.
    pub async fn add_cars(&self, reg_nums: &[String]) -> Result<u64> {
        info!(count = reg_nums.len(), "adding cars");

        if reg_nums.is_empty() {
            return Err(Error::validation("regNums", "must not be empty"));
        }

        let mut cars = Vec::with_capacity(reg_nums.len());
        for reg_num in reg_nums {
            let car = self.registry.lookup(reg_num).await.map_err(|error| {
                warn!(reg_num = %reg_num, %error, "registry lookup failed");
                Error::registry_lookup(reg_num.as_str(), error)
            })?;
            cars.push(car);
        }
        debug!(?cars, "resolved cars");

        let inserted = self.db.add_cars(cars).await.inspect_err(|error| {
            tracing::error!(%error, "failed to save cars");
        })?;

        info!(inserted, "cars added");
        Ok(inserted)
    }

    pub async fn get_car(&self, id: i64) -> Result<Car> {
        debug!(car_id = id, "getting car");

        self.db.get_car(id).await.inspect_err(|error| {
            warn!(car_id = id, %error, "failed to get car");
        })
    }

    pub async fn list_cars(&self, filter: Filter, pagination: Pagination) -> Result<Vec<Car>> {
        debug!(?filter, ?pagination, "listing cars");

        self.db
            .list_cars(filter, pagination)
            .await
            .inspect_err(|error| {
                tracing::error!(%error, "failed to list cars");
            })
    }

    /// Validates and applies `patch`.
    pub async fn edit_car(&self, id: i64, patch: CarPatch) -> Result<()> {
        debug!(car_id = id, ?patch, "editing car");

        self.validator.validate_patch(&patch).inspect_err(|error| {
            info!(car_id = id, %error, "rejected patch");
        })?;

        if patch.is_empty() {
            return Err(Error::no_fields_to_update());
        }

        self.db.update_car(id, patch).await.inspect_err(|error| {
            warn!(car_id = id, %error, "failed to edit car");
        })
    }

    pub async fn delete_car(&self, id: i64) -> Result<()> {
        debug!(car_id = id, "deleting car");

        self.db.delete_car(id).await.inspect_err(|error| {
            warn!(car_id = id, %error, "failed to delete car");
        })
    }

    /// Parses raw filter tokens into a [`Filter`] using the store's grammar.
    ///
    /// `fields` is visited in order. A token that fails to parse is dropped
    /// with a warning under [`FilterPolicy::Skip`] and fails the whole call
    /// under [`FilterPolicy::Reject`].
    pub fn build_filter<'a>(
        &self,
        fields: impl IntoIterator<Item = (Column, &'a str)>,
    ) -> Result<Filter> {
        let adder = self.db.filter_adder();
        let mut filter = Filter::new();

        for (column, raw) in fields {
            if let Err(error) = adder.add_predicate(&mut filter, column, raw) {
                match self.filter_policy {
                    FilterPolicy::Skip => {
                        warn!(field = %column, value = raw, %error, "invalid filter, skipping");
                    }
                    FilterPolicy::Reject => return Err(error),
                }
            }
        }

        Ok(filter)
    }
}
