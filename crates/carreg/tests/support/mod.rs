#![allow(dead_code)]

//! An in-memory store that records every operation it executes.

use carreg::{Car, CarPatch, Column, Error, Filter, Pagination, Result};
use carreg_core::{
    async_trait,
    driver::{Connection, Driver, Operation, Response},
    filter::{Operator, Union},
    Predicate, Value,
};
use carreg_sql::Serializer;

use std::sync::{Arc, Mutex};

/// Rows and id sequence shared by every connection of one driver.
#[derive(Debug, Default)]
struct Store {
    cars: Vec<Car>,
    next_id: i32,
}

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,

    /// SQL the PostgreSQL serializer produces for `operation`.
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDriver {
    store: Arc<Mutex<Store>>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a handle to access the operations log
    pub fn exec_log(&self) -> ExecLog {
        ExecLog {
            ops: self.ops_log.clone(),
        }
    }

    pub fn cars(&self) -> Vec<Car> {
        self.store.lock().unwrap().cars.clone()
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(MemoryConnection {
            store: self.store.clone(),
            ops_log: self.ops_log.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct MemoryConnection {
    store: Arc<Mutex<Store>>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[async_trait]
impl Connection for MemoryConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        // Compile first so statement errors surface exactly as they would
        // against a real database.
        let mut params = Vec::new();
        let sql =
            Serializer::postgresql("cars").serialize(&operation.clone().into(), &mut params)?;

        self.ops_log.lock().unwrap().push(DriverOp {
            operation: operation.clone(),
            sql,
            params,
        });

        let mut store = self.store.lock().unwrap();
        store.exec(operation)
    }

    async fn push_schema(&mut self) -> Result<()> {
        Ok(())
    }

    async fn reset_db(&mut self) -> Result<()> {
        *self.store.lock().unwrap() = Store::default();
        Ok(())
    }
}

impl Store {
    fn exec(&mut self, operation: Operation) -> Result<Response> {
        match operation {
            Operation::Insert(insert) => {
                let mut count = 0;
                for mut car in insert.cars {
                    if self.cars.iter().any(|c| c.reg_num == car.reg_num) {
                        continue;
                    }
                    self.next_id += 1;
                    car.id = self.next_id;
                    self.cars.push(car);
                    count += 1;
                }
                Ok(Response::count(count))
            }
            Operation::GetById(get) => {
                let car = self.find(get.id)?.clone();
                Ok(Response::cars(vec![car]))
            }
            Operation::Query(query) => {
                let mut cars = Vec::new();
                for car in &self.cars {
                    if matches(&query.filter, car)? {
                        cars.push(car.clone());
                    }
                }
                Ok(Response::cars(paginate(cars, query.pagination)))
            }
            Operation::UpdateById(update) => {
                if let Some(reg_num) = &update.patch.reg_num {
                    if self
                        .cars
                        .iter()
                        .any(|c| &c.reg_num == reg_num && i64::from(c.id) != update.id)
                    {
                        return Err(Error::already_exists(format!("reg_num={reg_num}")));
                    }
                }
                apply(self.find_mut(update.id)?, &update.patch);
                Ok(Response::count(1))
            }
            Operation::DeleteById(delete) => {
                self.find(delete.id)?;
                self.cars.retain(|c| i64::from(c.id) != delete.id);
                Ok(Response::count(1))
            }
        }
    }

    fn find(&self, id: i64) -> Result<&Car> {
        self.cars
            .iter()
            .find(|c| i64::from(c.id) == id)
            .ok_or_else(|| Error::record_not_found(format!("car_id={id}")))
    }

    fn find_mut(&mut self, id: i64) -> Result<&mut Car> {
        self.cars
            .iter_mut()
            .find(|c| i64::from(c.id) == id)
            .ok_or_else(|| Error::record_not_found(format!("car_id={id}")))
    }
}

fn apply(car: &mut Car, patch: &CarPatch) {
    if let Some(v) = &patch.reg_num {
        car.reg_num = v.clone();
    }
    if let Some(v) = &patch.mark {
        car.mark = v.clone();
    }
    if let Some(v) = &patch.model {
        car.model = v.clone();
    }
    if let Some(v) = patch.year {
        car.year = v;
    }
    if let Some(v) = patch.owner_name() {
        car.owner.name = v.clone();
    }
    if let Some(v) = patch.owner_surname() {
        car.owner.surname = v.clone();
    }
    if let Some(v) = patch.owner_patronymic() {
        car.owner.patronymic = v.clone();
    }
}

fn paginate(cars: Vec<Car>, pagination: Pagination) -> Vec<Car> {
    if !pagination.is_enabled() {
        return cars;
    }
    cars.into_iter()
        .skip(pagination.offset as usize)
        .take(pagination.limit as usize)
        .collect()
}

/// Evaluates the filter with SQL precedence: `AND` binds tighter than `OR`.
fn matches(filter: &Filter, car: &Car) -> Result<bool> {
    let mut any_group = false;
    let mut group = true;

    for (i, predicate) in filter.iter().enumerate() {
        if i > 0 && predicate.union == Union::Or {
            any_group |= group;
            group = true;
        }
        group = group && eval(predicate, car)?;
    }

    Ok(filter.is_empty() || any_group || group)
}

fn eval(predicate: &Predicate, car: &Car) -> Result<bool> {
    let stored = car.value(predicate.column);

    if predicate.op == Operator::Like {
        let Some(text) = stored.as_str() else {
            carreg_core::bail!("operator does not exist: integer ~~ text");
        };
        return Ok(like(text, &predicate.value));
    }

    let ordering = match predicate.column {
        Column::Year => {
            let rhs: i64 = predicate.value.trim().parse()?;
            stored.as_i64().unwrap_or_default().cmp(&rhs)
        }
        _ => stored.as_str().unwrap_or_default().cmp(predicate.value.as_str()),
    };

    Ok(match predicate.op {
        Operator::Eq => ordering.is_eq(),
        Operator::Ne => ordering.is_ne(),
        Operator::Gt => ordering.is_gt(),
        Operator::Ge => ordering.is_ge(),
        Operator::Lt => ordering.is_lt(),
        Operator::Le => ordering.is_le(),
        Operator::Like => unreachable!(),
    })
}

/// SQL `LIKE` with `%` and `_` wildcards, no escapes.
fn like(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    fn go(t: &[char], p: &[char]) -> bool {
        match p.split_first() {
            None => t.is_empty(),
            Some(('%', rest)) => (0..=t.len()).any(|i| go(&t[i..], rest)),
            Some(('_', rest)) => !t.is_empty() && go(&t[1..], rest),
            Some((c, rest)) => t.first() == Some(c) && go(&t[1..], rest),
        }
    }

    go(&text, &pattern)
}

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    pub fn has_insert(&self) -> bool {
        self.count(|op| matches!(op, Operation::Insert(_))) > 0
    }

    /// SQL and parameters of the most recent operation.
    pub fn last_sql(&self) -> Option<(String, Vec<Value>)> {
        self.ops
            .lock()
            .unwrap()
            .last()
            .map(|op| (op.sql.clone(), op.params.clone()))
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}

pub fn car(reg_num: &str, mark: &str, year: u16) -> Car {
    Car {
        id: 0,
        reg_num: reg_num.to_string(),
        mark: mark.to_string(),
        model: "Base".to_string(),
        year,
        owner: carreg::Owner {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: String::new(),
        },
    }
}
