use std::collections::HashMap;

use tokio_postgres::{Client, Error, Statement};

/// Prepared statements keyed by SQL text.
///
/// Parameter types are left to the server, so the SQL text alone identifies
/// a statement. Callers only cache statements whose text comes from a small
/// fixed set, which keeps the map bounded.
#[derive(Debug, Clone, Default)]
pub struct StatementCache {
    map: HashMap<String, Statement>,
}

impl StatementCache {
    pub fn get(&self, query: &str) -> Option<Statement> {
        self.map.get(query).map(ToOwned::to_owned)
    }

    pub fn insert(&mut self, query: &str, statement: Statement) {
        self.map.insert(query.to_owned(), statement);
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub async fn prepare(&mut self, client: &Client, query: &str) -> Result<Statement, Error> {
        if let Some(statement) = self.get(query) {
            Ok(statement)
        } else {
            let stmt = client.prepare(query).await?;
            self.insert(query, stmt.clone());
            Ok(stmt)
        }
    }
}
