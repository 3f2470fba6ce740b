pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, filter::FilterAdder};

use std::fmt::Debug;

/// A factory for store connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection to the store.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Upper bound on simultaneous connections, if the store imposes one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// An open connection able to execute compiled operations.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// The filter grammar this backend accepts.
    fn filter_adder(&self) -> &'static dyn FilterAdder {
        &crate::filter::TokenGrammar
    }

    /// Execute a store operation.
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;

    /// Creates the car table if it does not exist yet.
    async fn push_schema(&mut self) -> crate::Result<()> {
        crate::bail!("push_schema is not supported by this connection")
    }

    /// Drops and recreates the car table.
    async fn reset_db(&mut self) -> crate::Result<()> {
        crate::bail!("reset_db is not supported by this connection")
    }
}
