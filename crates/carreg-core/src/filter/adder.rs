use super::{Column, Filter, Predicate};
use crate::Result;

/// Parses a raw filter token and appends the resulting predicate.
///
/// Connections hand out their adder through
/// [`Connection::filter_adder`](crate::driver::Connection::filter_adder) so a
/// backend can accept a different token grammar.
pub trait FilterAdder: core::fmt::Debug + Send + Sync {
    /// Parses `raw` for `column` and appends it to `filter`.
    ///
    /// On error `filter` is left unchanged. Each call is independent, so a
    /// failure does not affect predicates added before or after it.
    fn add_predicate(&self, filter: &mut Filter, column: Column, raw: &str) -> Result<()>;
}

/// The `[<and|or>:]<operator>:<value>` grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenGrammar;

impl FilterAdder for TokenGrammar {
    fn add_predicate(&self, filter: &mut Filter, column: Column, raw: &str) -> Result<()> {
        filter.push(Predicate::parse(column, raw)?);
        Ok(())
    }
}
