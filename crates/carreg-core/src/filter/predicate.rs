use super::{Column, Operator, Union};
use crate::{Error, Result};

/// One filter condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    /// How this predicate joins the previous one. Ignored for the first
    /// predicate of a filter.
    pub union: Union,
    pub column: Column,
    pub op: Operator,
    pub value: String,
}

impl Predicate {
    pub fn new(union: Union, column: Column, op: Operator, value: impl Into<String>) -> Self {
        Self {
            union,
            column,
            op,
            value: value.into(),
        }
    }

    /// Shorthand for `AND <column> = <value>`.
    pub fn eq(column: Column, value: impl Into<String>) -> Self {
        Self::new(Union::And, column, Operator::Eq, value)
    }

    /// Parses a raw filter token for `column`.
    ///
    /// The token is split on `:`:
    ///
    /// * a single segment is the value, compared with `=` and joined by `AND`;
    /// * two segments where the second is empty is a dangling colon and fails
    ///   with an empty-value error;
    /// * otherwise a leading `and`/`or` sets the union and is consumed, the
    ///   next segment must be an operator keyword, and all remaining
    ///   segments, rejoined with `:`, form the value.
    pub fn parse(column: Column, raw: &str) -> Result<Predicate> {
        let segments: Vec<&str> = raw.split(':').collect();

        match segments[..] {
            [value] => return Ok(Predicate::eq(column, value)),
            [_, ""] => return Err(Error::empty_value(raw)),
            _ => {}
        }

        let (union, rest) = match Union::from_keyword(segments[0]) {
            Some(union) => (union, &segments[1..]),
            None => (Union::And, &segments[..]),
        };

        // Never empty: two or more segments, at most one consumed.
        let (keyword, value) = rest
            .split_first()
            .ok_or_else(|| Error::invalid_operator(""))?;

        let op = Operator::from_keyword(keyword)?;

        Ok(Predicate::new(union, column, op, value.join(":")))
    }
}
