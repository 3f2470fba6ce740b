//! Filter predicates parsed from query-string tokens.
//!
//! A token has the shape `[<and|or>:]<operator>:<value>` or is a bare
//! `<value>`, which means `and:eq:<value>`. Keywords are case-insensitive.
//! See [`Predicate::parse`] for the exact rules.

mod adder;
pub use adder::{FilterAdder, TokenGrammar};

mod column;
pub use column::Column;

mod operator;
pub use operator::Operator;

mod pagination;
pub use pagination::Pagination;

mod predicate;
pub use predicate::Predicate;

mod union;
pub use union::Union;

/// An ordered set of predicates forming one query's filter clause.
///
/// Insertion order is the clause emission order. An empty filter matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub const fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Predicate> {
        self.predicates.iter()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }
}

impl<'a> IntoIterator for &'a Filter {
    type Item = &'a Predicate;
    type IntoIter = std::slice::Iter<'a, Predicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Predicate> for Filter {
    fn from_iter<T: IntoIterator<Item = Predicate>>(iter: T) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Predicate>> for Filter {
    fn from(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }
}
