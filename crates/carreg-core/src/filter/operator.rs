use crate::{Error, Result};

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
}

impl Operator {
    /// Parses a filter keyword, ignoring ASCII case.
    ///
    /// The keywords for `>=` and `<=` are `get` and `let`.
    pub fn from_keyword(keyword: &str) -> Result<Operator> {
        const KEYWORDS: [(&str, Operator); 7] = [
            ("eq", Operator::Eq),
            ("neq", Operator::Ne),
            ("gt", Operator::Gt),
            ("get", Operator::Ge),
            ("lt", Operator::Lt),
            ("let", Operator::Le),
            ("like", Operator::Like),
        ];

        KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(keyword))
            .map(|(_, op)| *op)
            .ok_or_else(|| Error::invalid_operator(keyword))
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "neq",
            Operator::Gt => "gt",
            Operator::Ge => "get",
            Operator::Lt => "lt",
            Operator::Le => "let",
            Operator::Like => "like",
        }
    }
}
