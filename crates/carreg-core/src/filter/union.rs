/// Boolean connective joining a predicate to the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Union {
    #[default]
    And,
    Or,
}

impl Union {
    /// Parses `and` / `or`, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Union> {
        if keyword.eq_ignore_ascii_case("and") {
            Some(Union::And)
        } else if keyword.eq_ignore_ascii_case("or") {
            Some(Union::Or)
        } else {
            None
        }
    }
}
