/// Page window for a listing query.
///
/// A `limit` of zero disables pagination entirely; `offset` is then ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    /// No pagination clause.
    pub const NONE: Pagination = Pagination {
        limit: 0,
        offset: 0,
    };

    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    pub const fn is_enabled(&self) -> bool {
        self.limit != 0
    }
}
