use carreg::{Column, Pagination};
use url::form_urlencoded;

/// The query string of `GET /api/cars`.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct Listing {
    /// Raw filter tokens in column order, repeated keys in query order.
    filters: Vec<(Column, String)>,
    pub(super) pagination: Pagination,
}

impl Listing {
    /// Parses `limit`, `offset` and one filter token per column parameter.
    /// Unknown parameters are ignored.
    pub(super) fn parse(query: Option<&str>) -> Result<Listing, String> {
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.unwrap_or("").as_bytes())
            .into_owned()
            .collect();

        let mut listing = Listing::default();

        for (key, value) in &pairs {
            match key.as_str() {
                "limit" => listing.pagination.limit = parse_bound("limit", value)?,
                "offset" => listing.pagination.offset = parse_bound("offset", value)?,
                _ => {}
            }
        }

        for column in Column::ALL {
            for (key, value) in &pairs {
                if key == column.name() {
                    listing.filters.push((column, value.clone()));
                }
            }
        }

        Ok(listing)
    }

    pub(super) fn fields(&self) -> impl Iterator<Item = (Column, &str)> + '_ {
        self.filters
            .iter()
            .map(|(column, value)| (*column, value.as_str()))
    }
}

fn parse_bound(name: &str, value: &str) -> Result<u64, String> {
    value
        .parse()
        .map_err(|_| format!("`{name}` must be a non-negative integer; got `{value}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(listing: &Listing) -> Vec<(Column, &str)> {
        listing.fields().collect()
    }

    #[test]
    fn empty_query() {
        assert_eq!(Listing::parse(None).unwrap(), Listing::default());
        assert_eq!(Listing::parse(Some("")).unwrap(), Listing::default());
    }

    #[test]
    fn limit_and_offset_are_independent() {
        let listing = Listing::parse(Some("offset=5&limit=10")).unwrap();
        assert_eq!(listing.pagination, Pagination::new(10, 5));

        let listing = Listing::parse(Some("offset=5")).unwrap();
        assert_eq!(listing.pagination, Pagination::new(0, 5));
    }

    #[test]
    fn malformed_bounds_are_rejected() {
        assert!(Listing::parse(Some("limit=-1")).is_err());
        assert!(Listing::parse(Some("offset=ten")).is_err());
    }

    #[test]
    fn filters_follow_column_order_then_query_order() {
        let listing = Listing::parse(Some(
            "year=or:gt:2000&mark=Lada&limit=2&year=lt:2020&reg_num=A001AA77&color=red",
        ))
        .unwrap();

        assert_eq!(
            fields(&listing),
            vec![
                (Column::RegNum, "A001AA77"),
                (Column::Mark, "Lada"),
                (Column::Year, "or:gt:2000"),
                (Column::Year, "lt:2020"),
            ]
        );
    }

    #[test]
    fn values_are_percent_decoded() {
        let listing = Listing::parse(Some("model=like%3AV%25&owner_name=Ivan%20Jr")).unwrap();

        assert_eq!(
            fields(&listing),
            vec![(Column::Model, "like:V%"), (Column::OwnerName, "Ivan Jr")]
        );
    }
}
