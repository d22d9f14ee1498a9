//! Query description passed to storage: one equality filter, one sort key,
//! an optional limit.

/// Sort direction for a [`SortKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Match documents whose top-level `field` is a string equal to `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: String,
    pub value: String,
}

/// Order results by a top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: Direction,
}

/// A find query. The default matches everything in natural order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filter: Option<FieldMatch>,
    pub sort: Option<SortKey>,
    pub limit: Option<usize>,
}

impl Query {
    /// Match every document, unsorted, unbounded.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some(FieldMatch {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn sort_desc(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(SortKey {
            field: field.into(),
            direction: Direction::Descending,
        });
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_everything_when_query_is_empty() {
        let query = Query::all();
        assert!(query.filter.is_none());
        assert!(query.sort.is_none());
        assert!(query.limit.is_none());
    }

    #[test]
    fn should_compose_filter_sort_and_limit() {
        let query = Query::all()
            .filter_eq("email", "a@x.io")
            .sort_desc("date")
            .limit(6);

        assert_eq!(
            query.filter,
            Some(FieldMatch {
                field: "email".to_string(),
                value: "a@x.io".to_string(),
            })
        );
        assert_eq!(
            query.sort,
            Some(SortKey {
                field: "date".to_string(),
                direction: Direction::Descending,
            })
        );
        assert_eq!(query.limit, Some(6));
    }
}
