//! The named document collections the service exposes.

use std::fmt;
use std::str::FromStr;

/// A named group of schema-less documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Recent bill records, sortable by `date`.
    AllBills,
    /// The full bill listing.
    Bills,
    /// Aggregated bill totals, filterable by `category`.
    TotalBills,
    /// User payment records, filterable by `email` and sortable by `date`.
    Payments,
}

impl Collection {
    /// Every known collection.
    pub const ALL: [Self; 4] = [Self::AllBills, Self::Bills, Self::TotalBills, Self::Payments];

    /// Name of the collection in storage.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AllBills => "all-bills",
            Self::Bills => "bills",
            Self::TotalBills => "total-bills",
            Self::Payments => "payments",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name matches no [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection `{0}`")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.name() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_every_collection_from_its_name() {
        for collection in Collection::ALL {
            assert_eq!(collection.name().parse::<Collection>(), Ok(collection));
        }
    }

    #[test]
    fn should_reject_unknown_name() {
        let err = "invoices".parse::<Collection>().unwrap_err();
        assert_eq!(err.to_string(), "unknown collection `invoices`");
    }
}
