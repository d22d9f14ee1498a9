//! Fixture loading for the collections that have no write path.
//!
//! A seed file is a JSON object mapping collection names to arrays of
//! documents:
//!
//! ```json
//! { "all-bills": [{ "title": "Electricity", "date": "2025-05-01" }] }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use paybill_app::ports::DocumentStore;
use paybill_domain::collection::Collection;
use paybill_domain::document::{self, Fields};
use paybill_domain::error::PaybillError;

use crate::error::StorageError;

/// Parse seed JSON into per-collection document bodies.
///
/// # Errors
///
/// Returns [`StorageError`] if the text is not a valid seed document or
/// names an unknown collection.
pub fn parse(text: &str) -> Result<Vec<(Collection, Vec<Fields>)>, StorageError> {
    let raw: BTreeMap<String, Vec<Fields>> = serde_json::from_str(text)?;
    raw.into_iter()
        .map(|(name, docs)| -> Result<_, StorageError> {
            Ok((Collection::from_str(&name)?, docs))
        })
        .collect()
}

/// Insert every document of the seed file at `path` into `store`.
///
/// Returns how many documents were inserted.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if an insert
/// fails.
pub async fn load<S: DocumentStore>(store: &S, path: &Path) -> Result<usize, PaybillError> {
    let text = std::fs::read_to_string(path).map_err(StorageError::from)?;
    let mut inserted = 0;
    for (collection, docs) in parse(&text)? {
        for fields in docs {
            store
                .insert(collection, document::without_id(fields))
                .await?;
            inserted += 1;
        }
        tracing::debug!(%collection, "seeded collection");
    }
    Ok(inserted)
}
