//! `SQLite` implementation of [`DocumentStore`].
//!
//! Every collection lives in one `documents` table; bodies are JSON text and
//! filters/sorts go through `json_extract`. Natural order is insertion order.

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use paybill_app::ports::{DocumentStore, UpdateOutcome};
use paybill_domain::collection::Collection;
use paybill_domain::document::{self, Document, Fields};
use paybill_domain::error::PaybillError;
use paybill_domain::id::DocumentId;
use paybill_domain::query::{Direction, Query};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Document`]s.
struct Wrapper(Document);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Document> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let body: String = row.try_get("body")?;

        let id = DocumentId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let fields: Fields =
            serde_json::from_str(&body).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Document::new(id, fields)))
    }
}

const INSERT: &str = "INSERT INTO documents (id, collection, body) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, body FROM documents WHERE collection = ? AND id = ?";
const UPDATE_BODY: &str = "UPDATE documents SET body = ? WHERE collection = ? AND id = ?";
const DELETE_BY_ID: &str = "DELETE FROM documents WHERE collection = ? AND id = ?";

/// JSON path selecting a top-level field.
fn json_path(field: &str) -> String {
    format!("$.\"{field}\"")
}

/// SQL for a find query. Bind order: collection, then filter path (twice)
/// and value, then sort path, then limit, each only when present.
fn select_sql(query: &Query) -> String {
    let mut sql = String::from("SELECT id, body FROM documents WHERE collection = ?");
    if query.filter.is_some() {
        sql.push_str(" AND json_type(body, ?) = 'text' AND json_extract(body, ?) = ?");
    }
    match &query.sort {
        Some(sort) => {
            let direction = match sort.direction {
                Direction::Ascending => "ASC",
                Direction::Descending => "DESC",
            };
            sql.push_str(" ORDER BY json_extract(body, ?) ");
            sql.push_str(direction);
            sql.push_str(", rowid ASC");
        }
        None => sql.push_str(" ORDER BY rowid ASC"),
    }
    if query.limit.is_some() {
        sql.push_str(" LIMIT ?");
    }
    sql
}

/// `SQLite`-backed document store.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DocumentStore for SqliteDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        query: Query,
    ) -> Result<Vec<Document>, PaybillError> {
        let sql = select_sql(&query);
        let mut statement = sqlx::query_as::<_, Wrapper>(&sql).bind(collection.name());
        if let Some(filter) = &query.filter {
            let path = json_path(&filter.field);
            statement = statement
                .bind(path.clone())
                .bind(path)
                .bind(filter.value.clone());
        }
        if let Some(sort) = &query.sort {
            statement = statement.bind(json_path(&sort.field));
        }
        if let Some(limit) = query.limit {
            statement = statement.bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<Document>, PaybillError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(collection.name())
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn insert(
        &self,
        collection: Collection,
        fields: Fields,
    ) -> Result<DocumentId, PaybillError> {
        let id = DocumentId::generate();
        let body = serde_json::to_string(&fields).map_err(StorageError::from)?;

        sqlx::query(INSERT)
            .bind(id.to_string())
            .bind(collection.name())
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(id)
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        patch: Fields,
    ) -> Result<UpdateOutcome, PaybillError> {
        // Write lock taken at BEGIN so concurrent read-merge-write cycles
        // queue on the busy timeout instead of failing the lock upgrade.
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(StorageError::from)?;

        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(collection.name())
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        let Some(Wrapper(mut stored)) = row else {
            return Ok(UpdateOutcome::default());
        };

        let modified = document::merge(&mut stored.fields, patch);
        if modified {
            let body = serde_json::to_string(&stored.fields).map_err(StorageError::from)?;
            sqlx::query(UPDATE_BODY)
                .bind(body)
                .bind(collection.name())
                .bind(id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
        }

        tx.commit().await.map_err(StorageError::from)?;

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn delete_by_id(&self, collection: Collection, id: DocumentId) -> Result<u64, PaybillError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(collection.name())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected())
    }
}
