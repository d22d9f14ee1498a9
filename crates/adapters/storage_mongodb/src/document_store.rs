//! `MongoDB` implementation of [`DocumentStore`].

use futures::TryStreamExt;
use mongodb::Collection as MongoCollection;
use mongodb::bson::{Document as BsonDocument, doc};

use paybill_app::ports::{DocumentStore, UpdateOutcome};
use paybill_domain::collection::Collection;
use paybill_domain::document::{Document, Fields};
use paybill_domain::error::PaybillError;
use paybill_domain::id::DocumentId;
use paybill_domain::query::Query;

use crate::client::Database;
use crate::convert;
use crate::error::StorageError;

/// `MongoDB`-backed document store.
#[derive(Clone)]
pub struct MongoDocumentStore {
    database: mongodb::Database,
}

impl MongoDocumentStore {
    /// Create a new store over the database selected by `db`.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            database: db.database().clone(),
        }
    }

    fn collection(&self, collection: Collection) -> MongoCollection<BsonDocument> {
        self.database.collection(collection.name())
    }
}

impl DocumentStore for MongoDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        query: Query,
    ) -> Result<Vec<Document>, PaybillError> {
        let coll = self.collection(collection);
        let mut action = coll.find(convert::filter(&query));
        if let Some(sort) = convert::sort(&query) {
            action = action.sort(sort);
        }
        if let Some(limit) = query.limit {
            action = action.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let cursor = action.await.map_err(StorageError::from)?;
        let raw: Vec<BsonDocument> = cursor.try_collect().await.map_err(StorageError::from)?;

        Ok(convert::from_bson_batch(raw))
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<Document>, PaybillError> {
        let raw = self
            .collection(collection)
            .find_one(convert::by_id(id))
            .await
            .map_err(StorageError::from)?;

        Ok(raw.map(convert::from_bson).transpose()?)
    }

    async fn insert(
        &self,
        collection: Collection,
        fields: Fields,
    ) -> Result<DocumentId, PaybillError> {
        let body = convert::to_bson(&fields)?;
        let result = self
            .collection(collection)
            .insert_one(body)
            .await
            .map_err(StorageError::from)?;

        Ok(convert::document_id(result.inserted_id)?)
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        patch: Fields,
    ) -> Result<UpdateOutcome, PaybillError> {
        let set = convert::to_bson(&patch)?;
        let result = self
            .collection(collection)
            .update_one(convert::by_id(id), doc! { "$set": set })
            .await
            .map_err(StorageError::from)?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_by_id(&self, collection: Collection, id: DocumentId) -> Result<u64, PaybillError> {
        let result = self
            .collection(collection)
            .delete_one(convert::by_id(id))
            .await
            .map_err(StorageError::from)?;

        Ok(result.deleted_count)
    }
}
