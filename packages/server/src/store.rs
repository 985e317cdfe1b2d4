use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use thiserror::Error;

use crate::entity::scenario;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The scenario could not be encoded as a BSON document.
    #[error("Document cannot be stored: {0}")]
    InvalidDocument(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

impl From<bson::ser::Error> for StoreError {
    fn from(e: bson::ser::Error) -> Self {
        StoreError::InvalidDocument(e.to_string())
    }
}

/// Optional equality filters applied when listing scenarios.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioFilter {
    pub crime_type: Option<String>,
}

impl ScenarioFilter {
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(ref crime_type) = self.crime_type {
            filter.insert("crime_type", crime_type.as_str());
        }
        filter
    }
}

/// Listings never carry `case_data`.
pub fn list_projection() -> Document {
    doc! { "case_data": 0 }
}

/// Newest first; `_id` breaks `created_at` ties so pages stay disjoint.
pub fn list_sort() -> Document {
    doc! { "created_at": -1, "_id": -1 }
}

/// Single-document operations on the scenario collection.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    /// Insert a scenario and return the identifier the storage layer assigned.
    async fn insert(&self, scenario: &scenario::NewModel) -> Result<ObjectId, StoreError>;

    async fn find(&self, id: ObjectId) -> Result<Option<scenario::Model>, StoreError>;

    /// Newest first (ties broken by descending `_id`), `case_data` excluded.
    async fn list(
        &self,
        filter: &ScenarioFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<scenario::SummaryModel>, StoreError>;

    /// Returns `false` when no document had the given identifier.
    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError>;
}

/// [`ScenarioStore`] backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoScenarioStore {
    collection: Collection<scenario::Model>,
}

impl MongoScenarioStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(scenario::COLLECTION),
        }
    }
}

#[async_trait]
impl ScenarioStore for MongoScenarioStore {
    async fn insert(&self, scenario: &scenario::NewModel) -> Result<ObjectId, StoreError> {
        let document = bson::to_document(scenario)?;
        let result = self
            .collection
            .clone_with_type::<Document>()
            .insert_one(document)
            .await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Unavailable(format!(
                "Unexpected inserted id type: {:?}",
                result.inserted_id
            ))
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<scenario::Model>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn list(
        &self,
        filter: &ScenarioFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<scenario::SummaryModel>, StoreError> {
        let cursor = self
            .collection
            .clone_with_type::<scenario::SummaryModel>()
            .find(filter.to_document())
            .projection(list_projection())
            .sort(list_sort())
            .skip(skip)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
