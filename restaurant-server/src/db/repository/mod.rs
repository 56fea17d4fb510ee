//! Repository Module
//!
//! Typed CRUD over the document store. Each entity names its collection and
//! surface-id field; documents are converted with serde at this boundary so
//! nothing above it handles raw documents.

pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{AppError, ErrorCode};
use thiserror::Error;

use super::store::{Document, DocumentStore, Filter, StoreError, UpdateOutcome};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Malformed {collection} document: {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Store(StoreError::Write(msg)) => AppError::store_write(msg),
            RepoError::Store(e) => AppError::store_read(e.to_string()),
            e @ RepoError::Decode { .. } => AppError::store_read(e.to_string()),
        }
    }
}

/// A persisted entity
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// Collection name
    const COLLECTION: &'static str;
    /// Surface identifier field
    const ID_FIELD: &'static str;
    /// Human label used in messages ("food item", "menu", ...)
    const LABEL: &'static str;
    /// Entity-specific not-found code
    const NOT_FOUND: ErrorCode;

    /// Not-found error for this entity
    fn not_found() -> AppError {
        AppError::with_message(Self::NOT_FOUND, format!("{} not found", Self::LABEL))
    }
}

/// Serialize a value into a document
pub fn encode<T: Serialize>(collection: &'static str, value: &T) -> RepoResult<Document> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(RepoError::Decode {
            collection,
            message: "value does not serialize to an object".into(),
        }),
        Err(e) => Err(RepoError::Decode {
            collection,
            message: e.to_string(),
        }),
    }
}

/// Deserialize a document
pub fn decode<T: DeserializeOwned>(collection: &'static str, doc: Document) -> RepoResult<T> {
    serde_json::from_value(Value::Object(doc)).map_err(|e| RepoError::Decode {
        collection,
        message: e.to_string(),
    })
}

/// Generic entity repository
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    fn by_id(id: &str) -> Filter {
        Filter::eq(T::ID_FIELD, id)
    }

    /// All entities in store order
    pub async fn find_all(&self) -> RepoResult<Vec<T>> {
        self.find_where(&Filter::all()).await
    }

    pub async fn find_where(&self, filter: &Filter) -> RepoResult<Vec<T>> {
        self.store
            .find(T::COLLECTION, filter)
            .await?
            .into_iter()
            .map(|doc| decode(T::COLLECTION, doc))
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        self.store
            .find_one(T::COLLECTION, &Self::by_id(id))
            .await?
            .map(|doc| decode(T::COLLECTION, doc))
            .transpose()
    }

    pub async fn insert(&self, entity: &T) -> RepoResult<()> {
        let doc = encode(T::COLLECTION, entity)?;
        self.store.insert_one(T::COLLECTION, doc).await?;
        Ok(())
    }

    /// Merge a field set into the entity with the given id
    pub async fn update_fields(&self, id: &str, set: Document, upsert: bool) -> RepoResult<UpdateOutcome> {
        Ok(self
            .store
            .update_one(T::COLLECTION, &Self::by_id(id), set, upsert)
            .await?)
    }

    /// Delete one entity, returning the deleted count
    pub async fn delete(&self, id: &str) -> RepoResult<u64> {
        Ok(self.store.delete_one(T::COLLECTION, &Self::by_id(id)).await?)
    }
}
