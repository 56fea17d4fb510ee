//! Referential integrity checks

use std::sync::Arc;

use crate::db::repository::{Entity, decode};
use crate::db::{Document, DocumentStore, Filter};
use crate::utils::{AppError, AppResult};

/// Resolves foreign keys against their target collection
#[derive(Clone)]
pub struct ReferenceChecker {
    store: Arc<dyn DocumentStore>,
}

impl ReferenceChecker {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Point lookup of `collection` where `field == value`.
    ///
    /// Zero matches is `ReferenceNotFound` naming `entity`.
    pub async fn resolve(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        entity: &str,
    ) -> AppResult<Document> {
        let found = self
            .store
            .find_one(collection, &Filter::eq(field, value))
            .await
            .map_err(|e| AppError::store_read(e.to_string()))?;

        found.ok_or_else(|| {
            tracing::debug!(collection, field, value, "Dangling reference");
            AppError::reference_not_found(entity)
                .with_detail("field", field)
                .with_detail("value", value)
        })
    }

    /// Resolve a reference to an entity by its surface id
    pub async fn require<T: Entity>(&self, id: &str) -> AppResult<T> {
        let doc = self.resolve(T::COLLECTION, T::ID_FIELD, id, T::LABEL).await?;
        Ok(decode(T::COLLECTION, doc)?)
    }

    /// Resolve only when a reference is supplied
    pub async fn require_opt<T: Entity>(&self, id: Option<&str>) -> AppResult<Option<T>> {
        match id {
            Some(id) => self.require(id).await.map(Some),
            None => Ok(None),
        }
    }
}
