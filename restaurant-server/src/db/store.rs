//! Document Store Gateway
//!
//! Collection-oriented capability every repository talks to. Documents are
//! plain JSON objects keyed by field name; the backend's own record
//! identifier never appears in them.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use super::pipeline::Pipeline;

/// A stored document
pub type Document = Map<String, Value>;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Read failed: {0}")]
    Read(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Invalid pipeline: {0}")]
    Pipeline(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Conjunction of field equality clauses.
///
/// `Filter::all()` matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Match every document
    pub fn all() -> Self {
        Self::default()
    }

    /// Match documents whose `field` equals `value`
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn clauses(&self) -> &[(String, Value)] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, expected)| lookup(doc, field) == Some(expected))
    }

    /// Seed document for an upsert: the equality clauses become fields
    pub fn seed(&self) -> Document {
        self.clauses.iter().cloned().collect()
    }
}

/// Resolve a dotted field path (`items.food_id`) inside a document
pub fn lookup<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = doc.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Outcome of `update_one`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents matched by the filter (0 or 1)
    pub matched: u64,
    /// True when no document matched and one was inserted
    pub upserted: bool,
}

/// Document store capability
///
/// Implementations must be safe to share across requests; the server holds
/// one `Arc<dyn DocumentStore>` for its whole lifetime.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Backend name for logs and health output
    fn backend(&self) -> &'static str;

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// All matching documents in store order
    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>>;

    async fn aggregate(&self, collection: &str, pipeline: &Pipeline) -> StoreResult<Vec<Document>>;

    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<()>;

    /// Merge `set` into the first matching document.
    ///
    /// With `upsert`, a missing document is created from the filter's
    /// equality clauses plus `set`.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome>;

    /// Delete the first matching document, returning the deleted count
    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    /// Cheap liveness probe
    async fn ping(&self) -> StoreResult<()>;

    /// Release backend resources at shutdown
    async fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}
