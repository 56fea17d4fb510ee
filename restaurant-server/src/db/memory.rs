//! In-process document store
//!
//! Collections are insertion-ordered vectors behind a single `RwLock`.
//! Used as the default backend and by every test.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::pipeline::{Pipeline, evaluate};
use super::store::{Document, DocumentStore, Filter, StoreResult, UpdateOutcome};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let guard = self.collections.read();
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>> {
        let guard = self.collections.read();
        Ok(guard
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn aggregate(&self, collection: &str, pipeline: &Pipeline) -> StoreResult<Vec<Document>> {
        let (filter, rest) = pipeline.split_leading_match();
        let docs = self.find(collection, &filter).await?;
        evaluate(docs, rest)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<()> {
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let mut guard = self.collections.write();
        let docs = guard.entry(collection.to_string()).or_default();

        if let Some(existing) = docs.iter_mut().find(|d| filter.matches(d)) {
            existing.extend(set);
            return Ok(UpdateOutcome {
                matched: 1,
                upserted: false,
            });
        }

        if !upsert {
            return Ok(UpdateOutcome::default());
        }

        let mut created = filter.seed();
        created.extend(set);
        docs.push(created);
        Ok(UpdateOutcome {
            matched: 0,
            upserted: true,
        })
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let mut guard = self.collections.write();
        let Some(docs) = guard.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|d| filter.matches(d)) {
            Some(pos) => {
                docs.remove(pos);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let mut guard = self.collections.write();
        let Some(docs) = guard.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|d| !filter.matches(d));
        Ok((before - docs.len()) as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find_keep_order() {
        let store = MemoryStore::new();
        store.insert_one("food", doc(json!({"food_id": "a"}))).await.unwrap();
        store.insert_one("food", doc(json!({"food_id": "b"}))).await.unwrap();

        let all = store.find("food", &Filter::all()).await.unwrap();
        assert_eq!(all[0]["food_id"], json!("a"));
        assert_eq!(all[1]["food_id"], json!("b"));
        assert!(store.find("menu", &Filter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_without_upsert_reports_no_match() {
        let store = MemoryStore::new();
        let outcome = store
            .update_one("food", &Filter::eq("food_id", "x"), doc(json!({"name": "n"})), false)
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::default());
        assert_eq!(store.count("food"), 0);
    }

    #[tokio::test]
    async fn test_update_with_upsert_seeds_from_filter() {
        let store = MemoryStore::new();
        let outcome = store
            .update_one("food", &Filter::eq("food_id", "x"), doc(json!({"name": "n"})), true)
            .await
            .unwrap();
        assert!(outcome.upserted);
        let found = store
            .find_one("food", &Filter::eq("food_id", "x"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["name"], json!("n"));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryStore::new();
        store
            .insert_one("food", doc(json!({"food_id": "a", "name": "old", "price": 1.0})))
            .await
            .unwrap();
        let outcome = store
            .update_one("food", &Filter::eq("food_id", "a"), doc(json!({"name": "new"})), false)
            .await
            .unwrap();
        assert_eq!(outcome.matched, 1);
        let found = store.find_one("food", &Filter::eq("food_id", "a")).await.unwrap().unwrap();
        assert_eq!(found["name"], json!("new"));
        assert_eq!(found["price"], json!(1.0));
    }

    #[tokio::test]
    async fn test_delete_one_and_many() {
        let store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            store
                .insert_one("food", doc(json!({"food_id": id, "menu_id": "m1"})))
                .await
                .unwrap();
        }
        assert_eq!(store.delete_one("food", &Filter::eq("food_id", "a")).await.unwrap(), 1);
        assert_eq!(store.delete_one("food", &Filter::eq("food_id", "a")).await.unwrap(), 0);
        assert_eq!(store.delete_many("food", &Filter::eq("menu_id", "m1")).await.unwrap(), 2);
        assert_eq!(store.count("food"), 0);
    }
}
