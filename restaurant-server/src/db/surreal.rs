//! Embedded SurrealDB backend
//!
//! Each collection is a SurrealDB table. Records are keyed by an integer
//! sequence that strictly increases within the process and starts above the
//! current time in microseconds, so the natural scan order follows insertion
//! order; the record id is omitted from every document handed back to callers. Aggregations push the leading
//! match down as a `WHERE` clause and evaluate the remaining stages
//! in-process.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use super::pipeline::{Pipeline, evaluate};
use super::store::{Document, DocumentStore, Filter, StoreError, StoreResult, UpdateOutcome};

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Db>,
    /// Last record key handed out
    seq: Arc<AtomicI64>,
}

impl std::fmt::Debug for SurrealStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurrealStore").finish_non_exhaustive()
    }
}

impl SurrealStore {
    /// Open (or create) a RocksDB-backed database
    pub async fn open(path: impl AsRef<Path>, namespace: &str, database: &str) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Connection(format!("Failed to create {}: {e}", parent.display())))?;
        }
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        db.use_ns(namespace.to_string())
            .use_db(database.to_string())
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        tracing::info!(path = %path.display(), namespace, database, "SurrealDB store opened");
        Ok(Self {
            db,
            seq: Arc::new(AtomicI64::new(chrono::Utc::now().timestamp_micros())),
        })
    }

    /// Next record key: the current time in microseconds, bumped past the last key
    fn next_key(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_micros();
        let last = self
            .seq
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(key_after(last, now)))
            .unwrap_or_else(|last| last);
        key_after(last, now)
    }

    async fn select(&self, collection: &str, filter: &Filter, limit: Option<usize>) -> StoreResult<Vec<Document>> {
        let (clause, binds) = where_clause(filter)?;
        let limit = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let sql = format!("SELECT * OMIT id FROM type::table($table){clause}{limit}");

        let mut query = self.db.query(sql).bind(("table", collection.to_string()));
        for (name, value) in binds {
            query = query.bind((name, value));
        }
        let mut response = query.await.map_err(|e| StoreError::Read(e.to_string()))?;
        let rows: Vec<Value> = response.take(0).map_err(|e| StoreError::Read(e.to_string()))?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect())
    }

    /// Run a write statement over the first matching record, returning the affected count
    async fn write_first(&self, verb: &str, collection: &str, filter: &Filter, set: Option<Document>) -> StoreResult<u64> {
        let (clause, binds) = where_clause(filter)?;
        let target = format!("(SELECT VALUE id FROM type::table($table){clause} LIMIT 1)");
        let sql = match verb {
            "UPDATE" => format!("UPDATE {target} MERGE $set RETURN BEFORE"),
            _ => format!("DELETE {target} RETURN BEFORE"),
        };

        let mut query = self.db.query(sql).bind(("table", collection.to_string()));
        for (name, value) in binds {
            query = query.bind((name, value));
        }
        if let Some(set) = set {
            query = query.bind(("set", Value::Object(set)));
        }
        let mut response = query.await.map_err(|e| StoreError::Write(e.to_string()))?;
        let rows: Vec<Value> = response.take(0).map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(rows.len() as u64)
    }
}

fn key_after(last: i64, now: i64) -> i64 {
    now.max(last.saturating_add(1))
}

/// Field names are interpolated into SurrealQL; only plain identifiers are accepted
fn ident(field: &str) -> StoreResult<&str> {
    let ok = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if ok {
        Ok(field)
    } else {
        Err(StoreError::Read(format!("Invalid field name: {field}")))
    }
}

fn where_clause(filter: &Filter) -> StoreResult<(String, Vec<(String, Value)>)> {
    if filter.is_empty() {
        return Ok((String::new(), Vec::new()));
    }
    let mut parts = Vec::with_capacity(filter.clauses().len());
    let mut binds = Vec::with_capacity(filter.clauses().len());
    for (i, (field, value)) in filter.clauses().iter().enumerate() {
        parts.push(format!("{} = $f{i}", ident(field)?));
        binds.push((format!("f{i}"), value.clone()));
    }
    Ok((format!(" WHERE {}", parts.join(" AND ")), binds))
}

#[async_trait]
impl DocumentStore for SurrealStore {
    fn backend(&self) -> &'static str {
        "surreal"
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        Ok(self.select(collection, filter, Some(1)).await?.into_iter().next())
    }

    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>> {
        self.select(collection, filter, None).await
    }

    async fn aggregate(&self, collection: &str, pipeline: &Pipeline) -> StoreResult<Vec<Document>> {
        let (filter, rest) = pipeline.split_leading_match();
        let docs = self.select(collection, &filter, None).await?;
        evaluate(docs, rest)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<()> {
        self.db
            .query("CREATE type::thing($table, $key) CONTENT $doc RETURN NONE")
            .bind(("table", collection.to_string()))
            .bind(("key", self.next_key()))
            .bind(("doc", Value::Object(doc)))
            .await
            .and_then(|r| r.check())
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let matched = self.write_first("UPDATE", collection, filter, Some(set.clone())).await?;
        if matched > 0 {
            return Ok(UpdateOutcome {
                matched,
                upserted: false,
            });
        }
        if !upsert {
            return Ok(UpdateOutcome::default());
        }
        let mut created = filter.seed();
        created.extend(set);
        self.insert_one(collection, created).await?;
        Ok(UpdateOutcome {
            matched: 0,
            upserted: true,
        })
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        self.write_first("DELETE", collection, filter, None).await
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let (clause, binds) = where_clause(filter)?;
        let sql = format!("DELETE type::table($table){clause} RETURN BEFORE");
        let mut query = self.db.query(sql).bind(("table", collection.to_string()));
        for (name, value) in binds {
            query = query.bind((name, value));
        }
        let mut response = query.await.map_err(|e| StoreError::Write(e.to_string()))?;
        let rows: Vec<Value> = response.take(0).map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(rows.len() as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.db
            .health()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where_clause_binds_each_field() {
        let (clause, binds) = where_clause(&Filter::eq("menu_id", "m1").and("name", "Soup")).unwrap();
        assert_eq!(clause, " WHERE menu_id = $f0 AND name = $f1");
        assert_eq!(binds.len(), 2);
    }

    #[test]
    fn test_keys_strictly_increase() {
        let now = 1_700_000_000_000_000;
        assert_eq!(key_after(now - 5, now), now);
        assert_eq!(key_after(now, now), now + 1);
        assert_eq!(key_after(now + 7, now), now + 8);

        let mut last = now;
        for _ in 0..100 {
            let next = key_after(last, now);
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_ident_rejects_injection() {
        assert!(ident("food_id").is_ok());
        assert!(ident("food_id; DELETE food").is_err());
        assert!(ident("").is_err());
    }
}
