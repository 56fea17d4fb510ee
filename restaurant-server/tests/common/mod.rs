//! Shared integration test harness
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use restaurant_server::db::{
    Document, DocumentStore, Filter, Pipeline, StoreError, StoreResult, UpdateOutcome,
};
use restaurant_server::{Config, MemoryStore, ServerState, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let router = router_for(config, store.clone());
        Self { store, router }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        send(&self.router, request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST and return `data.<id_field>`, asserting success
    pub async fn create(&self, uri: &str, body: Value, id_field: &str) -> String {
        let (status, body) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::OK, "create {uri} failed: {body}");
        body["data"][id_field].as_str().unwrap().to_string()
    }

    pub async fn create_menu(&self, name: &str) -> String {
        self.create("/menu", json!({"name": name, "category": "mains"}), "menu_id")
            .await
    }

    pub async fn create_food(&self, menu_id: &str, name: &str, price: f64) -> String {
        self.create(
            "/food",
            json!({"name": name, "price": price, "food_image": "img.png", "menu_id": menu_id}),
            "food_id",
        )
        .await
    }

    pub async fn create_table(&self, table_number: i64) -> String {
        self.create(
            "/table",
            json!({"number_of_guests": 4, "table_number": table_number}),
            "table_id",
        )
        .await
    }

    pub async fn create_order(&self, table_id: Option<&str>, food_ids: &[&str]) -> String {
        let items: Vec<Value> = food_ids.iter().map(|id| json!({"food_id": id})).collect();
        let mut body = json!({"items": items});
        if let Some(table_id) = table_id {
            body["table_id"] = json!(table_id);
        }
        self.create("/order", body, "order_id").await
    }
}

pub fn router_for(config: Config, store: Arc<dyn DocumentStore>) -> Router {
    let state = ServerState::new(config, store);
    build_app(&state).with_state(state)
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, body)
}

/// Assert the wrapped error body
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, description: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["error"]["code"], json!(expected.as_u16()));
    assert_eq!(body["error"]["description"], json!(description));
    assert!(body["error"]["message"].is_string());
}

/// Store whose every call fails
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn find_one(&self, _: &str, _: &Filter) -> StoreResult<Option<Document>> {
        Err(StoreError::Read("disk on fire".into()))
    }

    async fn find(&self, _: &str, _: &Filter) -> StoreResult<Vec<Document>> {
        Err(StoreError::Read("disk on fire".into()))
    }

    async fn aggregate(&self, _: &str, _: &Pipeline) -> StoreResult<Vec<Document>> {
        Err(StoreError::Read("disk on fire".into()))
    }

    async fn insert_one(&self, _: &str, _: Document) -> StoreResult<()> {
        Err(StoreError::Write("disk on fire".into()))
    }

    async fn update_one(&self, _: &str, _: &Filter, _: Document, _: bool) -> StoreResult<UpdateOutcome> {
        Err(StoreError::Write("disk on fire".into()))
    }

    async fn delete_one(&self, _: &str, _: &Filter) -> StoreResult<u64> {
        Err(StoreError::Write("disk on fire".into()))
    }

    async fn delete_many(&self, _: &str, _: &Filter) -> StoreResult<u64> {
        Err(StoreError::Write("disk on fire".into()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Connection("disk on fire".into()))
    }
}

/// Memory store that stalls every read
pub struct SlowStore {
    pub inner: MemoryStore,
    pub delay: Duration,
}

#[async_trait]
impl DocumentStore for SlowStore {
    fn backend(&self) -> &'static str {
        "slow"
    }

    async fn find_one(&self, c: &str, f: &Filter) -> StoreResult<Option<Document>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_one(c, f).await
    }

    async fn find(&self, c: &str, f: &Filter) -> StoreResult<Vec<Document>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find(c, f).await
    }

    async fn aggregate(&self, c: &str, p: &Pipeline) -> StoreResult<Vec<Document>> {
        tokio::time::sleep(self.delay).await;
        self.inner.aggregate(c, p).await
    }

    async fn insert_one(&self, c: &str, d: Document) -> StoreResult<()> {
        self.inner.insert_one(c, d).await
    }

    async fn update_one(&self, c: &str, f: &Filter, s: Document, u: bool) -> StoreResult<UpdateOutcome> {
        self.inner.update_one(c, f, s, u).await
    }

    async fn delete_one(&self, c: &str, f: &Filter) -> StoreResult<u64> {
        self.inner.delete_one(c, f).await
    }

    async fn delete_many(&self, c: &str, f: &Filter) -> StoreResult<u64> {
        self.inner.delete_many(c, f).await
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Memory store whose bulk deletes fail
pub struct CleanupFailingStore {
    pub inner: Arc<MemoryStore>,
}

#[async_trait]
impl DocumentStore for CleanupFailingStore {
    fn backend(&self) -> &'static str {
        "cleanup-failing"
    }

    async fn find_one(&self, c: &str, f: &Filter) -> StoreResult<Option<Document>> {
        self.inner.find_one(c, f).await
    }

    async fn find(&self, c: &str, f: &Filter) -> StoreResult<Vec<Document>> {
        self.inner.find(c, f).await
    }

    async fn aggregate(&self, c: &str, p: &Pipeline) -> StoreResult<Vec<Document>> {
        self.inner.aggregate(c, p).await
    }

    async fn insert_one(&self, c: &str, d: Document) -> StoreResult<()> {
        self.inner.insert_one(c, d).await
    }

    async fn update_one(&self, c: &str, f: &Filter, s: Document, u: bool) -> StoreResult<UpdateOutcome> {
        self.inner.update_one(c, f, s, u).await
    }

    async fn delete_one(&self, c: &str, f: &Filter) -> StoreResult<u64> {
        self.inner.delete_one(c, f).await
    }

    async fn delete_many(&self, _: &str, _: &Filter) -> StoreResult<u64> {
        Err(StoreError::Write("bulk delete refused".into()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
