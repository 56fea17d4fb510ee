//! Order service

use std::sync::Arc;

use shared::models::{Order, OrderCreate, OrderUpdate, Table};
use shared::util::surface_id;

use crate::consistency::{ReferenceChecker, UpdateSet, apply_patch, delete_checked};
use crate::core::ServerState;
use crate::db::repository::{Entity, Repository};
use crate::db::{Document, DocumentStore};
use crate::utils::time::now_utc;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct OrderService {
    orders: Repository<Order>,
    refs: ReferenceChecker,
    patch_upsert: bool,
}

impl OrderService {
    pub fn new(store: Arc<dyn DocumentStore>, patch_upsert: bool) -> Self {
        Self {
            orders: Repository::new(store.clone()),
            refs: ReferenceChecker::new(store),
            patch_upsert,
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.store(), state.config.patch_upsert)
    }

    pub async fn list(&self) -> AppResult<Vec<Order>> {
        self.orders
            .find_all()
            .await
            .map_err(|e| AppError::store_read(format!("Error occurred while listing orders: {e}")))
    }

    pub async fn get(&self, order_id: &str) -> AppResult<Order> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(Order::not_found)
    }

    /// Insert an order; the table is checked only when one is given
    pub async fn create(&self, payload: OrderCreate) -> AppResult<Order> {
        validate_payload(&payload)?;
        self.refs.require_opt::<Table>(payload.table_id.as_deref()).await?;

        let now = now_utc();
        let order = Order {
            order_id: surface_id(),
            order_date: payload.order_date.unwrap_or(now),
            table_id: payload.table_id,
            items: payload.items,
            created_at: now,
            updated_at: now,
        };
        self.orders
            .insert(&order)
            .await
            .map_err(|e| AppError::store_write(format!("Order was not created: {e}")))?;

        tracing::info!(order_id = %order.order_id, lines = order.items.len(), "Order created");
        Ok(order)
    }

    pub async fn update(&self, order_id: &str, payload: OrderUpdate) -> AppResult<Document> {
        validate_payload(&payload)?;
        let table_id = payload.table_id.filter(|t| !t.trim().is_empty());
        self.refs.require_opt::<Table>(table_id.as_deref()).await?;

        let set = UpdateSet::new()
            .value("order_date", payload.order_date)?
            .text("table_id", table_id)
            .value("items", payload.items.filter(|items| !items.is_empty()))?;

        apply_patch(&self.orders, order_id, set, self.patch_upsert, now_utc()).await
    }

    pub async fn delete(&self, order_id: &str) -> AppResult<Order> {
        delete_checked(&self.orders, order_id).await
    }
}
