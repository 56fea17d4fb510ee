//! Order item service

use std::sync::Arc;

use shared::models::{Food, Order, OrderItem, OrderItemCreate, OrderItemsSummary};
use shared::util::surface_id;

use crate::aggregation::items_by_order;
use crate::consistency::{ReferenceChecker, delete_checked};
use crate::core::ServerState;
use crate::db::DocumentStore;
use crate::db::repository::{Entity, Repository};
use crate::utils::time::now_utc;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct OrderItemService {
    store: Arc<dyn DocumentStore>,
    items: Repository<OrderItem>,
    refs: ReferenceChecker,
}

impl OrderItemService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            items: Repository::new(store.clone()),
            refs: ReferenceChecker::new(store.clone()),
            store,
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.store())
    }

    pub async fn list(&self) -> AppResult<Vec<OrderItem>> {
        self.items
            .find_all()
            .await
            .map_err(|e| AppError::store_read(format!("Error occurred while listing order items: {e}")))
    }

    pub async fn get(&self, order_item_id: &str) -> AppResult<OrderItem> {
        self.items
            .find_by_id(order_item_id)
            .await?
            .ok_or_else(OrderItem::not_found)
    }

    /// Summary of all items of one order
    pub async fn by_order(&self, order_id: &str) -> AppResult<Vec<OrderItemsSummary>> {
        items_by_order(&self.store, order_id).await
    }

    /// Insert an item; order and food must exist, the unit price is the food's price
    pub async fn create(&self, payload: OrderItemCreate) -> AppResult<OrderItem> {
        validate_payload(&payload)?;
        let order_id = payload.order_id.unwrap_or_default();
        let food_id = payload.food_id.unwrap_or_default();

        self.refs.require::<Order>(&order_id).await?;
        let food: Food = self.refs.require(&food_id).await?;

        let now = now_utc();
        let item = OrderItem {
            order_item_id: surface_id(),
            order_id,
            food_id,
            quantity: payload.quantity.unwrap_or(1),
            unit_price: food.price,
            created_at: now,
            updated_at: now,
        };
        self.items
            .insert(&item)
            .await
            .map_err(|e| AppError::store_write(format!("Order item was not created: {e}")))?;

        tracing::info!(
            order_item_id = %item.order_item_id,
            order_id = %item.order_id,
            quantity = item.quantity,
            "Order item created"
        );
        Ok(item)
    }

    pub async fn delete(&self, order_item_id: &str) -> AppResult<OrderItem> {
        delete_checked(&self.items, order_item_id).await
    }
}
