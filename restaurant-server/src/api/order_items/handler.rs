//! Order Item API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{OrderItem, OrderItemCreate, OrderItemsSummary};

use crate::core::ServerState;
use crate::services::OrderItemService;
use crate::utils::validation::parse_body;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /order-items - 获取所有订单明细
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<OrderItem>>>> {
    let items = OrderItemService::from_state(&state).list().await?;
    Ok(ok(items))
}

/// GET /order-items/:order_item_id - 获取单条订单明细
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(order_item_id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderItem>>> {
    let item = OrderItemService::from_state(&state).get(&order_item_id).await?;
    Ok(ok(item))
}

/// GET /order-items/order/:order_id - 按订单汇总明细 (含金额、桌号)
pub async fn by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<OrderItemsSummary>>>> {
    let summaries = OrderItemService::from_state(&state).by_order(&order_id).await?;
    Ok(ok(summaries))
}

/// POST /order-items - 创建订单明细
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderItemCreate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<OrderItem>>> {
    let payload = parse_body(payload)?;
    let item = OrderItemService::from_state(&state).create(payload).await?;
    Ok(ok(item))
}

/// DELETE /order-items/:order_item_id - 删除订单明细
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_item_id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderItem>>> {
    let item = OrderItemService::from_state(&state).delete(&order_item_id).await?;
    Ok(ok(item))
}
