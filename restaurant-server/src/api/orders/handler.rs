//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{Order, OrderCreate, OrderUpdate};

use crate::core::ServerState;
use crate::db::Document;
use crate::services::OrderService;
use crate::utils::validation::parse_body;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /order - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = OrderService::from_state(&state).list().await?;
    Ok(ok(orders))
}

/// GET /order/:order_id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = OrderService::from_state(&state).get(&order_id).await?;
    Ok(ok(order))
}

/// POST /order - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let payload = parse_body(payload)?;
    let order = OrderService::from_state(&state).create(payload).await?;
    Ok(ok(order))
}

/// PATCH /order/:order_id - 部分更新订单
pub async fn update(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    payload: Result<Json<OrderUpdate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let payload = parse_body(payload)?;
    let applied = OrderService::from_state(&state).update(&order_id, payload).await?;
    Ok(ok(applied))
}

/// DELETE /order/:order_id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = OrderService::from_state(&state).delete(&order_id).await?;
    Ok(ok(order))
}
