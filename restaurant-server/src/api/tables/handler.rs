//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{Table, TableCreate, TableUpdate};

use crate::core::ServerState;
use crate::db::Document;
use crate::services::TableService;
use crate::utils::validation::parse_body;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /table - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Table>>>> {
    let tables = TableService::from_state(&state).list().await?;
    Ok(ok(tables))
}

/// GET /table/:table_id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<ApiResponse<Table>>> {
    let table = TableService::from_state(&state).get(&table_id).await?;
    Ok(ok(table))
}

/// POST /table - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TableCreate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Table>>> {
    let payload = parse_body(payload)?;
    let table = TableService::from_state(&state).create(payload).await?;
    Ok(ok(table))
}

/// PATCH /table/:table_id - 部分更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    payload: Result<Json<TableUpdate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let payload = parse_body(payload)?;
    let applied = TableService::from_state(&state).update(&table_id, payload).await?;
    Ok(ok(applied))
}

/// DELETE /table/:table_id - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<ApiResponse<Table>>> {
    let table = TableService::from_state(&state).delete(&table_id).await?;
    Ok(ok(table))
}
