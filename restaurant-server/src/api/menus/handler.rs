//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{Menu, MenuCreate, MenuUpdate};

use crate::core::ServerState;
use crate::db::Document;
use crate::services::MenuService;
use crate::utils::validation::parse_body;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /menu - 获取所有菜单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Menu>>>> {
    let menus = MenuService::from_state(&state).list().await?;
    Ok(ok(menus))
}

/// GET /menu/:menu_id - 获取单个菜单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
) -> AppResult<Json<ApiResponse<Menu>>> {
    let menu = MenuService::from_state(&state).get(&menu_id).await?;
    Ok(ok(menu))
}

/// POST /menu - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<MenuCreate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Menu>>> {
    let payload = parse_body(payload)?;
    let menu = MenuService::from_state(&state).create(payload).await?;
    Ok(ok(menu))
}

/// PATCH /menu/:menu_id - 部分更新菜单
pub async fn update(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
    payload: Result<Json<MenuUpdate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let payload = parse_body(payload)?;
    let applied = MenuService::from_state(&state).update(&menu_id, payload).await?;
    Ok(ok(applied))
}

/// DELETE /menu/:menu_id - 删除菜单及其全部菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
) -> AppResult<Json<ApiResponse<Menu>>> {
    let menu = MenuService::from_state(&state).delete(&menu_id).await?;
    Ok(ok(menu))
}
