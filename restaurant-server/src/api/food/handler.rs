//! Food API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use shared::models::{Food, FoodCreate, FoodUpdate, MostOrderedFood, PaginatedFoodResult};

use crate::core::ServerState;
use crate::db::Document;
use crate::services::FoodService;
use crate::utils::types::{FoodListQuery, PaginationParams};
use crate::utils::validation::parse_body;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /food?page&recordPerPage&startIndex - 分页获取菜品
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FoodListQuery>,
) -> AppResult<Json<ApiResponse<PaginatedFoodResult>>> {
    let params = PaginationParams::from_query(&query)?;
    let page = FoodService::from_state(&state).list(&params).await?;
    Ok(ok(page))
}

/// GET /food/most-ordered - 点单次数最多的菜品 (前 5)
pub async fn most_ordered(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<MostOrderedFood>>>> {
    let ranking = FoodService::from_state(&state).most_ordered().await?;
    Ok(ok(ranking))
}

/// GET /food/:food_id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
) -> AppResult<Json<ApiResponse<Food>>> {
    let food = FoodService::from_state(&state).get(&food_id).await?;
    Ok(ok(food))
}

/// POST /food - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<FoodCreate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Food>>> {
    let payload = parse_body(payload)?;
    let food = FoodService::from_state(&state).create(payload).await?;
    Ok(ok(food))
}

/// PATCH /food/:food_id - 部分更新菜品，返回实际写入的字段
pub async fn update(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
    payload: Result<Json<FoodUpdate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let payload = parse_body(payload)?;
    let applied = FoodService::from_state(&state).update(&food_id, payload).await?;
    Ok(ok(applied))
}

/// DELETE /food/:food_id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
) -> AppResult<Json<ApiResponse<Food>>> {
    let food = FoodService::from_state(&state).delete(&food_id).await?;
    Ok(ok(food))
}
