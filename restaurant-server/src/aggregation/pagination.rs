//! Paginated food listing

use std::sync::Arc;

use serde_json::Value;
use shared::models::{Food, PaginatedFoodResult};

use crate::db::repository::decode;
use crate::db::{Accumulator, DocumentStore, Filter, GroupKey, Pipeline, collections};
use crate::utils::types::PaginationParams;
use crate::utils::{AppError, AppResult};

fn pipeline(params: &PaginationParams) -> Pipeline {
    Pipeline::new()
        .matching(Filter::all())
        .group(
            GroupKey::All,
            vec![
                ("total_count", Accumulator::Count),
                ("food_items", Accumulator::PushRoot),
            ],
        )
        .slice(
            "food_items",
            params.start_index as usize,
            params.record_per_page as usize,
        )
}

/// One page of food plus the size of the whole collection
pub async fn paginate_food(
    store: &Arc<dyn DocumentStore>,
    params: &PaginationParams,
) -> AppResult<PaginatedFoodResult> {
    let groups = store
        .aggregate(collections::FOOD, &pipeline(params))
        .await
        .map_err(|e| AppError::store_read(format!("Error occurred while listing food items: {e}")))?;

    // empty collection: no group at all
    let Some(mut group) = groups.into_iter().next() else {
        return Ok(PaginatedFoodResult {
            total_count: 0,
            food_items: Vec::new(),
        });
    };

    let total_count = group.get("total_count").and_then(Value::as_u64).unwrap_or(0);
    let food_items = match group.remove("food_items") {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(doc) => Some(decode::<Food>(collections::FOOD, doc)),
                _ => None,
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => Vec::new(),
    };

    Ok(PaginatedFoodResult {
        total_count,
        food_items,
    })
}
