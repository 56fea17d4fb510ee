//! Most ordered food ranking

use std::sync::Arc;

use serde_json::Value;
use shared::models::MostOrderedFood;

use crate::db::pipeline::GROUP_KEY;
use crate::db::{Accumulator, DocumentStore, GroupKey, Pipeline, collections};
use crate::utils::{AppError, AppResult};

/// Number of entries returned by the ranking
pub const RANKING_LIMIT: usize = 5;

fn pipeline() -> Pipeline {
    Pipeline::new()
        .unwind("items")
        .group(
            GroupKey::Field("items.food_id".into()),
            vec![("total_orders", Accumulator::Count)],
        )
        .sort_desc("total_orders")
        .limit(RANKING_LIMIT)
}

/// Foods ranked by how many order lines reference them.
///
/// Ties keep first-seen order; no order lines at all is `NotFound`.
pub async fn most_ordered_food(store: &Arc<dyn DocumentStore>) -> AppResult<Vec<MostOrderedFood>> {
    let groups = store
        .aggregate(collections::ORDER, &pipeline())
        .await
        .map_err(|e| AppError::store_read(format!("Error occurred while ranking food: {e}")))?;

    let ranking: Vec<MostOrderedFood> = groups
        .into_iter()
        .filter_map(|group| {
            let food_id = group.get(GROUP_KEY).and_then(Value::as_str)?.to_string();
            let total_orders = group.get("total_orders").and_then(Value::as_u64).unwrap_or(0);
            Some(MostOrderedFood {
                food_id,
                total_orders,
            })
        })
        .collect();

    if ranking.is_empty() {
        return Err(AppError::not_found("ordered food"));
    }
    Ok(ranking)
}
