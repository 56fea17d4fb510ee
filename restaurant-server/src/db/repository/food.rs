//! Food Repository

use shared::ErrorCode;
use shared::models::Food;

use super::{Entity, RepoResult, Repository};
use crate::db::collections;
use crate::db::store::Filter;

impl Entity for Food {
    const COLLECTION: &'static str = collections::FOOD;
    const ID_FIELD: &'static str = "food_id";
    const LABEL: &'static str = "food item";
    const NOT_FOUND: ErrorCode = ErrorCode::FoodNotFound;
}

impl Repository<Food> {
    /// Remove every food attached to a menu, returning the deleted count
    pub async fn delete_by_menu(&self, menu_id: &str) -> RepoResult<u64> {
        Ok(self
            .store()
            .delete_many(collections::FOOD, &Filter::eq("menu_id", menu_id))
            .await?)
    }
}
