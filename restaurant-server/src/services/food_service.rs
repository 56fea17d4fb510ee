//! Food service

use std::sync::Arc;

use shared::models::{Food, FoodCreate, FoodUpdate, Menu, MostOrderedFood, PaginatedFoodResult};
use shared::util::surface_id;

use crate::aggregation::{most_ordered_food, paginate_food};
use crate::consistency::{ReferenceChecker, UpdateSet, apply_patch, delete_checked};
use crate::core::ServerState;
use crate::db::repository::{Entity, Repository};
use crate::db::{Document, DocumentStore};
use crate::utils::money::round_price;
use crate::utils::time::now_utc;
use crate::utils::types::PaginationParams;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_payload, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct FoodService {
    store: Arc<dyn DocumentStore>,
    foods: Repository<Food>,
    refs: ReferenceChecker,
    patch_upsert: bool,
}

impl FoodService {
    pub fn new(store: Arc<dyn DocumentStore>, patch_upsert: bool) -> Self {
        Self {
            foods: Repository::new(store.clone()),
            refs: ReferenceChecker::new(store.clone()),
            store,
            patch_upsert,
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.store(), state.config.patch_upsert)
    }

    pub async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedFoodResult> {
        paginate_food(&self.store, params).await
    }

    pub async fn most_ordered(&self) -> AppResult<Vec<MostOrderedFood>> {
        most_ordered_food(&self.store).await
    }

    pub async fn get(&self, food_id: &str) -> AppResult<Food> {
        self.foods
            .find_by_id(food_id)
            .await?
            .ok_or_else(Food::not_found)
    }

    /// Insert a food item under an existing menu; the price is rounded to 2 dp
    pub async fn create(&self, payload: FoodCreate) -> AppResult<Food> {
        validate_payload(&payload)?;
        let name = payload.name.unwrap_or_default();
        let menu_id = payload.menu_id.unwrap_or_default();
        let price = payload.price.unwrap_or_default();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_price(price, "price")?;

        self.refs.require::<Menu>(&menu_id).await?;

        let now = now_utc();
        let food = Food {
            food_id: surface_id(),
            name,
            price: round_price(price),
            food_image: payload.food_image.unwrap_or_default(),
            menu_id,
            created_at: now,
            updated_at: now,
        };
        self.foods
            .insert(&food)
            .await
            .map_err(|e| AppError::store_write(format!("Food item was not created: {e}")))?;

        tracing::info!(food_id = %food.food_id, menu_id = %food.menu_id, price = food.price, "Food created");
        Ok(food)
    }

    /// Patch a food item; a supplied `menu_id` must resolve first
    pub async fn update(&self, food_id: &str, payload: FoodUpdate) -> AppResult<Document> {
        validate_payload(&payload)?;
        validate_optional_text(&payload.food_image, "food_image", MAX_URL_LEN)?;
        if let Some(price) = payload.price {
            validate_price(price, "price")?;
        }

        let menu_id = payload.menu_id.filter(|m| !m.trim().is_empty());
        self.refs.require_opt::<Menu>(menu_id.as_deref()).await?;

        let set = UpdateSet::new()
            .text("name", payload.name)
            .value("price", payload.price.map(round_price))?
            .text("food_image", payload.food_image)
            .text("menu_id", menu_id);

        apply_patch(&self.foods, food_id, set, self.patch_upsert, now_utc()).await
    }

    pub async fn delete(&self, food_id: &str) -> AppResult<Food> {
        delete_checked(&self.foods, food_id).await
    }
}
