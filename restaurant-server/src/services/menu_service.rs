//! Menu service

use std::sync::Arc;

use shared::models::{Food, Menu, MenuCreate, MenuUpdate};
use shared::util::surface_id;

use crate::consistency::{UpdateSet, apply_patch, check_window, delete_menu};
use crate::core::ServerState;
use crate::db::repository::{Entity, Repository};
use crate::db::{Document, DocumentStore};
use crate::utils::time::now_utc;
use crate::utils::validation::{MAX_NAME_LEN, validate_payload, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct MenuService {
    menus: Repository<Menu>,
    foods: Repository<Food>,
    patch_upsert: bool,
}

impl MenuService {
    pub fn new(store: Arc<dyn DocumentStore>, patch_upsert: bool) -> Self {
        Self {
            menus: Repository::new(store.clone()),
            foods: Repository::new(store),
            patch_upsert,
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.store(), state.config.patch_upsert)
    }

    pub async fn list(&self) -> AppResult<Vec<Menu>> {
        self.menus
            .find_all()
            .await
            .map_err(|e| AppError::store_read(format!("Error occurred while listing menus: {e}")))
    }

    pub async fn get(&self, menu_id: &str) -> AppResult<Menu> {
        self.menus
            .find_by_id(menu_id)
            .await?
            .ok_or_else(Menu::not_found)
    }

    /// Insert a menu. No existence checks; the window, if any, must be upcoming.
    pub async fn create(&self, payload: MenuCreate) -> AppResult<Menu> {
        validate_payload(&payload)?;
        let name = payload.name.unwrap_or_default();
        let category = payload.category.unwrap_or_default();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_required_text(&category, "category", MAX_NAME_LEN)?;

        let now = now_utc();
        let window = check_window(payload.start_date, payload.end_date, now)?;

        let menu = Menu {
            menu_id: surface_id(),
            name,
            category,
            start_date: window.map(|w| w.start_date),
            end_date: window.map(|w| w.end_date),
            created_at: now,
            updated_at: now,
        };
        self.menus
            .insert(&menu)
            .await
            .map_err(|e| AppError::store_write(format!("Menu item was not created: {e}")))?;

        tracing::info!(menu_id = %menu.menu_id, name = %menu.name, "Menu created");
        Ok(menu)
    }

    /// Patch name, category and the window; returns the applied field set
    pub async fn update(&self, menu_id: &str, payload: MenuUpdate) -> AppResult<Document> {
        validate_payload(&payload)?;
        let now = now_utc();
        let set = UpdateSet::new()
            .text("name", payload.name)
            .text("category", payload.category)
            .window(payload.start_date, payload.end_date, now)?;

        apply_patch(&self.menus, menu_id, set, self.patch_upsert, now).await
    }

    /// Delete a menu and all of its food items
    pub async fn delete(&self, menu_id: &str) -> AppResult<Menu> {
        delete_menu(&self.menus, &self.foods, menu_id).await
    }
}
