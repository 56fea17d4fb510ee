//! Checked deletes and the menu → food cascade

use shared::models::{Food, Menu};

use crate::db::repository::{Entity, Repository};
use crate::utils::{AppError, AppResult};

/// Lookup, delete one, verify the deleted count, return the pre-delete snapshot
pub async fn delete_checked<T: Entity>(repo: &Repository<T>, id: &str) -> AppResult<T> {
    let snapshot = repo.find_by_id(id).await?.ok_or_else(T::not_found)?;

    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| AppError::store_write(e.to_string()))?;
    if deleted != 1 {
        return Err(T::not_found());
    }

    tracing::info!(collection = T::COLLECTION, id, "Deleted");
    Ok(snapshot)
}

/// Delete a menu, then every food attached to it.
///
/// The food sweep runs only after the menu delete succeeded and is not rolled
/// back on failure.
pub async fn delete_menu(
    menus: &Repository<Menu>,
    foods: &Repository<Food>,
    menu_id: &str,
) -> AppResult<Menu> {
    let snapshot = delete_checked(menus, menu_id).await?;

    let removed = foods.delete_by_menu(menu_id).await.map_err(|e| {
        tracing::error!(menu_id, error = %e, "Menu deleted but dependent food cleanup failed");
        AppError::store_write(format!("Failed to delete food items of menu {menu_id}: {e}"))
    })?;

    tracing::info!(menu_id, foods_removed = removed, "Menu cascade complete");
    Ok(snapshot)
}
