//! Menu Repository

use shared::ErrorCode;
use shared::models::Menu;

use super::Entity;
use crate::db::collections;

impl Entity for Menu {
    const COLLECTION: &'static str = collections::MENU;
    const ID_FIELD: &'static str = "menu_id";
    const LABEL: &'static str = "menu";
    const NOT_FOUND: ErrorCode = ErrorCode::MenuNotFound;
}
