//! Dining Table Repository

use shared::ErrorCode;
use shared::models::Table;

use super::Entity;
use crate::db::collections;

impl Entity for Table {
    const COLLECTION: &'static str = collections::TABLE;
    const ID_FIELD: &'static str = "table_id";
    const LABEL: &'static str = "table";
    const NOT_FOUND: ErrorCode = ErrorCode::TableNotFound;
}
