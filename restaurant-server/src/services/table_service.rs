//! Dining table service

use std::sync::Arc;

use shared::models::{Table, TableCreate, TableUpdate};
use shared::util::surface_id;

use crate::consistency::{UpdateSet, apply_patch, delete_checked};
use crate::core::ServerState;
use crate::db::repository::{Entity, Repository};
use crate::db::{Document, DocumentStore};
use crate::utils::time::now_utc;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct TableService {
    tables: Repository<Table>,
    patch_upsert: bool,
}

impl TableService {
    pub fn new(store: Arc<dyn DocumentStore>, patch_upsert: bool) -> Self {
        Self {
            tables: Repository::new(store),
            patch_upsert,
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.store(), state.config.patch_upsert)
    }

    pub async fn list(&self) -> AppResult<Vec<Table>> {
        self.tables
            .find_all()
            .await
            .map_err(|e| AppError::store_read(format!("Error occurred while listing tables: {e}")))
    }

    pub async fn get(&self, table_id: &str) -> AppResult<Table> {
        self.tables
            .find_by_id(table_id)
            .await?
            .ok_or_else(Table::not_found)
    }

    pub async fn create(&self, payload: TableCreate) -> AppResult<Table> {
        validate_payload(&payload)?;
        let now = now_utc();
        let table = Table {
            table_id: surface_id(),
            number_of_guests: payload.number_of_guests.unwrap_or_default(),
            table_number: payload.table_number.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.tables
            .insert(&table)
            .await
            .map_err(|e| AppError::store_write(format!("Table was not created: {e}")))?;

        tracing::info!(table_id = %table.table_id, table_number = table.table_number, "Table created");
        Ok(table)
    }

    pub async fn update(&self, table_id: &str, payload: TableUpdate) -> AppResult<Document> {
        validate_payload(&payload)?;
        let set = UpdateSet::new()
            .value("number_of_guests", payload.number_of_guests)?
            .value("table_number", payload.table_number)?;
        apply_patch(&self.tables, table_id, set, self.patch_upsert, now_utc()).await
    }

    pub async fn delete(&self, table_id: &str) -> AppResult<Table> {
        delete_checked(&self.tables, table_id).await
    }
}
