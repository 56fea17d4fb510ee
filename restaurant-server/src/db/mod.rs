//! Database Module
//!
//! Document store gateway, its backends and the typed repositories on top.

pub mod memory;
pub mod pipeline;
pub mod repository;
pub mod store;
#[cfg(feature = "surreal")]
pub mod surreal;

use std::sync::Arc;

pub use memory::MemoryStore;
pub use pipeline::{Accumulator, GroupKey, Pipeline, Stage};
pub use store::{Document, DocumentStore, Filter, StoreError, StoreResult, UpdateOutcome};
#[cfg(feature = "surreal")]
pub use surreal::SurrealStore;

use crate::core::Config;
use crate::core::config::StoreBackend;

/// Collection names
pub mod collections {
    pub const MENU: &str = "menu";
    pub const FOOD: &str = "food";
    pub const TABLE: &str = "table";
    pub const ORDER: &str = "order";
    pub const ORDER_ITEM: &str = "order_item";
    pub const INVOICE: &str = "invoice";
}

/// Open the configured store backend
pub async fn open_store(config: &Config) -> StoreResult<Arc<dyn DocumentStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-process document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        #[cfg(feature = "surreal")]
        StoreBackend::Surreal => {
            let store = SurrealStore::open(
                &config.database_path,
                &config.database_namespace,
                &config.database_name,
            )
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "surreal"))]
        StoreBackend::Surreal => Err(StoreError::Connection(
            "STORE_BACKEND=surreal requires building with the `surreal` feature".into(),
        )),
    }
}
