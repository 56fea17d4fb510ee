//! Data models
//!
//! Persisted entity shapes plus their create/update payloads. Every
//! persisted entity carries its surface identifier (`<entity>_id`),
//! `created_at` and `updated_at`; the store's internal identifier never
//! leaves the gateway.

pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod views;

// Re-exports
pub use dining_table::*;
pub use food::*;
pub use invoice::*;
pub use menu::*;
pub use order::*;
pub use order_item::*;
pub use views::*;
