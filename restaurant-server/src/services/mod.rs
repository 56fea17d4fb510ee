//! Entity services
//!
//! Write and read flows per entity: validate → resolve references → build the
//! insert or patch → store. Handlers stay thin and call into these.

pub mod food_service;
pub mod invoice_service;
pub mod menu_service;
pub mod order_item_service;
pub mod order_service;
pub mod table_service;

pub use food_service::FoodService;
pub use invoice_service::InvoiceService;
pub use menu_service::MenuService;
pub use order_item_service::OrderItemService;
pub use order_service::OrderService;
pub use table_service::TableService;
