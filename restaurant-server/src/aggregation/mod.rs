//! Read aggregations
//!
//! Multi-stage pipelines that join, paginate and rank across collections:
//!
//! - [`pagination`] - food listing page plus total count
//! - [`ranking`] - most ordered food, top 5
//! - [`invoice_view`] - order item summaries and the assembled invoice view

pub mod invoice_view;
pub mod pagination;
pub mod ranking;

pub use invoice_view::{assemble_invoice_view, items_by_order};
pub use pagination::paginate_food;
pub use ranking::{RANKING_LIMIT, most_ordered_food};
