//! Cross-entity consistency
//!
//! Everything that keeps collections coherent without store-side
//! constraints:
//!
//! - [`reference`] - foreign keys must resolve before a dependent write
//! - [`patch`] - sparse patches become minimal field sets stamped with `updated_at`
//! - [`cascade`] - checked deletes and the menu → food cascade

pub mod cascade;
pub mod patch;
pub mod reference;

pub use cascade::{delete_checked, delete_menu};
pub use patch::{UpdateSet, apply_patch, check_window};
pub use reference::ReferenceChecker;
