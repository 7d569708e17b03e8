//! Product catalog domain types and pure helpers.
//!
//! DESIGN
//! ======
//! Everything here is renderer-agnostic: plain data, validation at
//! construction, and pure formatting/classification functions. Components
//! consume these so no pricing or date logic lives inside view markup.

pub mod data;
pub mod format;
pub mod product;

pub use format::{format_price, is_new_release, pluralize, NEW_RELEASE_WINDOW_DAYS};
pub use product::{Product, ProductError, Variant};
