//! Presentational components for the storefront.

pub mod header;
pub mod icon;
pub mod logo;
pub mod mobile_menu;
pub mod shoe_card;
pub mod visually_hidden;
