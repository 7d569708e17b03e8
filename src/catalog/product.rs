//! Product record, boundary validation, and display-variant classification.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::format::is_new_release;

/// One shoe in the catalog.
///
/// Prices are integer minor units (cents), so negative amounts are
/// unrepresentable. Construct through [`Product::new`] so the remaining
/// invariants are checked once at the boundary instead of being silently
/// rendered wrong later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Regular price in cents.
    pub price: u32,
    /// Sale price in cents; present only while the shoe is on sale.
    pub sale_price: Option<u32>,
    pub release_date: NaiveDate,
    pub num_of_colors: u32,
}

/// Validation failures for a [`Product`] supplied by a caller.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("product slug must not be empty")]
    EmptySlug,
    #[error("product name must not be empty")]
    EmptyName,
    #[error("sale price {sale} must be below regular price {regular}")]
    SaleNotBelowRegular { sale: u32, regular: u32 },
    #[error("release date {year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidReleaseDate { year: i32, month: u32, day: u32 },
}

impl Product {
    /// Validate and build a product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError`] if the slug or name is empty, or if a sale
    /// price is present but not strictly below the regular price.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: u32,
        sale_price: Option<u32>,
        release_date: NaiveDate,
        num_of_colors: u32,
    ) -> Result<Self, ProductError> {
        let slug = slug.into();
        let name = name.into();
        if slug.trim().is_empty() {
            return Err(ProductError::EmptySlug);
        }
        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        if let Some(sale) = sale_price {
            if sale >= price {
                return Err(ProductError::SaleNotBelowRegular { sale, regular: price });
            }
        }
        Ok(Self {
            slug,
            name,
            image_src: image_src.into(),
            price,
            sale_price,
            release_date,
            num_of_colors,
        })
    }

    /// Route for this product's detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}

/// Mutually exclusive display modes for a shoe card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Sale price present. Wins over [`Variant::NewRelease`] when a shoe is
    /// both on sale and recently released.
    OnSale,
    /// Released within the trailing new-release window.
    NewRelease,
    #[default]
    Default,
}

impl Variant {
    /// Classify a product for display relative to `today`.
    ///
    /// Precedence, highest first: on-sale, new-release, default.
    pub fn classify(product: &Product, today: NaiveDate) -> Self {
        if product.sale_price.is_some() {
            Self::OnSale
        } else if is_new_release(product.release_date, today) {
            Self::NewRelease
        } else {
            Self::Default
        }
    }

    /// Corner-flag text for the variant, if it carries one.
    pub fn flag_label(self) -> Option<&'static str> {
        match self {
            Self::OnSale => Some("Sale"),
            Self::NewRelease => Some("Just released!"),
            Self::Default => None,
        }
    }
}
