//! Demo shoe inventory used by the home page until a real catalog source
//! is wired in.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use chrono::NaiveDate;

use super::product::{Product, ProductError};

struct Entry {
    slug: &'static str,
    name: &'static str,
    image: &'static str,
    price: u32,
    sale_price: Option<u32>,
    released: (i32, u32, u32),
    colors: u32,
}

const ENTRIES: &[Entry] = &[
    Entry {
        slug: "strata-trail-runner",
        name: "Strata Trail Runner",
        image: "/assets/shoes/strata-trail-runner.jpg",
        price: 14500,
        sale_price: None,
        released: (2026, 8, 12),
        colors: 4,
    },
    Entry {
        slug: "cloudrise-knit",
        name: "Cloudrise Knit",
        image: "/assets/shoes/cloudrise-knit.jpg",
        price: 12999,
        sale_price: Some(9999),
        released: (2026, 7, 30),
        colors: 2,
    },
    Entry {
        slug: "court-classic-low",
        name: "Court Classic Low",
        image: "/assets/shoes/court-classic-low.jpg",
        price: 8800,
        sale_price: None,
        released: (2025, 11, 2),
        colors: 1,
    },
    Entry {
        slug: "ember-street-mid",
        name: "Ember Street Mid",
        image: "/assets/shoes/ember-street-mid.jpg",
        price: 16000,
        sale_price: Some(12000),
        released: (2025, 9, 18),
        colors: 3,
    },
    Entry {
        slug: "tidal-slide",
        name: "Tidal Slide",
        image: "/assets/shoes/tidal-slide.jpg",
        price: 4500,
        sale_price: None,
        released: (2026, 8, 25),
        colors: 5,
    },
    Entry {
        slug: "summit-hiker-gtx",
        name: "Summit Hiker GTX",
        image: "/assets/shoes/summit-hiker-gtx.jpg",
        price: 19900,
        sale_price: None,
        released: (2025, 3, 7),
        colors: 2,
    },
];

/// Build the demo catalog.
///
/// # Errors
///
/// Returns the first [`ProductError`] if any entry violates the product
/// invariants; the page surfaces this instead of rendering a broken card.
pub fn sample_catalog() -> Result<Vec<Product>, ProductError> {
    ENTRIES
        .iter()
        .map(|e| {
            let (year, month, day) = e.released;
            let release_date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(ProductError::InvalidReleaseDate { year, month, day })?;
            Product::new(e.slug, e.name, e.image, e.price, e.sale_price, release_date, e.colors)
        })
        .collect()
}
