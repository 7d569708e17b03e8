use chrono::{Days, NaiveDate};

use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn shoe(sale_price: Option<u32>, release_date: NaiveDate) -> Product {
    Product::new(
        "lunar-glide",
        "Lunar Glide Runner",
        "/assets/lunar-glide.jpg",
        12999,
        sale_price,
        release_date,
        4,
    )
    .unwrap()
}

// =============================================================
// Validation
// =============================================================

#[test]
fn new_accepts_valid_product() {
    let p = shoe(Some(8999), today());
    assert_eq!(p.slug, "lunar-glide");
    assert_eq!(p.sale_price, Some(8999));
}

#[test]
fn new_rejects_empty_slug() {
    let err = Product::new("", "Name", "/a.jpg", 100, None, today(), 1).unwrap_err();
    assert_eq!(err, ProductError::EmptySlug);
}

#[test]
fn new_rejects_blank_name() {
    let err = Product::new("slug", "   ", "/a.jpg", 100, None, today(), 1).unwrap_err();
    assert_eq!(err, ProductError::EmptyName);
}

#[test]
fn new_rejects_sale_price_above_regular() {
    let err = Product::new("slug", "Name", "/a.jpg", 100, Some(200), today(), 1).unwrap_err();
    assert_eq!(err, ProductError::SaleNotBelowRegular { sale: 200, regular: 100 });
}

#[test]
fn new_rejects_sale_price_equal_to_regular() {
    let err = Product::new("slug", "Name", "/a.jpg", 100, Some(100), today(), 1).unwrap_err();
    assert_eq!(err, ProductError::SaleNotBelowRegular { sale: 100, regular: 100 });
}

#[test]
fn href_uses_slug() {
    assert_eq!(shoe(None, today()).href(), "/shoe/lunar-glide");
}

#[test]
fn product_round_trips_through_serde() {
    let p = shoe(Some(9999), today());
    let json = serde_json::to_string(&p).unwrap();
    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

// =============================================================
// Variant precedence
// =============================================================

#[test]
fn sale_price_yields_on_sale() {
    let old = today().checked_sub_days(Days::new(400)).unwrap();
    assert_eq!(Variant::classify(&shoe(Some(9999), old), today()), Variant::OnSale);
}

#[test]
fn recent_release_yields_new_release() {
    let recent = today().checked_sub_days(Days::new(10)).unwrap();
    assert_eq!(Variant::classify(&shoe(None, recent), today()), Variant::NewRelease);
}

#[test]
fn on_sale_beats_new_release() {
    // Both conditions hold; sale wins.
    let recent = today().checked_sub_days(Days::new(10)).unwrap();
    assert_eq!(Variant::classify(&shoe(Some(9999), recent), today()), Variant::OnSale);
}

#[test]
fn old_full_price_shoe_is_default() {
    let old = today().checked_sub_days(Days::new(400)).unwrap();
    assert_eq!(Variant::classify(&shoe(None, old), today()), Variant::Default);
}

#[test]
fn window_boundary_matches_is_new_release() {
    let boundary = today().checked_sub_days(Days::new(31)).unwrap();
    assert_eq!(Variant::classify(&shoe(None, boundary), today()), Variant::Default);
}

// =============================================================
// Flag labels
// =============================================================

#[test]
fn flag_labels_per_variant() {
    assert_eq!(Variant::OnSale.flag_label(), Some("Sale"));
    assert_eq!(Variant::NewRelease.flag_label(), Some("Just released!"));
    assert_eq!(Variant::Default.flag_label(), None);
}

#[test]
fn variant_default_is_default() {
    assert_eq!(Variant::default(), Variant::Default);
}
