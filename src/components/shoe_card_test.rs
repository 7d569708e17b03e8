use super::*;

// =============================================================
// Flag classes per variant
// =============================================================

#[test]
fn on_sale_gets_sale_flag_class() {
    assert_eq!(flag_class(Variant::OnSale), Some("shoe-card__flag shoe-card__flag--sale"));
}

#[test]
fn new_release_gets_new_flag_class() {
    assert_eq!(flag_class(Variant::NewRelease), Some("shoe-card__flag shoe-card__flag--new"));
}

#[test]
fn default_variant_has_no_flag() {
    assert_eq!(flag_class(Variant::Default), None);
}

#[test]
fn flag_class_and_label_agree_on_presence() {
    for variant in [Variant::OnSale, Variant::NewRelease, Variant::Default] {
        assert_eq!(flag_class(variant).is_some(), variant.flag_label().is_some());
    }
}
