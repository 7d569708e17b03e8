use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_weights() {
    let t = Theme::default();
    assert_eq!(t.weights.normal, 500);
    assert_eq!(t.weights.medium, 600);
    assert_eq!(t.weights.bold, 800);
}

#[test]
fn default_breakpoints() {
    let t = Theme::default();
    assert_eq!(t.breakpoints.phone, 600);
    assert_eq!(t.breakpoints.tablet, 950);
}

// =============================================================
// Media queries
// =============================================================

#[test]
fn tablet_query_in_rem() {
    let t = Theme::default();
    assert_eq!(t.breakpoints.tablet_and_smaller(), "(max-width: 59.375rem)");
}

#[test]
fn phone_query_in_rem() {
    let t = Theme::default();
    assert_eq!(t.breakpoints.phone_and_smaller(), "(max-width: 37.5rem)");
}

// =============================================================
// CSS custom properties
// =============================================================

#[test]
fn css_vars_exposes_weights() {
    let vars = Theme::default().css_vars();
    assert!(vars.contains("--weight-normal: 500;"));
    assert!(vars.contains("--weight-medium: 600;"));
    assert!(vars.contains("--weight-bold: 800;"));
}
