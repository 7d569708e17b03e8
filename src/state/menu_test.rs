use super::*;

// =============================================================
// MenuState transitions
// =============================================================

#[test]
fn menu_starts_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn trigger_opens_menu() {
    let mut menu = MenuState::default();
    menu.open();
    assert!(menu.is_open());
}

#[test]
fn dismiss_closes_open_menu() {
    let mut menu = MenuState::Open;
    menu.dismiss();
    assert_eq!(menu, MenuState::Closed);
}

#[test]
fn dismiss_while_closed_is_a_no_op() {
    let mut menu = MenuState::Closed;
    menu.dismiss();
    assert_eq!(menu, MenuState::Closed);
}

#[test]
fn open_while_open_is_a_no_op() {
    let mut menu = MenuState::Open;
    menu.open();
    assert_eq!(menu, MenuState::Open);
}
