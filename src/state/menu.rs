//! Open/closed state for the mobile navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Lifecycle of the slide-in mobile menu.
///
/// Owned by the header as an `RwSignal<MenuState>` for the lifetime of one
/// mounted header; starts closed and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Transition taken when the menu trigger is activated.
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    /// Transition taken when the overlay is dismissed (close button,
    /// backdrop click, or Escape). A no-op when already closed.
    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
