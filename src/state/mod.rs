//! Client-side UI state.
//!
//! Each piece of state is owned by the component highest in the tree that
//! needs it and handed down as a signal plus mutator callbacks, so data
//! flows one way and nothing is global.

pub mod menu;
