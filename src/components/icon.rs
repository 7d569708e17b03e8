//! Inline SVG icons for the header and menu controls.

use leptos::prelude::*;

/// Icons available to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconId {
    ShoppingBag,
    Search,
    Menu,
    Close,
}

/// A 24x24 stroked line icon.
#[component]
pub fn Icon(id: IconId) -> impl IntoView {
    view! {
        <svg
            class="icon"
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {match id {
                IconId::ShoppingBag => view! {
                    <path d="M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z"></path>
                    <line x1="3" y1="6" x2="21" y2="6"></line>
                    <path d="M16 10a4 4 0 0 1-8 0"></path>
                }
                    .into_any(),
                IconId::Search => view! {
                    <circle cx="11" cy="11" r="8"></circle>
                    <line x1="21" y1="21" x2="16.65" y2="16.65"></line>
                }
                    .into_any(),
                IconId::Menu => view! {
                    <line x1="3" y1="6" x2="21" y2="6"></line>
                    <line x1="3" y1="12" x2="21" y2="12"></line>
                    <line x1="3" y1="18" x2="21" y2="18"></line>
                }
                    .into_any(),
                IconId::Close => view! {
                    <line x1="18" y1="6" x2="6" y2="18"></line>
                    <line x1="6" y1="6" x2="18" y2="18"></line>
                }
                    .into_any(),
            }}
        </svg>
    }
}
