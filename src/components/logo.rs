//! Site branding wordmark.

use leptos::prelude::*;

/// Wordmark linking back to the home page.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <a class="logo" href="/">
            "Sole&Ankle"
        </a>
    }
}
