//! Screen-reader-only text.

use leptos::prelude::*;

/// Renders children invisibly while keeping them in the accessibility tree,
/// for labelling icon-only controls.
#[component]
pub fn VisuallyHidden(children: Children) -> impl IntoView {
    view! { <span class="visually-hidden">{children()}</span> }
}
