//! Slide-in mobile navigation overlay.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use leptos::html;
use leptos::prelude::*;

use crate::components::icon::{Icon, IconId};
use crate::components::visually_hidden::VisuallyHidden;
use crate::util::motion::prefers_reduced_motion;

/// Delay before the first link's entrance animation starts, after the panel
/// begins swinging in.
pub const ENTRANCE_DELAY_MS: u32 = 200;

/// Additional delay per subsequent link.
pub const STAGGER_DELAY_MS: u32 = 75;

/// One entry in the menu's static link tables.
struct MenuLink {
    label: &'static str,
    href: &'static str,
}

const NAV_LINKS: &[MenuLink] = &[
    MenuLink { label: "Sale", href: "/sale" },
    MenuLink { label: "New\u{a0}Releases", href: "/new" },
    MenuLink { label: "Men", href: "/men" },
    MenuLink { label: "Women", href: "/women" },
    MenuLink { label: "Kids", href: "/kids" },
    MenuLink { label: "Collections", href: "/collections" },
];

const FOOTER_LINKS: &[MenuLink] = &[
    MenuLink { label: "Terms and Conditions", href: "/terms" },
    MenuLink { label: "Privacy Policy", href: "/privacy" },
    MenuLink { label: "Contact Us", href: "/contact" },
];

/// Entrance delay for the link at `index`, counted across both link tables.
fn entrance_delay_ms(index: usize) -> u32 {
    ENTRANCE_DELAY_MS + u32::try_from(index).unwrap_or(u32::MAX) * STAGGER_DELAY_MS
}

/// Inline style applying the staggered `animation-delay`. Collapses to zero
/// when the user prefers reduced motion.
fn stagger_style(index: usize, reduced_motion: bool) -> String {
    let delay = if reduced_motion { 0 } else { entrance_delay_ms(index) };
    format!("animation-delay: {delay}ms;")
}

/// Keys that dismiss the overlay.
fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Dismissible overlay hosting the mobile navigation panel.
///
/// Stateless: a pure function of `is_open` and `on_dismiss`. The backdrop
/// click, the close button, and the Escape key all invoke `on_dismiss`;
/// the owner decides what that means.
#[component]
pub fn MobileMenu(is_open: Signal<bool>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <MenuOverlay on_dismiss=on_dismiss/>
        </Show>
    }
}

/// The overlay itself; mounts fresh each time the menu opens.
///
/// Focus moves to the close button on mount so keyboard events dispatch
/// inside the overlay subtree; without this, Escape would fire on the menu
/// trigger back in the header and never reach the backdrop's listener.
#[component]
fn MenuOverlay(on_dismiss: Callback<()>) -> impl IntoView {
    let close_ref: NodeRef<html::Button> = NodeRef::new();

    Effect::new(move || {
        if let Some(btn) = close_ref.get() {
            let _ = btn.focus();
        }
    });

    view! {
        <div
            class="mobile-menu__backdrop"
            on:click=move |_| on_dismiss.run(())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_dismiss_key(&ev.key()) {
                    on_dismiss.run(());
                }
            }
        >
            <aside
                class="mobile-menu"
                aria-label="Menu"
                on:click=move |ev| ev.stop_propagation()
            >
                <button
                    class="mobile-menu__close"
                    node_ref=close_ref
                    on:click=move |_| on_dismiss.run(())
                >
                    <Icon id=IconId::Close/>
                    <VisuallyHidden>"Dismiss menu"</VisuallyHidden>
                </button>
                <div class="mobile-menu__filler"></div>
                <nav class="mobile-menu__nav">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <a
                                    class="mobile-menu__link"
                                    href=link.href
                                    style=stagger_style(i, prefers_reduced_motion())
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <footer class="mobile-menu__footer">
                    {FOOTER_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <a
                                    class="mobile-menu__sub-link"
                                    href=link.href
                                    style=stagger_style(NAV_LINKS.len() + i, prefers_reduced_motion())
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </footer>
            </aside>
        </div>
    }
}
