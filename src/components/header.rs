//! Page header: branding, desktop nav, and the mobile menu trigger.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_meta::Style;

use crate::components::icon::{Icon, IconId};
use crate::components::logo::Logo;
use crate::components::mobile_menu::MobileMenu;
use crate::components::visually_hidden::VisuallyHidden;
use crate::state::menu::MenuState;
use crate::theme::{Breakpoints, Theme};

struct NavEntry {
    label: &'static str,
    href: &'static str,
}

const DESKTOP_NAV: &[NavEntry] = &[
    NavEntry { label: "Sale", href: "/sale" },
    NavEntry { label: "New\u{a0}Releases", href: "/new" },
    NavEntry { label: "Men", href: "/men" },
    NavEntry { label: "Women", href: "/women" },
    NavEntry { label: "Kids", href: "/kids" },
    NavEntry { label: "Collections", href: "/collections" },
];

/// Responsive layout rules for the header, built from the theme's
/// breakpoints: tablet-and-smaller swaps the desktop nav for the mobile
/// actions, phone-and-smaller tightens the spacing.
fn responsive_css(breakpoints: Breakpoints) -> String {
    format!(
        "@media {tablet} {{\
           .site-header__main {{ justify-content: space-between; align-items: center; \
             border-top: 4px solid var(--color-gray-900); }}\
           .site-header__logo-wrapper {{ flex: revert; }}\
           .site-header__nav {{ display: none; }}\
           .site-header__filler {{ display: none; }}\
           .site-header__mobile-actions {{ display: flex; gap: 32px; }}\
         }}\
         @media {phone} {{\
           .site-header__main {{ padding-left: 16px; padding-right: 16px; }}\
           .site-header__mobile-actions {{ gap: 16px; }}\
         }}",
        tablet = breakpoints.tablet_and_smaller(),
        phone = breakpoints.phone_and_smaller(),
    )
}

/// Site header.
///
/// Owns the mobile menu's open/closed state and hands [`MobileMenu`] a
/// derived `is_open` signal plus the dismiss callback. Reads the [`Theme`]
/// from context and emits its own responsive rules from the breakpoint
/// values, so viewport behavior follows the configuration rather than
/// numbers duplicated in the stylesheet; nothing here branches on viewport
/// width at runtime.
#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<Theme>();
    let menu = RwSignal::new(MenuState::default());

    let open_menu = move |_| {
        menu.update(MenuState::open);
        #[cfg(feature = "hydrate")]
        log::debug!("mobile menu opened");
    };

    let on_dismiss = Callback::new(move |()| {
        menu.update(MenuState::dismiss);
        #[cfg(feature = "hydrate")]
        log::debug!("mobile menu dismissed");
    });

    view! {
        <header class="site-header">
            <Style>{responsive_css(theme.breakpoints)}</Style>
            <div class="site-header__main">
                <div class="site-header__logo-wrapper">
                    <Logo/>
                </div>
                <nav class="site-header__nav">
                    {DESKTOP_NAV
                        .iter()
                        .map(|entry| {
                            view! {
                                <a class="site-header__nav-link" href=entry.href>
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="site-header__mobile-actions">
                    <button class="site-header__action">
                        <Icon id=IconId::ShoppingBag/>
                        <VisuallyHidden>"Open cart"</VisuallyHidden>
                    </button>
                    <button class="site-header__action">
                        <Icon id=IconId::Search/>
                        <VisuallyHidden>"Search"</VisuallyHidden>
                    </button>
                    <button class="site-header__action" on:click=open_menu>
                        <Icon id=IconId::Menu/>
                        <VisuallyHidden>"Open menu"</VisuallyHidden>
                    </button>
                </div>
                <div class="site-header__filler"></div>
            </div>

            <MobileMenu
                is_open=Signal::derive(move || menu.get().is_open())
                on_dismiss=on_dismiss
            />
        </header>
    }
}
