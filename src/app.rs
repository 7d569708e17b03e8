//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::pages::home::HomePage;
use crate::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the [`Theme`] to every descendant and sets up routing. The
/// theme's values also land on the root element as CSS custom properties so
/// the stylesheet renders with the same numbers the components see.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = Theme::default();
    provide_context(theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-ui.css"/>
        <Title text="Sole&Ankle"/>

        <div class="app-root" style=theme.css_vars()>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </div>
    }
}
