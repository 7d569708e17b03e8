//! Home page: header plus the shoe listing grid.

use chrono::Utc;
use leptos::prelude::*;

use crate::catalog::data::sample_catalog;
use crate::components::header::Header;
use crate::components::shoe_card::ShoeCard;

/// Storefront landing page.
///
/// "Today" is read from the clock exactly once here and injected into every
/// card, so a whole render agrees on which shoes count as new.
#[component]
pub fn HomePage() -> impl IntoView {
    let today = Utc::now().date_naive();

    let grid = match sample_catalog() {
        Ok(products) => view! {
            <div class="shoe-grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ShoeCard product=product today=today/> })
                    .collect::<Vec<_>>()}
            </div>
        }
            .into_any(),
        Err(err) => view! {
            <p class="shoe-grid__error">{format!("Catalog unavailable: {err}")}</p>
        }
            .into_any(),
    };

    view! {
        <div class="home-page">
            <Header/>
            <main class="home-page__main">{grid}</main>
        </div>
    }
}
