//! Product summary card for shoe listings.

#[cfg(test)]
#[path = "shoe_card_test.rs"]
mod shoe_card_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::catalog::{format_price, pluralize, Product, Variant};

/// CSS class for the corner flag, when the variant carries one.
fn flag_class(variant: Variant) -> Option<&'static str> {
    match variant {
        Variant::OnSale => Some("shoe-card__flag shoe-card__flag--sale"),
        Variant::NewRelease => Some("shoe-card__flag shoe-card__flag--new"),
        Variant::Default => None,
    }
}

/// A clickable card linking to the shoe's detail page.
///
/// The display variant is classified once from the product and the injected
/// `today`, then rendered by exhaustive match so sale/new-release precedence
/// lives in one place ([`Variant::classify`]) rather than in the markup.
#[component]
pub fn ShoeCard(product: Product, today: NaiveDate) -> impl IntoView {
    let variant = Variant::classify(&product, today);
    let on_sale = variant == Variant::OnSale;

    let flag = flag_class(variant).zip(variant.flag_label()).map(|(class, label)| {
        view! { <div class=class>{label}</div> }
    });

    let sale_price = product
        .sale_price
        .filter(|_| on_sale)
        .map(|sale| view! { <span class="shoe-card__sale-price">{format_price(sale)}</span> });

    view! {
        <a class="shoe-card" href=product.href()>
            <article>
                <div class="shoe-card__image-wrapper">
                    <div class="shoe-card__zoom">
                        <img class="shoe-card__image" alt="" src=product.image_src.clone()/>
                    </div>
                    {flag}
                </div>
                <div class="shoe-card__row">
                    <h3 class="shoe-card__name">{product.name.clone()}</h3>
                    <span class="shoe-card__price" class:shoe-card__price--struck=on_sale>
                        {format_price(product.price)}
                    </span>
                </div>
                <div class="shoe-card__row">
                    <p class="shoe-card__colors">{pluralize("Color", product.num_of_colors)}</p>
                    {sale_price}
                </div>
            </article>
        </a>
    }
}
