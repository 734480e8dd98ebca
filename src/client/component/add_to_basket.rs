use dioxus::prelude::*;

use crate::{
    client::{
        router::Route,
        store::{basket::BasketState, user::UserState},
    },
    model::basket::MAX_LINE_QUANTITY,
};

#[cfg(feature = "web")]
use crate::client::api::basket::update_product;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Adds one unit of the product to the basket, or links to the login page.
#[component]
pub fn AddToBasketButton(product_id: i32) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let basket_store = use_context::<Store<BasketState>>();
    let mut pending = use_signal(|| false);

    if user_store.read().user.is_none() {
        return rsx!(Link {
            to: Route::Login {},
            class: "btn btn-sm btn-outline",
            "Login to buy"
        });
    }

    let quantity = basket_store.read().basket.quantity_of(product_id);
    let at_limit = quantity >= MAX_LINE_QUANTITY;

    rsx!(button {
        class: "btn btn-sm btn-primary",
        disabled: pending() || at_limit,
        onclick: move |_| {
            pending.set(true);

            #[cfg(feature = "web")]
            {
                let mut basket_store = basket_store;
                spawn(async move {
                    match update_product(product_id, quantity + 1).await {
                        Ok(basket) => basket_store.write().replace(basket),
                        Err(err) => tracing::error!("Failed to add product to basket: {}", err),
                    }
                    pending.set(false);
                });
            }
        },
        if quantity > 0 {
            "Add another ({quantity} in basket)"
        } else {
            "Add to basket"
        }
    })
}
