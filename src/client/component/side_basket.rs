//! Basket list shown beside every page while a user is logged in.
//!
//! The component reads the shared basket store, so it re-renders on every snapshot the
//! server returns; the subscription is dropped together with the component.

use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::basket::BasketState},
    model::{basket::QUANTITY_CHOICES, order::OrderedProductDto},
};

#[cfg(feature = "web")]
use crate::client::api::basket::{checkout, update_product};

/// Formats an amount with two decimals.
pub fn format_price(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Options for a line's quantity selector.
///
/// Covers 0 to 9; a larger current quantity is appended so the selector can show it.
pub fn quantity_options(current: i32) -> Vec<i32> {
    let mut options: Vec<i32> = QUANTITY_CHOICES.collect();
    if !options.contains(&current) {
        options.push(current);
    }
    options
}

#[component]
pub fn SideBasket() -> Element {
    let basket_store = use_context::<Store<BasketState>>();
    let mut error = use_signal(|| None::<String>);
    let mut placed_order = use_signal(|| None::<i32>);
    let mut checking_out = use_signal(|| false);

    let basket = basket_store.read().basket.clone();
    let total_cost = format_price(basket.total_cost());
    let total_quantity = basket.total_quantity();
    let is_empty = basket.is_empty();

    rsx!(aside {
        class: "lg:w-96 lg:pt-24 p-4 bg-base-100 border-l border-base-300",
        h2 { class: "text-lg font-bold mb-2", "Basket" }

        if let Some(message) = error() {
            div {
                class: "alert alert-error mb-2",
                span { "{message}" }
            }
        }
        if let Some(order_id) = placed_order() {
            div {
                class: "alert alert-success mb-2",
                span { "Order #{order_id} placed" }
            }
        }

        if is_empty {
            p { class: "opacity-70", "Your basket is empty" }
        } else {
            table {
                class: "table table-sm",
                thead {
                    tr {
                        th { "Photo" }
                        th { "Name" }
                        th { "Quantity" }
                        th { "Price" }
                    }
                }
                tbody {
                    for line in basket.ordered_products.iter().cloned() {
                        BasketRow {
                            key: "{line.product_id}",
                            line,
                            error,
                        }
                    }
                }
            }
            div {
                class: "flex justify-between mt-2",
                span { "Items: {total_quantity}" }
                span { class: "font-semibold", "Total: {total_cost}" }
            }
        }

        button {
            class: "btn btn-primary w-full mt-4",
            disabled: is_empty || checking_out(),
            onclick: move |_| {
                checking_out.set(true);
                error.set(None);

                #[cfg(feature = "web")]
                {
                    let mut basket_store = basket_store;
                    spawn(async move {
                        match checkout().await {
                            Ok(order) => {
                                placed_order.set(Some(order.id));
                                basket_store.write().clear();
                            }
                            Err(err) => error.set(Some(err.message)),
                        }
                        checking_out.set(false);
                    });
                }
            },
            "Checkout"
        }
    })
}

#[component]
fn BasketRow(line: OrderedProductDto, error: Signal<Option<String>>) -> Element {
    let basket_store = use_context::<Store<BasketState>>();
    let product_id = line.product_id;
    let options = quantity_options(line.quantity);
    let line_total = format_price(line.line_total());

    rsx!(tr {
        td {
            if let Some(url) = line.photo_url.clone() {
                img { class: "w-10 h-10 object-cover rounded", src: "{url}" }
            }
        }
        td {
            Link {
                to: Route::ProductDetail { id: product_id },
                class: "link link-hover",
                "{line.product_name}"
            }
        }
        td {
            select {
                class: "select select-bordered select-xs",
                value: "{line.quantity}",
                onchange: move |evt| {
                    let Ok(quantity) = evt.value().parse::<i32>() else {
                        return;
                    };
                    error.set(None);

                    #[cfg(feature = "web")]
                    {
                        let mut basket_store = basket_store;
                        spawn(async move {
                            match update_product(product_id, quantity).await {
                                Ok(basket) => basket_store.write().replace(basket),
                                Err(err) => error.set(Some(err.message)),
                            }
                        });
                    }
                    #[cfg(not(feature = "web"))]
                    let _ = (quantity, basket_store);
                },
                for choice in options {
                    option {
                        value: "{choice}",
                        selected: choice == line.quantity,
                        "{choice}"
                    }
                }
            }
        }
        td { "{line_total}" }
    })
}
