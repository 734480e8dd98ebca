use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::order::{lines_quantity, AdminOrderDto},
};

#[cfg(feature = "web")]
use crate::client::api::moderator::get_orders;

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// All orders, open baskets included, newest first.
#[component]
pub fn ModeratorOrders() -> Element {
    #[allow(unused_mut)]
    let mut orders = use_signal(|| None::<Result<Vec<AdminOrderDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_orders);

        use_effect(move || {
            if let Some(result) = &*future.read() {
                orders.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Orders | {SITE_NAME}" }
        match orders() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(orders)) => rsx! {
                Page {
                    h1 { class: "text-2xl font-bold mb-4", "Orders" }
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Customer" }
                                    th { "Created" }
                                    th { "Status" }
                                    th { "Items" }
                                    th { "Total" }
                                }
                            }
                            tbody {
                                for order in orders {
                                    OrderRow { key: "{order.id}", order }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(order: AdminOrderDto) -> Element {
    let created = format_time(order.created_at);
    let status = match order.placed_at {
        Some(placed_at) => format!("Placed {}", format_time(placed_at)),
        None => "Basket".to_string(),
    };
    let items = lines_quantity(&order.ordered_products);
    let total = format!("{:.2}", order.total);

    rsx!(tr {
        td { "{order.id}" }
        td { "{order.user_name}" }
        td { "{created}" }
        td { "{status}" }
        td { "{items}" }
        td { "{total}" }
    })
}
