use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            pagination::{Pagination, PaginationData},
            AddToBasketButton, Page,
        },
        constant::{PRODUCTS_PER_PAGE, SITE_NAME},
        model::error::ApiError,
        router::Route,
    },
    model::product::{PaginatedProductsDto, ProductListItemDto},
};

#[cfg(feature = "web")]
use crate::client::api::catalog::get_products;

#[component]
pub fn Home() -> Element {
    let page = use_signal(|| 0u64);
    #[allow(unused_mut)]
    let mut products = use_signal(|| None::<Result<PaginatedProductsDto, ApiError>>);

    // Re-fetches whenever the page changes
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_products(page(), PRODUCTS_PER_PAGE).await });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                products.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        match products() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(data)) => rsx! {
                Page {
                    if data.products.is_empty() {
                        p { class: "opacity-70", "No products yet" }
                    }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-4",
                        for product in data.products.iter().cloned() {
                            ProductCard { key: "{product.id}", product }
                        }
                    }
                    Pagination {
                        page,
                        data: PaginationData {
                            page: data.page,
                            per_page: data.per_page,
                            total: data.total,
                            total_pages: data.total_pages,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: ProductListItemDto) -> Element {
    let price = format!("{:.2}", product.sale_price);

    rsx!(div {
        class: "card bg-base-200 shadow",
        if let Some(url) = product.photo_url.clone() {
            figure {
                img { class: "h-48 w-full object-cover", src: "{url}", alt: "{product.name}" }
            }
        }
        div {
            class: "card-body",
            Link {
                to: Route::ProductDetail { id: product.id },
                class: "card-title link link-hover",
                "{product.name}"
            }
            p { "{price}" }
            div {
                class: "card-actions justify-end",
                AddToBasketButton { product_id: product.id }
            }
        }
    })
}
