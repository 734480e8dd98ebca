use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            AddToBasketButton, Markdown, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::product::ProductDto,
};

#[cfg(feature = "web")]
use crate::client::api::catalog::get_product;

#[component]
pub fn ProductDetail(id: i32) -> Element {
    #[allow(unused_mut)]
    let mut product = use_signal(|| None::<Result<ProductDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|id| async move { get_product(id).await }));

        use_effect(move || {
            if let Some(result) = &*future.read() {
                product.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        match product() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(product)) => rsx! {
                Title { "{product.name} | {SITE_NAME}" }
                ProductView { product }
            }
        }
    }
}

#[component]
fn ProductView(product: ProductDto) -> Element {
    let mut selected_url = use_signal(|| product.photo_url.clone());
    let price = format!("{:.2}", product.sale_price);

    rsx!(Page {
        class: "flex flex-col md:flex-row gap-8",
        div {
            class: "flex flex-col gap-2 md:w-1/2",
            if let Some(url) = selected_url() {
                img { class: "w-full rounded object-contain max-h-96", src: "{url}", alt: "{product.name}" }
            }
            div {
                class: "flex gap-2 flex-wrap",
                for photo in product.photos.iter().cloned() {
                    img {
                        key: "{photo.id}",
                        class: if photo.is_main { "w-16 h-16 object-cover rounded border-2 border-primary cursor-pointer" } else { "w-16 h-16 object-cover rounded cursor-pointer" },
                        src: "{photo.url}",
                        onclick: move |_| selected_url.set(Some(photo.url.clone())),
                    }
                }
            }
        }
        div {
            class: "flex flex-col gap-4 md:w-1/2",
            h1 { class: "text-2xl font-bold", "{product.name}" }
            p { class: "text-xl", "{price}" }
            if let Some(description) = product.description.clone() {
                Markdown { source: description }
            }
            div {
                AddToBasketButton { product_id: product.id }
            }
        }
    })
}
