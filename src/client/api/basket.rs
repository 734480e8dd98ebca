use crate::{
    client::{
        api::helper::{get, parse_response, post, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        basket::{BasketDto, UpdateBasketProductDto},
        order::OrderDto,
    },
};

pub async fn get_basket() -> Result<BasketDto, ApiError> {
    let response = send_request(get("/api/basket")).await?;
    parse_response(response).await
}

/// Set a product's quantity in the basket, 0 removes it
///
/// Returns the basket snapshot after the change.
pub async fn update_product(product_id: i32, quantity: i32) -> Result<BasketDto, ApiError> {
    let url = format!("/api/basket/product/{}", product_id);
    let body = serialize_json(&UpdateBasketProductDto { quantity })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn checkout() -> Result<OrderDto, ApiError> {
    let response = send_request(post("/api/basket/checkout")).await?;
    parse_response(response).await
}
