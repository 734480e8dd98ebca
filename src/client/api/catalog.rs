use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::product::{PaginatedProductsDto, ProductDto},
};

pub async fn get_products(page: u64, entries: u64) -> Result<PaginatedProductsDto, ApiError> {
    let url = format!("/api/products?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_product(id: i32) -> Result<ProductDto, ApiError> {
    let url = format!("/api/products/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
