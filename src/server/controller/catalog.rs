use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        product::{PaginatedProductsDto, ProductDto},
    },
    server::{
        error::AppError, model::product::GetProductsParam, service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    12
}

/// Get a page of products.
///
/// Products are ordered by name and carry their main photo URL. Public.
///
/// # Returns
/// - `200 OK` - Paginated list of products
/// - `400 Bad Request` - `entries` is zero or above 100, or `page` is out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = CATALOG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 12)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved products", body = PaginatedProductsDto),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .get_paginated(GetProductsParam {
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto())))
}

/// Get a product with its photos.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}
