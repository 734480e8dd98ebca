use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        basket::{BasketDto, UpdateBasketProductDto},
        order::OrderDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::order::{Order, SetBasketQuantityParam},
        service::basket::BasketService,
        state::AppState,
    },
};

/// Tag for grouping basket endpoints in OpenAPI documentation
pub static BASKET_TAG: &str = "basket";

/// Get the current user's basket.
///
/// Returns an empty basket when the user has none.
///
/// # Access Control
/// Requires user to be logged in
#[utoipa::path(
    get,
    path = "/api/basket",
    tag = BASKET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved basket", body = BasketDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_basket(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let basket = BasketService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(Order::into_basket_dto(basket))))
}

/// Set the quantity of a product in the current user's basket.
///
/// A quantity of 0 removes the product. The basket is created when absent.
///
/// # Access Control
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK` - The basket after the change
/// - `400 Bad Request` - Quantity out of range or the write failed
/// - `404 Not Found` - No product with that id
#[utoipa::path(
    put,
    path = "/api/basket/product/{product_id}",
    tag = BASKET_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateBasketProductDto,
    responses(
        (status = 200, description = "Successfully updated basket", body = BasketDto),
        (status = 400, description = "Invalid quantity or failed to update basket", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_basket_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateBasketProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let basket = BasketService::new(&state.db)
        .set_quantity(SetBasketQuantityParam {
            user_id: user.id,
            product_id,
            quantity: payload.quantity,
        })
        .await?;

    Ok((StatusCode::OK, Json(Order::into_basket_dto(basket))))
}

/// Place the current user's basket as an order.
#[utoipa::path(
    post,
    path = "/api/basket/checkout",
    tag = BASKET_TAG,
    responses(
        (status = 200, description = "Successfully placed order", body = OrderDto),
        (status = 400, description = "Basket is empty or the order could not be placed", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = BasketService::new(&state.db).checkout(user.id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
