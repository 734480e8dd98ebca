use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        order::AdminOrderDto,
        product::{CreateProductDto, ProductDto, ProductPhotoDto, UpdateProductDto},
    },
    server::{
        error::{photo::PhotoStorageError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::product::{CreateProductParam, UpdateProductParam},
        service::{order::OrderService, photo::PhotoService, product::ProductService},
        state::AppState,
    },
};

/// Tag for grouping moderator endpoints in OpenAPI documentation
pub static MODERATOR_TAG: &str = "moderator";

/// Multipart form field carrying the uploaded photo.
const PHOTO_FIELD: &str = "file";

/// Multipart body of a photo upload.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PhotoUploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Get all orders.
///
/// Returns every order, open baskets included, newest first.
///
/// # Access Control
/// - `Moderator` - Only moderators can view orders
///
/// # Returns
/// - `200 OK` - All orders
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User is not a moderator
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/moderator/orders",
    tag = MODERATOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved orders", body = Vec<AdminOrderDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let orders = OrderService::new(&state.db).get_all().await?;

    let orders: Vec<AdminOrderDto> = orders.into_iter().map(|o| o.into_admin_dto()).collect();

    Ok((StatusCode::OK, Json(orders)))
}

/// Get an order by id.
///
/// # Access Control
/// - `Moderator` - Only moderators can view orders
///
/// # Returns
/// - `200 OK` - The order with its lines
/// - `404 Not Found` - No order with that id
#[utoipa::path(
    get,
    path = "/api/moderator/order/{id}",
    tag = MODERATOR_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = AdminOrderDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let order = OrderService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(order.into_admin_dto())))
}

/// Get a product by id, including all of its photos.
#[utoipa::path(
    get,
    path = "/api/moderator/product/{id}",
    tag = MODERATOR_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let product = ProductService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Create a new product.
///
/// # Access Control
/// - `Moderator` - Only moderators can create products
///
/// # Returns
/// - `201 Created` - The created product, `Location` pointing at it
/// - `400 Bad Request` - Invalid fields, name taken, or the insert failed
#[utoipa::path(
    post,
    path = "/api/moderator/product",
    tag = MODERATOR_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Invalid product data or product name taken", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let product = ProductService::new(&state.db)
        .create(CreateProductParam::from_dto(payload))
        .await?;

    let location = format!("/api/moderator/product/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product.into_dto()),
    ))
}

/// Update a product's name, description and price.
///
/// The product id is taken from the path.
#[utoipa::path(
    put,
    path = "/api/moderator/product/{id}",
    tag = MODERATOR_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 204, description = "Successfully updated product"),
        (status = 400, description = "Invalid product data or product name taken", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    ProductService::new(&state.db)
        .update(UpdateProductParam::from_dto(id, payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product and its photos.
///
/// Fails with 400 when the product is part of an order.
#[utoipa::path(
    delete,
    path = "/api/moderator/product/{id}",
    tag = MODERATOR_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted product"),
        (status = 400, description = "Failed to delete product", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    ProductService::new(&state.db)
        .delete(id, state.photo_storage.as_ref())
        .await?;

    Ok(StatusCode::OK)
}

/// Upload a photo for a product.
///
/// Reads the multipart field `file` once the product is known to exist. The first photo
/// of a product becomes its main photo.
///
/// # Access Control
/// - `Moderator` - Only moderators can upload photos
///
/// # Returns
/// - `201 Created` - The stored photo, `Location` pointing at the product
/// - `400 Bad Request` - Missing, empty or non-image upload, or the insert failed
/// - `404 Not Found` - No product with that id
#[utoipa::path(
    post,
    path = "/api/moderator/product/add-photo/{product_id}",
    tag = MODERATOR_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body(content = PhotoUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully added photo", body = ProductPhotoDto),
        (status = 400, description = "Invalid upload or failed to store photo", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_photo(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let service = PhotoService::new(&state.db, state.photo_storage.as_ref());
    service.require_product(product_id).await?;

    let (bytes, content_type) = read_photo_field(multipart).await?;

    let photo = service.add(product_id, bytes, &content_type).await?;

    let location = format!("/api/moderator/product/{}", product_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(photo.into_dto()),
    ))
}

/// Make a photo its product's main photo.
#[utoipa::path(
    put,
    path = "/api/moderator/product/set-main-photo/{photo_id}",
    tag = MODERATOR_TAG,
    params(
        ("photo_id" = i32, Path, description = "Photo ID")
    ),
    responses(
        (status = 204, description = "Successfully set main photo"),
        (status = 400, description = "Photo is already main or the update failed", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_main_photo(
    State(state): State<AppState>,
    session: Session,
    Path(photo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    PhotoService::new(&state.db, state.photo_storage.as_ref())
        .set_main(photo_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a photo that is not the main photo.
#[utoipa::path(
    delete,
    path = "/api/moderator/product/delete-photo/{photo_id}",
    tag = MODERATOR_TAG,
    params(
        ("photo_id" = i32, Path, description = "Photo ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted photo"),
        (status = 400, description = "Photo is main or could not be removed", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    session: Session,
    Path(photo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    PhotoService::new(&state.db, state.photo_storage.as_ref())
        .delete(photo_id)
        .await?;

    Ok(StatusCode::OK)
}

/// Reads the photo field from a multipart body, skipping any other fields.
async fn read_photo_field(mut multipart: Multipart) -> Result<(Vec<u8>, String), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PhotoStorageError::Upload(e.body_text()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| PhotoStorageError::Upload(e.body_text()))?;

        return Ok((bytes.to_vec(), content_type));
    }

    Err(PhotoStorageError::MissingFile.into())
}
