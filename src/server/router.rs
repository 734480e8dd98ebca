//! Route table and API documentation.
//!
//! JSON endpoints are registered through `OpenApiRouter` so their `#[utoipa::path]`
//! annotations end up in the OpenAPI document served by Swagger UI at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, basket, catalog, moderator},
    state::AppState,
};

/// Multipart framing sent alongside the photo itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(info(title = "Storefront API", description = "Catalog, basket and moderator API"))]
struct ApiDoc;

pub fn router(config: &Config) -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(catalog::get_products))
        .routes(routes!(catalog::get_product))
        .routes(routes!(basket::get_basket))
        .routes(routes!(basket::update_basket_product))
        .routes(routes!(basket::checkout))
        .routes(routes!(moderator::get_orders))
        .routes(routes!(moderator::get_order))
        .routes(routes!(moderator::create_product))
        .routes(routes!(
            moderator::get_product,
            moderator::update_product,
            moderator::delete_product
        ))
        .routes(routes!(moderator::add_photo))
        .routes(routes!(moderator::set_main_photo))
        .routes(routes!(moderator::delete_photo))
        .split_for_parts();

    let router = api_router
        .layer(DefaultBodyLimit::max(
            config.max_photo_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    // Photos are only served locally when the base URL is a path on this server
    if config.photo_base_url.starts_with('/') && config.photo_base_url.len() > 1 {
        router.nest_service(&config.photo_base_url, ServeDir::new(&config.photo_dir))
    } else {
        router
    }
}
