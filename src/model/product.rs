use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProductPhotoDto {
    pub id: i32,
    pub url: String,
    pub is_main: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    /// Markdown formatted description.
    pub description: Option<String>,
    pub sale_price: f64,
    /// URL of the main photo, if the product has one.
    pub photo_url: Option<String>,
    pub photos: Vec<ProductPhotoDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub sale_price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub sale_price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProductListItemDto {
    pub id: i32,
    pub name: String,
    pub sale_price: f64,
    pub photo_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedProductsDto {
    pub products: Vec<ProductListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
