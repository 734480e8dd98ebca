//! Product and photo domain models.
//!
//! Products are converted from entities at the repository boundary together with their
//! photos, so the main photo URL can be derived without another query.

use chrono::{DateTime, Utc};

use crate::model::product::{
    CreateProductDto, PaginatedProductsDto, ProductDto, ProductListItemDto, ProductPhotoDto,
    UpdateProductDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPhoto {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    /// Storage key, `None` for photos not managed by the photo storage
    pub public_id: Option<String>,
    pub is_main: bool,
}

impl ProductPhoto {
    pub fn into_dto(self) -> ProductPhotoDto {
        ProductPhotoDto {
            id: self.id,
            url: self.url,
            is_main: self.is_main,
        }
    }

    pub fn from_entity(entity: entity::product_photo::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            url: entity.url,
            public_id: entity.public_id,
            is_main: entity.is_main,
        }
    }
}

/// A catalog product with its photos ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Markdown description
    pub description: Option<String>,
    pub sale_price: f64,
    pub created_at: DateTime<Utc>,
    pub photos: Vec<ProductPhoto>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model, photos: Vec<ProductPhoto>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            sale_price: entity.sale_price,
            created_at: entity.created_at,
            photos,
        }
    }

    pub fn main_photo(&self) -> Option<&ProductPhoto> {
        self.photos.iter().find(|photo| photo.is_main)
    }

    pub fn main_photo_url(&self) -> Option<String> {
        self.main_photo().map(|photo| photo.url.clone())
    }

    pub fn into_dto(self) -> ProductDto {
        let photo_url = self.main_photo_url();

        ProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            sale_price: self.sale_price,
            photo_url,
            photos: self.photos.into_iter().map(ProductPhoto::into_dto).collect(),
        }
    }

    pub fn into_list_item_dto(self) -> ProductListItemDto {
        let photo_url = self.main_photo_url();

        ProductListItemDto {
            id: self.id,
            name: self.name,
            sale_price: self.sale_price,
            photo_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParam {
    pub name: String,
    pub description: Option<String>,
    pub sale_price: f64,
}

impl CreateProductParam {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            sale_price: dto.sale_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProductParam {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sale_price: f64,
}

impl UpdateProductParam {
    /// The id always comes from the route, never from the body.
    pub fn from_dto(id: i32, dto: UpdateProductDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            sale_price: dto.sale_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetProductsParam {
    /// Zero-indexed page number
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProducts {
    pub fn into_dto(self) -> PaginatedProductsDto {
        PaginatedProductsDto {
            products: self
                .products
                .into_iter()
                .map(Product::into_list_item_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for inserting a photo row after the file has been stored.
#[derive(Debug, Clone)]
pub struct CreatePhotoParam {
    pub product_id: i32,
    pub url: String,
    pub public_id: Option<String>,
    pub is_main: bool,
}
