//! Product catalog business logic.
//!
//! Enforces the catalog rules on top of `ProductRepository`: product names are unique,
//! prices are non-negative, and a product still referenced by an order cannot be deleted.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::{AppError, PersistenceResultExt},
    model::product::{
        CreateProductParam, GetProductsParam, PaginatedProducts, Product, UpdateProductParam,
    },
    storage::PhotoStorage,
};

/// Largest page size the catalog serves
pub const MAX_PER_PAGE: u64 = 100;

pub struct ProductService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of products ordered by name.
    ///
    /// # Returns
    /// - `Ok(PaginatedProducts)` - Products of the page with pagination metadata
    /// - `Err(AppError::BadRequest)` - `per_page` is zero or above `MAX_PER_PAGE`, or the
    ///   page offset does not fit a database integer
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_paginated(&self, param: GetProductsParam) -> Result<PaginatedProducts, AppError> {
        if param.per_page == 0 {
            return Err(AppError::BadRequest(
                "Entries per page must be at least 1".to_string(),
            ));
        }
        if param.per_page > MAX_PER_PAGE {
            return Err(AppError::BadRequest(format!(
                "Entries per page must be at most {}",
                MAX_PER_PAGE
            )));
        }
        let offset_fits = param
            .page
            .checked_mul(param.per_page)
            .is_some_and(|offset| i64::try_from(offset).is_ok());
        if !offset_fits {
            return Err(AppError::BadRequest(format!(
                "Page {} is out of range",
                param.page
            )));
        }

        let repo = ProductRepository::new(self.db);
        let (products, total) = repo.get_paginated(param.page, param.per_page).await?;

        let total_pages = total.div_ceil(param.per_page);

        Ok(PaginatedProducts {
            products,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Gets a product with its photos.
    ///
    /// # Returns
    /// - `Ok(Product)` - The product
    /// - `Err(AppError::NotFound)` - No product with that id
    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))
    }

    /// Creates a product after checking its name is free.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(AppError::BadRequest("Product name is taken"))` - Another product has the name
    /// - `Err(AppError::PersistenceFailed("Failed to add product"))` - Insert failed
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, AppError> {
        validate_fields(&param.name, param.sale_price)?;

        let repo = ProductRepository::new(self.db);

        if repo.name_taken(&param.name, None).await? {
            return Err(AppError::BadRequest("Product name is taken".to_string()));
        }

        let product = repo
            .create(param)
            .await
            .or_persistence_failure("Failed to add product")?;

        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product)
    }

    /// Overwrites a product's name, description and price.
    ///
    /// # Returns
    /// - `Ok(())` - Product updated
    /// - `Err(AppError::NotFound)` - No product with that id
    /// - `Err(AppError::BadRequest("Product name is taken"))` - Rename onto another product
    /// - `Err(AppError::PersistenceFailed("Failed to update product"))` - Update failed
    pub async fn update(&self, param: UpdateProductParam) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_by_id(param.id).await?.is_none() {
            return Err(product_not_found(param.id));
        }

        validate_fields(&param.name, param.sale_price)?;

        if repo.name_taken(&param.name, Some(param.id)).await? {
            return Err(AppError::BadRequest("Product name is taken".to_string()));
        }

        repo.update(param)
            .await
            .or_persistence_failure("Failed to update product")?;

        Ok(())
    }

    /// Deletes a product and then its stored photo files.
    ///
    /// File removal is best effort: failures are logged and do not fail the request,
    /// since the rows referencing them are already gone.
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(AppError::NotFound)` - No product with that id
    /// - `Err(AppError::PersistenceFailed("Failed to delete product"))` - Delete failed,
    ///   e.g. because the product was ordered
    pub async fn delete(&self, id: i32, storage: &dyn PhotoStorage) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(product) = repo.find_by_id(id).await? else {
            return Err(product_not_found(id));
        };

        let deleted = repo
            .delete(id)
            .await
            .or_persistence_failure("Failed to delete product")?;

        if !deleted {
            return Err(product_not_found(id));
        }

        for public_id in product.photos.iter().filter_map(|p| p.public_id.as_deref()) {
            if let Err(e) = storage.delete(public_id).await {
                tracing::warn!(
                    "Failed to remove photo {} of deleted product {}: {}",
                    public_id,
                    id,
                    e
                );
            }
        }

        tracing::info!("Deleted product {} ({})", product.id, product.name);

        Ok(())
    }
}

pub(crate) fn product_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}

fn validate_fields(name: &str, sale_price: f64) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Product name is required".to_string()));
    }

    if !sale_price.is_finite() || sale_price < 0.0 {
        return Err(AppError::BadRequest(
            "Sale price must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}
