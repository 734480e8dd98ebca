//! Product data repository.
//!
//! Products are always returned with their photos attached, ordered by photo id.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{
    CreateProductParam, Product, ProductPhoto, UpdateProductParam,
};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new product without photos.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(DbErr)` - Insert failed, e.g. on a duplicate name
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            sale_price: ActiveValue::Set(param.sale_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity, Vec::new()))
    }

    /// Finds a product and its photos by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let Some(entity) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let photos = entity::prelude::ProductPhoto::find()
            .filter(entity::product_photo::Column::ProductId.eq(id))
            .order_by_asc(entity::product_photo::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ProductPhoto::from_entity)
            .collect();

        Ok(Some(Product::from_entity(entity, photos)))
    }

    /// Checks whether a product other than `exclude_id` already uses `name`, ignoring ASCII case.
    ///
    /// # Arguments
    /// - `name` - Name to check
    /// - `exclude_id` - Product to ignore, used when renaming a product
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Product::find().filter(
            sea_orm::sea_query::Expr::cust_with_values(
                "LOWER(name) = ?",
                [name.to_ascii_lowercase()],
            ),
        );

        if let Some(id) = exclude_id {
            query = query.filter(entity::product::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets a page of products ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of products per page
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products of the page and the total product count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let paginator = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Name)
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let products = self.attach_photos(entities).await?;

        Ok((products, total))
    }

    /// Overwrites name, description and price of an existing product.
    ///
    /// # Returns
    /// - `Ok(())` - Product updated
    /// - `Err(DbErr::RecordNotUpdated)` - No product with that id
    /// - `Err(DbErr)` - Update failed, e.g. on a duplicate name
    pub async fn update(&self, param: UpdateProductParam) -> Result<(), DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            sale_price: ActiveValue::Set(param.sale_price),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a product; its photo rows are removed by cascade.
    ///
    /// Fails with a foreign key error while any order line references the product.
    ///
    /// # Returns
    /// - `Ok(true)` - Product deleted
    /// - `Ok(false)` - No product with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn attach_photos(
        &self,
        entities: Vec<entity::product::Model>,
    ) -> Result<Vec<Product>, DbErr> {
        let ids: Vec<i32> = entities.iter().map(|product| product.id).collect();

        let mut photos_by_product: HashMap<i32, Vec<ProductPhoto>> = HashMap::new();
        if !ids.is_empty() {
            let photos = entity::prelude::ProductPhoto::find()
                .filter(entity::product_photo::Column::ProductId.is_in(ids))
                .order_by_asc(entity::product_photo::Column::Id)
                .all(self.db)
                .await?;

            for photo in photos {
                photos_by_product
                    .entry(photo.product_id)
                    .or_default()
                    .push(ProductPhoto::from_entity(photo));
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let photos = photos_by_product.remove(&entity.id).unwrap_or_default();
                Product::from_entity(entity, photos)
            })
            .collect())
    }
}
