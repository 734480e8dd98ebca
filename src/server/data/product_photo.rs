//! Product photo data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::product::{CreatePhotoParam, ProductPhoto};

pub struct ProductPhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductPhotoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePhotoParam) -> Result<ProductPhoto, DbErr> {
        let entity = entity::product_photo::ActiveModel {
            product_id: ActiveValue::Set(param.product_id),
            url: ActiveValue::Set(param.url),
            public_id: ActiveValue::Set(param.public_id),
            is_main: ActiveValue::Set(param.is_main),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ProductPhoto::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ProductPhoto>, DbErr> {
        let entity = entity::prelude::ProductPhoto::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ProductPhoto::from_entity))
    }

    pub async fn count_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ProductPhoto::find()
            .filter(entity::product_photo::Column::ProductId.eq(product_id))
            .count(self.db)
            .await
    }

    /// Makes `photo_id` the only main photo of `product_id`.
    ///
    /// Issues two statements; run it inside a transaction so readers never observe a
    /// product with zero or two main photos.
    ///
    /// # Returns
    /// - `Ok(())` - Main photo switched
    /// - `Err(DbErr::RecordNotUpdated)` - The photo does not belong to the product
    pub async fn set_main(&self, product_id: i32, photo_id: i32) -> Result<(), DbErr> {
        entity::prelude::ProductPhoto::update_many()
            .col_expr(
                entity::product_photo::Column::IsMain,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::product_photo::Column::ProductId.eq(product_id))
            .filter(entity::product_photo::Column::IsMain.eq(true))
            .exec(self.db)
            .await?;

        let result = entity::prelude::ProductPhoto::update_many()
            .col_expr(
                entity::product_photo::Column::IsMain,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::product_photo::Column::Id.eq(photo_id))
            .filter(entity::product_photo::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Deletes a photo row.
    ///
    /// # Returns
    /// - `Ok(true)` - Photo deleted
    /// - `Ok(false)` - No photo with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ProductPhoto::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
