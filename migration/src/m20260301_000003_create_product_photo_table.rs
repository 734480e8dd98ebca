use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_product_table::Product;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductPhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductPhoto::Id))
                    .col(integer(ProductPhoto::ProductId))
                    .col(string(ProductPhoto::Url))
                    .col(string_null(ProductPhoto::PublicId))
                    .col(boolean(ProductPhoto::IsMain).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_photo_product_id")
                            .from(ProductPhoto::Table, ProductPhoto::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductPhoto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductPhoto {
    Table,
    Id,
    ProductId,
    Url,
    PublicId,
    IsMain,
}
