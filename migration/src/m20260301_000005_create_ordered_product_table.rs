use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_product_table::Product, m20260301_000004_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderedProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderedProduct::Id))
                    .col(integer(OrderedProduct::OrderId))
                    .col(integer(OrderedProduct::ProductId))
                    .col(integer(OrderedProduct::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ordered_product_order_id")
                            .from(OrderedProduct::Table, OrderedProduct::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // Products that appear on an order cannot be deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ordered_product_product_id")
                            .from(OrderedProduct::Table, OrderedProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_ordered_product_order_product_unique")
                            .col(OrderedProduct::OrderId)
                            .col(OrderedProduct::ProductId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderedProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderedProduct {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
}
