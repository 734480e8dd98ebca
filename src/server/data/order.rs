//! Order and basket data repository.
//!
//! A basket is an order row whose `placed_at` is NULL. Orders are returned with their lines
//! joined to product name, price and main photo, plus the owning user's name.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::order::{Order, OrderedProduct};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every order, baskets included, newest first.
    pub async fn get_all(&self) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Orders::find()
            .order_by_desc(entity::orders::Column::CreatedAt)
            .order_by_desc(entity::orders::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(entities).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Orders::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.assemble(vec![entity]).await?.into_iter().next())
    }

    /// Finds the user's open basket.
    pub async fn find_basket(&self, user_id: i32) -> Result<Option<Order>, DbErr> {
        let Some(entity) = self.find_basket_entity(user_id).await? else {
            return Ok(None);
        };

        Ok(self.assemble(vec![entity]).await?.into_iter().next())
    }

    /// Returns the id of the user's basket, creating an empty basket when none exists.
    pub async fn find_or_create_basket_id(&self, user_id: i32) -> Result<i32, DbErr> {
        if let Some(basket) = self.find_basket_entity(user_id).await? {
            return Ok(basket.id);
        }

        let now = Utc::now();
        let basket = entity::orders::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            placed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(basket.id)
    }

    /// Sets the quantity of a product on an order, removing the line when `quantity` is 0.
    ///
    /// Also refreshes the order's `updated_at`.
    pub async fn set_line_quantity(
        &self,
        order_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::OrderedProduct::find()
            .filter(entity::ordered_product::Column::OrderId.eq(order_id))
            .filter(entity::ordered_product::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?;

        match (existing, quantity) {
            (Some(line), 0) => {
                entity::prelude::OrderedProduct::delete_by_id(line.id)
                    .exec(self.db)
                    .await?;
            }
            (None, 0) => {}
            (Some(line), quantity) => {
                entity::ordered_product::ActiveModel {
                    id: ActiveValue::Unchanged(line.id),
                    quantity: ActiveValue::Set(quantity),
                    ..Default::default()
                }
                .update(self.db)
                .await?;
            }
            (None, quantity) => {
                entity::ordered_product::ActiveModel {
                    order_id: ActiveValue::Set(order_id),
                    product_id: ActiveValue::Set(product_id),
                    quantity: ActiveValue::Set(quantity),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        self.touch(order_id).await
    }

    /// Marks the order as placed at `placed_at`, turning a basket into an order.
    pub async fn place(&self, order_id: i32, placed_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::orders::ActiveModel {
            id: ActiveValue::Unchanged(order_id),
            placed_at: ActiveValue::Set(Some(placed_at)),
            updated_at: ActiveValue::Set(placed_at),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes baskets last updated before `cutoff`; their lines go by cascade.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of baskets removed
    pub async fn delete_baskets_updated_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Orders::delete_many()
            .filter(entity::orders::Column::PlacedAt.is_null())
            .filter(entity::orders::Column::UpdatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn touch(&self, order_id: i32) -> Result<(), DbErr> {
        entity::prelude::Orders::update_many()
            .col_expr(entity::orders::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::orders::Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn find_basket_entity(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find()
            .filter(entity::orders::Column::UserId.eq(user_id))
            .filter(entity::orders::Column::PlacedAt.is_null())
            .order_by_desc(entity::orders::Column::Id)
            .one(self.db)
            .await
    }

    /// Loads users, lines, products and main photos for `entities` in four queries.
    async fn assemble(&self, entities: Vec<entity::orders::Model>) -> Result<Vec<Order>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = entities.iter().map(|order| order.id).collect();
        let user_ids: Vec<i32> = entities.iter().map(|order| order.user_id).collect();

        let user_names: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user.name))
            .collect();

        let lines = entity::prelude::OrderedProduct::find()
            .filter(entity::ordered_product::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::ordered_product::Column::Id)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?;

        let product_ids: Vec<i32> = lines.iter().map(|(line, _)| line.product_id).collect();
        let main_photos: HashMap<i32, String> = if product_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::ProductPhoto::find()
                .filter(entity::product_photo::Column::ProductId.is_in(product_ids))
                .filter(entity::product_photo::Column::IsMain.eq(true))
                .all(self.db)
                .await?
                .into_iter()
                .map(|photo| (photo.product_id, photo.url))
                .collect()
        };

        let mut lines_by_order: HashMap<i32, Vec<OrderedProduct>> = HashMap::new();
        for (line, product) in lines {
            let Some(product) = product else {
                continue;
            };

            lines_by_order
                .entry(line.order_id)
                .or_default()
                .push(OrderedProduct {
                    id: line.id,
                    order_id: line.order_id,
                    product_id: line.product_id,
                    product_name: product.name,
                    sale_price: product.sale_price,
                    photo_url: main_photos.get(&line.product_id).cloned(),
                    quantity: line.quantity,
                });
        }

        Ok(entities
            .into_iter()
            .map(|order| Order {
                id: order.id,
                user_id: order.user_id,
                user_name: user_names.get(&order.user_id).cloned().unwrap_or_default(),
                created_at: order.created_at,
                updated_at: order.updated_at,
                placed_at: order.placed_at,
                ordered_products: lines_by_order.remove(&order.id).unwrap_or_default(),
            })
            .collect())
    }
}
