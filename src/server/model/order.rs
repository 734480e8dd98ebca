//! Order, basket and order line domain models.

use chrono::{DateTime, Utc};

use crate::model::{
    basket::BasketDto,
    order::{AdminOrderDto, OrderDto, OrderedProductDto},
};

/// An order line joined with the product it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedProduct {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub sale_price: f64,
    /// Main photo of the product at read time
    pub photo_url: Option<String>,
    pub quantity: i32,
}

impl OrderedProduct {
    pub fn line_total(&self) -> f64 {
        self.sale_price * self.quantity as f64
    }

    pub fn into_dto(self) -> OrderedProductDto {
        OrderedProductDto {
            id: self.id,
            product_id: self.product_id,
            product_name: self.product_name,
            sale_price: self.sale_price,
            photo_url: self.photo_url,
            quantity: self.quantity,
        }
    }
}

/// An order with its lines. `placed_at: None` marks the owner's basket.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub placed_at: Option<DateTime<Utc>>,
    pub ordered_products: Vec<OrderedProduct>,
}

impl Order {
    pub fn is_basket(&self) -> bool {
        self.placed_at.is_none()
    }

    pub fn total(&self) -> f64 {
        self.ordered_products.iter().map(OrderedProduct::line_total).sum()
    }

    pub fn into_dto(self) -> OrderDto {
        let total = self.total();

        OrderDto {
            id: self.id,
            created_at: self.created_at,
            placed_at: self.placed_at,
            ordered_products: self
                .ordered_products
                .into_iter()
                .map(OrderedProduct::into_dto)
                .collect(),
            total,
        }
    }

    pub fn into_admin_dto(self) -> AdminOrderDto {
        let total = self.total();

        AdminOrderDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            created_at: self.created_at,
            placed_at: self.placed_at,
            ordered_products: self
                .ordered_products
                .into_iter()
                .map(OrderedProduct::into_dto)
                .collect(),
            total,
        }
    }

    /// Converts an optional basket into the basket DTO, empty when there is no basket.
    pub fn into_basket_dto(basket: Option<Self>) -> BasketDto {
        match basket {
            Some(order) => BasketDto {
                order_id: Some(order.id),
                ordered_products: order
                    .ordered_products
                    .into_iter()
                    .map(OrderedProduct::into_dto)
                    .collect(),
            },
            None => BasketDto::default(),
        }
    }
}

/// Parameters for setting the quantity of a product in a user's basket.
#[derive(Debug, Clone)]
pub struct SetBasketQuantityParam {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}
