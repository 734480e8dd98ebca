use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A single line of an order or basket.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct OrderedProductDto {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub sale_price: f64,
    pub photo_url: Option<String>,
    pub quantity: i32,
}

impl OrderedProductDto {
    /// Price of the line: unit sale price times quantity.
    pub fn line_total(&self) -> f64 {
        self.sale_price * self.quantity as f64
    }
}

/// Sums the line totals of the given order lines.
pub fn lines_total(lines: &[OrderedProductDto]) -> f64 {
    lines.iter().map(OrderedProductDto::line_total).sum()
}

/// Sums the quantities of the given order lines.
pub fn lines_quantity(lines: &[OrderedProductDto]) -> i32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// A placed order as seen by its customer.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct OrderDto {
    pub id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub placed_at: Option<DateTime<Utc>>,
    pub ordered_products: Vec<OrderedProductDto>,
    pub total: f64,
}

/// An order as seen by moderators, including the customer.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminOrderDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub placed_at: Option<DateTime<Utc>>,
    pub ordered_products: Vec<OrderedProductDto>,
    pub total: f64,
}
