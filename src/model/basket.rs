use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::order::{lines_quantity, lines_total, OrderedProductDto};

/// Largest quantity a single basket line may hold.
pub const MAX_LINE_QUANTITY: i32 = 99;

/// Quantities offered by the basket quantity selector.
pub const QUANTITY_CHOICES: std::ops::RangeInclusive<i32> = 0..=9;

/// Snapshot of the current user's basket.
///
/// `order_id` is `None` until the first product is added.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BasketDto {
    pub order_id: Option<i32>,
    pub ordered_products: Vec<OrderedProductDto>,
}

impl BasketDto {
    /// Total cost of the basket: the sum of sale price times quantity over all lines.
    pub fn total_cost(&self) -> f64 {
        lines_total(&self.ordered_products)
    }

    /// Number of units in the basket across all lines.
    pub fn total_quantity(&self) -> i32 {
        lines_quantity(&self.ordered_products)
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_products.is_empty()
    }

    /// Current quantity of the product in the basket, zero when absent.
    pub fn quantity_of(&self, product_id: i32) -> i32 {
        self.ordered_products
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }
}

/// Request body for setting the quantity of a product in the basket.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateBasketProductDto {
    pub quantity: i32,
}
