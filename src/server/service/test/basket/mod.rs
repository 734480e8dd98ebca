use chrono::{Duration, Utc};

use crate::server::{
    error::AppError, model::order::SetBasketQuantityParam, service::basket::BasketService,
};
use test_utils::{builder::TestBuilder, factory};

mod checkout;
mod remove_stale;
