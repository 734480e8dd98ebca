use crate::server::data::order::OrderRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_baskets_updated_before;
mod find_basket;
mod get_all;
mod place;
mod set_line_quantity;
