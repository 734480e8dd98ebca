use crate::server::{
    data::{product::ProductRepository, product_photo::ProductPhotoRepository},
    model::product::CreatePhotoParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_product;
mod create;
mod delete;
mod set_main;
