use crate::server::{
    data::product::ProductRepository,
    model::product::{CreateProductParam, UpdateProductParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_paginated;
mod name_taken;
mod update;
