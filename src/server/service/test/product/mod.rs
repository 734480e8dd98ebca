use crate::server::{
    error::AppError,
    model::product::{CreateProductParam, GetProductsParam, UpdateProductParam},
    service::product::{ProductService, MAX_PER_PAGE},
    storage::{local::LocalPhotoStorage, PhotoStorage},
};
use test_utils::{builder::TestBuilder, factory};
