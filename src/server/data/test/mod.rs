mod order;
mod product;
mod product_photo;
mod user;
