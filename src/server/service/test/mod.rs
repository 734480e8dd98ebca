mod basket;
mod product;
