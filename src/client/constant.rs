pub const SITE_NAME: &str = "Storefront";

/// Products shown per page on the home page.
pub const PRODUCTS_PER_PAGE: u64 = 12;
