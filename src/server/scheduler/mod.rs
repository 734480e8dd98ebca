//! Cron jobs running alongside the web server.

pub mod basket_cleanup;
