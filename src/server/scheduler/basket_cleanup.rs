use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::basket::BasketService};

/// Runs at the start of every hour.
const CLEANUP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the basket cleanup scheduler
///
/// Every hour, baskets that have not been updated for `ttl_days` days are deleted
/// together with their lines. Placed orders are never touched.
///
/// # Arguments
/// - `db`: Database connection
/// - `ttl_days`: Age in days after which an untouched basket is removed
pub async fn start_scheduler(db: DatabaseConnection, ttl_days: i64) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = remove_stale_baskets(&db, ttl_days).await {
                tracing::error!("Error removing stale baskets: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Basket cleanup scheduler started");

    Ok(())
}

async fn remove_stale_baskets(db: &DatabaseConnection, ttl_days: i64) -> Result<(), AppError> {
    let removed = BasketService::new(db).remove_stale(ttl_days).await?;

    if removed > 0 {
        tracing::info!("Removed {} stale baskets", removed);
    }

    Ok(())
}
