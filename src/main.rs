mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use std::sync::Arc;

        use crate::server::{
            config::Config, scheduler::basket_cleanup,
            service::moderator_code::ModeratorCodeService, startup, state::AppState,
            storage::local::LocalPhotoStorage,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let photo_storage =
            LocalPhotoStorage::open(&config.photo_dir, config.photo_base_url.clone()).await?;

        let moderator_code_service = ModeratorCodeService::new();

        tracing::info!("Starting server");

        // Check for moderators and generate login link if none exist
        startup::check_for_moderator(&db, &config, &moderator_code_service).await?;

        let scheduler_db = db.clone();
        let basket_ttl_days = config.basket_ttl_days;
        tokio::spawn(async move {
            if let Err(e) = basket_cleanup::start_scheduler(scheduler_db, basket_ttl_days).await {
                tracing::error!("Basket cleanup scheduler error: {}", e);
            }
        });

        let oauth_scopes = config
            .oauth_scopes
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config)
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                config.oauth_user_info_url.clone(),
                oauth_scopes,
                moderator_code_service,
                Arc::new(photo_storage),
                config.app_url.clone(),
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
