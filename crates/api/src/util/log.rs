/// Configure logging and (if a DSN is configured) error reporting
pub async fn setup_logging() -> Option<sentry::ClientInitGuard> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    if std::env::var("ROCKET_ADDRESS").is_err() {
        std::env::set_var("ROCKET_ADDRESS", "0.0.0.0");
    }

    pretty_env_logger::init();

    let config = beacon_config::config().await;
    if config.api.sentry.is_empty() {
        None
    } else {
        Some(sentry::init((
            config.api.sentry,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        )))
    }
}
