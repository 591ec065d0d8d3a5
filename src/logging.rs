use std::env;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initializes logging for an application embedding this crate.
///
/// The library itself only emits `tracing` events; calling this is opt-in.
/// `APP_ENV` picks the output format:
/// - `development` (default): pretty-printed console logs.
/// - `production`: JSON lines for log aggregation.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clear_links=info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let registry = Registry::default().with(env_filter).with(ErrorLayer::default());

    if app_env == "production" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().pretty().with_target(true)).init();
    }

    tracing::info!(env = %app_env, "Logging initialized");
}
