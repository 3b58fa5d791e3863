use tracing_subscriber::EnvFilter;

use crate::settings::AppConfig;

const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber. JSON output is used in production
/// or when `log_json` is set.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_json || config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Fallback used when configuration could not be loaded.
pub fn init_default_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .init();
}
