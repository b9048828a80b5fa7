//! Shared setup for the live journeys.

use std::sync::Once;

use comprar::{ComprarResult, DriverSession, Settings, SETTINGS_PATH_ENV};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install the tracing subscriber once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("comprar=debug,info")),
            )
            .with_test_writer()
            .init();
    });
}

/// Settings for live runs: `COMPRAR_CONFIG` wins, the bundled file otherwise.
pub fn load_settings() -> ComprarResult<Settings> {
    match std::env::var(SETTINGS_PATH_ENV) {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/comprar.toml")),
    }
}

/// Launch a browser session and land on the storefront's home page.
pub async fn start() -> ComprarResult<(Settings, DriverSession)> {
    init_tracing();
    let settings = load_settings()?;
    let session = DriverSession::launch(&settings, None).await?;
    session.goto_base().await?;
    Ok((settings, session))
}
