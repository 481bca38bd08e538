//! Application bootstrap and service wiring.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use registra_api::ApiServer;
use registra_config::Settings;
use registra_store::MemoryRecordStore;

use crate::error::{AppError, AppResult};

/// Indexed attribute behind the configured email index.
const EMAIL_ATTRIBUTE: &str = "email";

/// Default logging directive when `RUST_LOG` is not provided.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Entry point for the Registra boot sequence.
///
/// # Errors
///
/// Returns an error if the settings are malformed or the listener fails to
/// bind or serve.
pub async fn run_app() -> AppResult<()> {
    init_logging();

    let settings = Settings::from_env().map_err(|source| AppError::Config {
        operation: "settings.from_env",
        source,
    })?;
    info!(
        table = %settings.table,
        email_index = %settings.email_index,
        "Registra bootstrap starting"
    );

    let store = Arc::new(MemoryRecordStore::new(
        settings.table.clone(),
        vec![(settings.email_index.clone(), EMAIL_ATTRIBUTE.to_string())],
    ));
    let server = ApiServer::new(&settings, store);
    server
        .serve(settings.socket_addr())
        .await
        .map_err(|source| AppError::ApiServer {
            operation: "api_server.serve",
            source,
        })
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    // A second install (tests, embedding) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
