//! HTTP server for the SCHADS pay engine.
//!
//! Environment:
//!
//! - `SCHADS_CONFIG_DIR`: rate table directory (default `./config/schads`)
//! - `SCHADS_BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `SCHADS_LOG_JSON`: emit JSON log lines when true (default false)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;

use schads_engine::api::{AppState, create_router};
use schads_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/schads";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("SCHADS_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config_dir = env::var("SCHADS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("SCHADS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .map_err(|e| format!("failed to load rate tables from {config_dir}: {e}"))?;
    info!(
        award = %config.award().code,
        versions = ?config.versions(),
        "Loaded rate tables"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!(bind_addr = %bind_addr, "SCHADS pay engine listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| format!("server error: {e}"))
}
