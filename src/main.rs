use std::process;
use std::sync::Arc;

use log::{error, warn, LevelFilter};

use crate::app_state::AppState;
use crate::config::app_config::AppConfig;

mod app_state;
mod clients;
mod config;
mod handlers;
mod models;
mod routes;
mod server;

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match AppConfig::new() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("invalid configuration: {}", err);
            process::exit(1);
        }
    };
    if !config.readarr().is_complete() {
        warn!("READARR_BASE_URL or READARR_API_KEY is not set, book requests will fail");
    }
    if !config.kapowarr().is_complete() {
        warn!("KAPOWARR_BASE_URL or KAPOWARR_API_KEY is not set, comic requests will fail");
    }

    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("can't build http client: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = server::start(config, state).await {
        error!("server error: {}", err);
        process::exit(1);
    }
}
