use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use tokio::signal;

use crate::app_state::AppState;
use crate::config::app_config::AppConfig;
use crate::routes::routes;

pub async fn start(
    config: Arc<AppConfig>,
    state: AppState,
) -> Result<(), hyper::Error> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let server = axum::Server::try_bind(&addr)?
        .serve(routes(state).into_make_service());

    info!("listening on http://{}", server.local_addr());
    server.with_graceful_shutdown(shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("can't listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => { sigterm.recv().await; }
            Err(err) => {
                error!("can't listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutting down, waiting for in-flight requests");
}
