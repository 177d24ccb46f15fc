//! Contract stub server

use super::routes::create_router;
use super::store::ItemStore;
use axum::http::StatusCode;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: ItemStore,
}

pub fn error_to_status_code(status: &str) -> StatusCode {
    match status {
        "400" => StatusCode::BAD_REQUEST,
        "404" => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn create_app_state() -> AppState {
    Arc::new(AppStateInner {
        store: ItemStore::new(),
    })
}

pub async fn start_stub(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to address {bind_address}: {e}"))?;
    info!("Advertisement stub starting on http://{bind_address}");
    axum::serve(listener, create_router(create_app_state()))
        .await
        .map_err(|e| format!("Stub failed to start: {e}"))?;
    Ok(())
}

/// Serves a fresh stub on an ephemeral localhost port from the current runtime.
pub async fn spawn_stub() -> Result<(SocketAddr, JoinHandle<()>), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|e| format!("Failed to bind ephemeral port: {e}"))?;
    let addr = listener.local_addr()?;
    let app = create_router(create_app_state());
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Stub on {addr} stopped: {e}");
        }
    });
    info!("Advertisement stub listening on http://{addr}");
    Ok((addr, handle))
}
