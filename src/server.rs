use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use reqwest::Client;
use tokio::net::TcpListener;

use crate::{Error, Res, api, config::SpotifyConfig, info};

/// Read-only data every handler gets.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub spotify: SpotifyConfig,
    pub http: Client,
}

impl ServerState {
    /// Builds the HTTP client shared by all handlers.
    ///
    /// # Errors
    ///
    /// [`Error::Request`] when the client cannot be constructed.
    pub fn new(spotify: SpotifyConfig) -> Res<Self> {
        let http = Client::builder().build()?;
        Ok(Self { spotify, http })
    }
}

/// Routes:
/// - `GET /health` - liveness and version
/// - `GET /spotify/auth` - redirect to the consent page
/// - `GET /callback` - code exchange and current track
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/spotify/auth", get(api::spotify_auth))
        .route("/callback", get(api::callback))
        .layer(Extension(Arc::new(state)))
}

/// Binds a listener on `addr` (`host:port`).
///
/// Port `0` picks a free port; ask the listener for the real address.
///
/// # Errors
///
/// - [`Error::Config`] when `addr` is not a socket address
/// - [`Error::Server`] when the port cannot be bound
pub async fn bind(addr: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| Error::Config(format!("invalid server address '{}': {}", addr, e)))?;
    Ok(TcpListener::bind(addr).await?)
}

/// Serves until the process is stopped.
pub async fn start_api_server(listener: TcpListener, state: ServerState) -> Res<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router(state)).await?;
    Ok(())
}
