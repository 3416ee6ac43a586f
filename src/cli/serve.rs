use crate::{
    config::{self, SpotifyConfig},
    error,
    server::{self, ServerState},
    warning,
};

/// Runs the authorization server, optionally opening the consent page.
pub async fn serve(open: bool, verbose: bool) {
    let mut spotify = match SpotifyConfig::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };
    spotify.log_http |= verbose;

    let state = match ServerState::new(spotify) {
        Ok(s) => s,
        Err(e) => error!("{}", e),
    };

    let listener = match server::bind(&config::server_addr()).await {
        Ok(l) => l,
        Err(e) => error!("{}", e),
    };

    if open {
        if let Ok(addr) = listener.local_addr() {
            let auth_url = format!("http://{}/spotify/auth", addr);
            if webbrowser::open(&auth_url).is_err() {
                warning!(
                    "Failed to open browser. Please navigate to the following URL manually:\n{}",
                    auth_url
                )
            }
        }
    }

    if let Err(e) = server::start_api_server(listener, state).await {
        error!("{}", e);
    }
}
