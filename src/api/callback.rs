use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{info, server::ServerState, spotify, success, warning};

/// Receives the authorization code, trades it for a token and looks up the
/// track that is playing.
///
/// Answers `400` without calling Spotify when no `code` came back, e.g.
/// because the user declined (`error=access_denied`). Failures further down
/// turn into a `500` carrying the error message. Every reply is plain text,
/// so the upstream URL is never interpreted as markup.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<ServerState>>,
) -> Response {
    let Some(code) = params.get("code").filter(|c| !c.is_empty()) else {
        let reason = params
            .get("error")
            .map(|e| format!("Authorization failed: {}", e))
            .unwrap_or_else(|| "Missing authorization code.".to_string());
        warning!("{}", reason);
        return (StatusCode::BAD_REQUEST, reason).into_response();
    };

    let token = match spotify::auth::exchange_code(&state.http, &state.spotify, code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return e.into_response();
        }
    };

    success!("Authorization code exchanged.");
    if let Some(refresh_token) = &token.refresh_token {
        info!("Refresh token (set as SPOTIFY_REFRESH_TOKEN): {}", refresh_token);
    }

    match spotify::player::fetch_current_url(&state.http, &state.spotify, &token.access_token).await
    {
        Ok(Some(url)) => {
            info!("Now playing: {}", url);
            format!("Authentication successful.\nNow playing: {}\n", url).into_response()
        }
        Ok(None) => {
            info!("Nothing is playing right now.");
            "Authentication successful.\nNothing is playing.\n".into_response()
        }
        Err(e) => {
            warning!("Fetching the current track failed: {}", e);
            e.into_response()
        }
    }
}
