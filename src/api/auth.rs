use std::sync::Arc;

use axum::{Extension, response::Redirect};

use crate::{Res, server::ServerState};

/// Sends the browser to Spotify's consent page with a `307`.
pub async fn spotify_auth(Extension(state): Extension<Arc<ServerState>>) -> Res<Redirect> {
    let url = crate::spotify::auth::authorize_url(&state.spotify)?;
    Ok(Redirect::temporary(&url))
}
