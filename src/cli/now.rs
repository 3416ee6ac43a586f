use tabled::Table;

use crate::{
    cli::run::context,
    error, info,
    management::TokenManager,
    spotify,
    types::TrackTableRow,
    utils,
};

/// Prints what is playing without publishing anything.
pub async fn now(verbose: bool) {
    let ctx = match context(verbose) {
        Ok(ctx) => ctx,
        Err(e) => error!(code = e.exit_code(); "{}", e),
    };

    let mut manager = TokenManager::load(
        ctx.http.clone(),
        ctx.config.spotify.clone(),
        ctx.config.airtable.clone(),
    )
    .await;

    let access_token = match manager.get_valid_token().await {
        Ok(t) => t,
        Err(e) => error!("Cannot obtain access token. Err: {}", e),
    };

    match spotify::player::fetch_current_track(&ctx.http, &ctx.config.spotify, &access_token).await
    {
        Ok(Some(track)) => {
            let row = TrackTableRow {
                name: track.name,
                artist: track.artist,
                album: track.album,
                length: utils::format_duration_ms(track.duration),
                url: track.url,
            };
            println!("{}", Table::new(vec![row]));
        }
        Ok(None) => info!("Nothing is playing."),
        Err(e) => error!("Cannot fetch current track. Err: {}", e),
    }
}
