use tabled::Table;

use crate::{
    cli::run::context,
    error,
    management::{self, TokenManager},
    success,
    types::{TokenRecord, TokenTableRow},
    utils,
};

/// Shows the stored token record, refreshing it first when asked to.
pub async fn token(refresh: bool, verbose: bool) {
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

    if refresh {
        match manager.refresh().await {
            Ok(_) => success!("Token refreshed and stored."),
            Err(e) => error!("Cannot refresh token. Err: {}", e),
        }
    }

    println!("{}", Table::new(vec![table_row(manager.current_token())]));
}

fn table_row(token: &TokenRecord) -> TokenTableRow {
    let valid = !token.value.is_empty() && management::is_valid(token);
    TokenTableRow {
        token: utils::mask_secret(&token.value),
        created: utils::format_timestamp_ms(token.created_at_ms),
        expires: utils::format_timestamp_ms(token.expires_at_ms()),
        valid: if valid { "yes" } else { "no" }.to_string(),
    }
}
