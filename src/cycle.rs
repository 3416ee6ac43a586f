//! One check-and-maybe-publish pass.
//!
//! ```text
//! stored token ──(absent / expired)──► refresh ──► store
//!      │
//!      ▼
//! currently playing ──(204)──► NothingPlaying
//!      │
//!      ▼
//! url == previous? ──yes──► Unchanged
//!      │ no
//!      ▼
//! publish ──► Published, previous = url
//! ```
//!
//! All state lives in [`CycleState`], which the caller owns and lends to each
//! pass. A caller that drops it starts over with an empty previous URL and
//! republishes the first track it sees.

use reqwest::Client;

use crate::{
    Error, Res,
    config::Config,
    management::TokenManager,
    spotify, twitter,
    types::TokenRecord,
};

/// Shared HTTP client and configuration for every pass.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub http: Client,
}

impl Context {
    /// Builds the HTTP client. No timeouts are configured.
    pub fn new(config: Config) -> Res<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }
}

/// What the caller carries from one pass to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleState {
    /// `None` until the store has been read once.
    pub token: Option<TokenRecord>,
    /// Last URL that was published successfully, empty at start.
    pub previous_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Published(String),
    Unchanged(String),
    NothingPlaying,
}

/// Exact string comparison; URLs are not normalized.
pub fn should_publish(new_url: &str, previous_url: &str) -> bool {
    new_url != previous_url
}

/// Runs one pass, updating `state` for the next one.
///
/// The token is stored back into `state` as soon as it is known to be
/// usable, so a pass that refreshed it and then failed does not refresh
/// again next time. `previous_url` only changes after a successful publish;
/// a failed publish leaves it untouched and the same track is tried again.
///
/// # Errors
///
/// Token, store and player failures are returned as they happened. Publish
/// failures are wrapped in [`Error::Publish`] so the caller can tell them
/// apart.
///
/// # Example
///
/// ```
/// let mut state = CycleState::default();
/// match run_cycle(&ctx, &mut state).await? {
///     CycleOutcome::Published(url) => println!("posted {}", url),
///     _ => {}
/// }
/// ```
pub async fn run_cycle(ctx: &Context, state: &mut CycleState) -> Res<CycleOutcome> {
    let spotify = &ctx.config.spotify;

    let mut tokens = match state.token.take() {
        Some(token) => TokenManager::new(
            ctx.http.clone(),
            spotify.clone(),
            ctx.config.airtable.clone(),
            token,
        ),
        None => {
            TokenManager::load(ctx.http.clone(), spotify.clone(), ctx.config.airtable.clone())
                .await
        }
    };

    let access_token = tokens.get_valid_token().await;
    state.token = Some(tokens.into_token());
    let access_token = access_token?;

    let playing = spotify::player::fetch_current_url(&ctx.http, spotify, &access_token).await?;

    let Some(url) = playing else {
        return Ok(CycleOutcome::NothingPlaying);
    };

    if !should_publish(&url, &state.previous_url) {
        return Ok(CycleOutcome::Unchanged(url));
    }

    twitter::publish(&ctx.http, &ctx.config.twitter, &url)
        .await
        .map_err(|e| Error::Publish(Box::new(e)))?;

    state.previous_url = url.clone();
    Ok(CycleOutcome::Published(url))
}
