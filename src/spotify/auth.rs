use reqwest::{Client, Url};

use crate::{
    Error, Res,
    config::{SPOTIFY_SCOPE, SpotifyConfig},
    types::TokenResponse,
    utils,
};

/// Builds the URL the browser is sent to for user consent.
///
/// # Example
///
/// ```text
/// https://accounts.spotify.com/authorize?client_id=...&response_type=code
///     &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcallback
///     &scope=user-read-currently-playing
/// ```
pub fn authorize_url(config: &SpotifyConfig) -> Res<String> {
    let url = Url::parse_with_params(
        &config.authorize_url(),
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", SPOTIFY_SCOPE),
        ],
    )
    .map_err(|e| Error::Config(format!("invalid Spotify accounts URL: {}", e)))?;

    Ok(url.into())
}

/// Trades the long-lived refresh token for a fresh access token.
///
/// # Errors
///
/// - [`Error::Config`] when no refresh token is configured
/// - [`Error::Request`], [`Error::Status`], [`Error::Decode`] from the grant
pub async fn refresh_access_token(
    client: &Client,
    config: &SpotifyConfig,
) -> Res<TokenResponse> {
    let refresh_token = config
        .refresh_token
        .as_deref()
        .ok_or_else(|| Error::Config("SPOTIFY_REFRESH_TOKEN is not set".to_string()))?;

    request_token(
        client,
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
    .await
}

/// Completes the authorization-code flow started by [`authorize_url`].
///
/// The answer carries the refresh token the publishing cycle needs.
///
/// # Errors
///
/// [`Error::Request`], [`Error::Status`], [`Error::Decode`] from the grant.
pub async fn exchange_code(
    client: &Client,
    config: &SpotifyConfig,
    code: &str,
) -> Res<TokenResponse> {
    request_token(
        client,
        config,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
    .await
}

async fn request_token(
    client: &Client,
    config: &SpotifyConfig,
    form: &[(&str, &str)],
) -> Res<TokenResponse> {
    let res = client
        .post(config.token_url())
        .header(
            reqwest::header::AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(form)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::status("Spotify token endpoint", status));
    }

    let body = res.text().await?;
    Ok(serde_json::from_str(&body)?)
}
