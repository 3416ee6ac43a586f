use reqwest::Client;

use crate::{
    Res,
    config::{AirtableConfig, SpotifyConfig},
    management::TokenStore,
    spotify,
    types::TokenRecord,
    utils, warning,
};

/// Seconds taken off the provider's lifetime before a token counts as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 300;

/// Whether `token` can still be used at `now_ms`.
///
/// The boundary itself is already expired.
pub fn is_valid_at(token: &TokenRecord, now_ms: i64) -> bool {
    now_ms < token.expires_at_ms()
}

/// [`is_valid_at`] against the system clock.
pub fn is_valid(token: &TokenRecord) -> bool {
    is_valid_at(token, utils::now_ms())
}

/// Builds the record persisted after a refresh.
///
/// The provider reports the lifetime in seconds; the margin is subtracted
/// before converting to milliseconds.
pub fn record_from_grant(access_token: String, expires_in_secs: i64, now_ms: i64) -> TokenRecord {
    TokenRecord {
        value: access_token,
        expiry_offset_ms: expires_in_secs
            .saturating_sub(EXPIRY_MARGIN_SECS)
            .saturating_mul(1000),
        created_at_ms: now_ms,
    }
}

/// Hands out a usable access token, refreshing and persisting it on demand.
pub struct TokenManager {
    client: Client,
    spotify: SpotifyConfig,
    store: TokenStore,
    token: TokenRecord,
}

impl TokenManager {
    /// Starts from a token already in hand, skipping the store read.
    pub fn new(
        client: Client,
        spotify: SpotifyConfig,
        airtable: AirtableConfig,
        token: TokenRecord,
    ) -> Self {
        let store = TokenStore::new(client.clone(), airtable);
        TokenManager {
            client,
            spotify,
            store,
            token,
        }
    }

    /// Reads the stored record once.
    ///
    /// An unreadable record is not fatal; it is treated as absent so the next
    /// [`get_valid_token`](Self::get_valid_token) replaces it.
    pub async fn load(client: Client, spotify: SpotifyConfig, airtable: AirtableConfig) -> Self {
        let mut manager = Self::new(client, spotify, airtable, TokenRecord::default());
        match manager.store.get_token().await {
            Ok(token) => manager.token = token,
            Err(e) => warning!("Unable to read stored token: {}", e),
        }
        manager
    }

    /// Returns the current access token, refreshing it first when it is
    /// absent or expired.
    ///
    /// # Errors
    ///
    /// Whatever [`refresh`](Self::refresh) returns; the held token is left
    /// as it was.
    pub async fn get_valid_token(&mut self) -> Res<String> {
        if self.token.value.is_empty() || !is_valid(&self.token) {
            self.refresh().await?;
        }

        Ok(self.token.value.clone())
    }

    /// Exchanges the refresh token for a new access token and persists it.
    ///
    /// The stored record is only touched once the provider has answered, so a
    /// failed grant leaves the previous record in place.
    ///
    /// # Errors
    ///
    /// - Anything [`refresh_access_token`](spotify::auth::refresh_access_token) returns
    /// - [`Error::Status`](crate::Error::Status) when the store rejects the write
    pub async fn refresh(&mut self) -> Res<TokenRecord> {
        let grant = spotify::auth::refresh_access_token(&self.client, &self.spotify).await?;
        let token = record_from_grant(grant.access_token, grant.expires_in, utils::now_ms());

        self.store.put_token(&token).await?;
        self.token = token.clone();
        Ok(token)
    }

    pub fn current_token(&self) -> &TokenRecord {
        &self.token
    }

    /// Gives back the token so the caller can carry it into the next pass.
    pub fn into_token(self) -> TokenRecord {
        self.token
    }
}
