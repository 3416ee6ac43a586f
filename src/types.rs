use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Spotify access token as persisted in the Airtable record.
///
/// Valid while `now_ms < created_at_ms + expiry_offset_ms`. An empty value
/// means no token has been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRecord {
    #[serde(rename = "token")]
    pub value: String,
    #[serde(rename = "expiry")]
    pub expiry_offset_ms: i64,
    #[serde(rename = "created")]
    pub created_at_ms: i64,
}

impl TokenRecord {
    /// Instant the token stops being valid, clamped instead of overflowing
    /// on out-of-range values read from the store.
    pub fn expires_at_ms(&self) -> i64 {
        self.created_at_ms.saturating_add(self.expiry_offset_ms)
    }
}

/// Body of the Airtable record, on the way out and usually on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFields {
    pub fields: TokenRecord,
}

/// Airtable wraps the columns in `fields`; older records were stored flat.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredRecord {
    Envelope(RecordFields),
    Flat(TokenRecord),
}

impl StoredRecord {
    pub fn into_token(self) -> TokenRecord {
        match self {
            StoredRecord::Envelope(record) => record.fields,
            StoredRecord::Flat(token) => token,
        }
    }
}

/// Answer of the Spotify token endpoint for both grant types.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
}

/// Track details shown by `nowplaying now`; never published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentlyPlayingTrack {
    pub name: String,
    pub artist: String,
    pub album: String,
    #[serde(rename = "duration_ms")]
    pub duration: u64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTweetRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTweetResponse {
    pub data: CreatedTweet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTweet {
    pub id: String,
    pub text: String,
}

#[derive(Tabled)]
pub struct TokenTableRow {
    pub token: String,
    pub created: String,
    pub expires: String,
    pub valid: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub length: String,
    pub url: String,
}
