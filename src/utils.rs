use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Local, Utc};

/// Current Unix time in milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Builds the `Authorization` value for the Spotify accounts service.
///
/// The accounts service takes the client credentials as HTTP Basic auth:
/// `Basic base64(client_id:client_secret)`.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Keeps the first few characters of a secret so records can be told apart.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "-".to_string();
    }

    let visible: String = secret.chars().take(6).collect();
    if visible.chars().count() == secret.chars().count() {
        "*".repeat(visible.chars().count())
    } else {
        format!("{}…", visible)
    }
}

/// Formats epoch milliseconds in local time, `-` for the zero value.
pub fn format_timestamp_ms(ms: i64) -> String {
    if ms <= 0 {
        return "-".to_string();
    }

    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

/// `m:ss` representation of a track length.
pub fn format_duration_ms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
