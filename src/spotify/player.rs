use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    Error, Res,
    config::{SpotifyConfig, TrackSource},
    debug,
    types::CurrentlyPlayingTrack,
};

/// Fetches the public link of whatever is playing.
///
/// Returns `Ok(None)` when Spotify answers `204 No Content`, i.e. nothing
/// is playing. The body is not looked at in that case.
///
/// # Errors
///
/// - [`Error::Status`] for anything other than `200` or `204`
/// - [`Error::Decode`] when the body is not JSON
/// - [`Error::FieldMissing`] naming the first key of
///   `<source>.external_urls.spotify` that is absent or not the right type
pub async fn fetch_current_url(
    client: &Client,
    config: &SpotifyConfig,
    access_token: &str,
) -> Res<Option<String>> {
    match fetch_currently_playing(client, config, access_token).await? {
        Some(payload) => extract_url(&payload, config.track_source).map(Some),
        None => Ok(None),
    }
}

/// Fetches name, artists, album and length of the playing track.
pub async fn fetch_current_track(
    client: &Client,
    config: &SpotifyConfig,
    access_token: &str,
) -> Res<Option<CurrentlyPlayingTrack>> {
    match fetch_currently_playing(client, config, access_token).await? {
        Some(payload) => extract_track(&payload).map(Some),
        None => Ok(None),
    }
}

/// Walks `<source>.external_urls.spotify` in a currently-playing payload.
///
/// # Example
///
/// ```
/// let payload = json!({ "item": { "external_urls": { "spotify": "https://open.spotify.com/track/A" } } });
/// assert_eq!(extract_url(&payload, TrackSource::Item)?, "https://open.spotify.com/track/A");
/// ```
pub fn extract_url(payload: &Value, source: TrackSource) -> Res<String> {
    let root = source.key();
    let branch = payload
        .get(root)
        .filter(|v| v.is_object())
        .ok_or_else(|| Error::field_missing(root))?;

    let urls = branch
        .get("external_urls")
        .filter(|v| v.is_object())
        .ok_or_else(|| Error::field_missing("external_urls"))?;

    urls.get("spotify")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::field_missing("spotify"))
}

/// Pulls the display fields of `item` out of a currently-playing payload.
///
/// Only the link and the track name are required. Artists are joined with
/// `, `; a missing album or length reads as empty or zero.
///
/// # Errors
///
/// [`Error::FieldMissing`] for the link path (see [`extract_url`]) or `name`.
pub fn extract_track(payload: &Value) -> Res<CurrentlyPlayingTrack> {
    let url = extract_url(payload, TrackSource::Item)?;
    let item = &payload["item"];

    let name = item["name"]
        .as_str()
        .ok_or_else(|| Error::field_missing("name"))?
        .to_string();

    let artist = item["artists"]
        .as_array()
        .map(|artists| {
            artists
                .iter()
                .filter_map(|a| a["name"].as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    Ok(CurrentlyPlayingTrack {
        name,
        artist,
        album: item["album"]["name"].as_str().unwrap_or_default().to_string(),
        duration: item["duration_ms"].as_u64().unwrap_or_default(),
        url,
    })
}

async fn fetch_currently_playing(
    client: &Client,
    config: &SpotifyConfig,
    access_token: &str,
) -> Res<Option<Value>> {
    let request = client
        .get(config.currently_playing_url())
        .bearer_auth(access_token)
        .build()?;

    if config.log_http {
        debug!("Request: {} {}", request.method(), request.url());
        for (name, value) in request.headers() {
            if *name == AUTHORIZATION {
                debug!("  {}: Bearer ***", name);
            } else {
                debug!("  {}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
        }
    }

    let res = client.execute(request).await?;
    let status = res.status();

    if config.log_http {
        debug!("Response: {}", status);
        for (name, value) in res.headers() {
            debug!("  {}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    if status != StatusCode::OK {
        return Err(Error::status("Spotify currently-playing", status));
    }

    let body = res.text().await?;
    if config.log_http {
        debug!("{}", body);
    }

    Ok(Some(serde_json::from_str(&body)?))
}
