#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use nowplaying::config::{AirtableConfig, Config, SpotifyConfig, TrackSource, TwitterConfig};
use serde_json::{Value, json};

pub const TRACK_A: &str = "https://open.spotify.com/track/A";
pub const TRACK_B: &str = "https://open.spotify.com/track/B";

/// What the fake Spotify, Airtable and X services saw and will answer.
pub struct Upstream {
    pub stored: Mutex<Value>,
    /// Replaces the stored record on GET when set.
    pub record_reply: Mutex<Option<(u16, String)>>,
    pub patch_status: Mutex<u16>,
    pub patches: Mutex<Vec<Value>>,
    pub token_status: Mutex<u16>,
    pub token_requests: Mutex<Vec<(String, HashMap<String, String>)>>,
    pub playing: Mutex<(u16, String)>,
    pub player_auth: Mutex<Vec<String>>,
    pub tweet_status: Mutex<u16>,
    pub tweets: Mutex<Vec<(String, Value)>>,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            stored: Mutex::new(json!({ "id": "rec1", "fields": {} })),
            record_reply: Mutex::new(None),
            patch_status: Mutex::new(200),
            patches: Mutex::new(Vec::new()),
            token_status: Mutex::new(200),
            token_requests: Mutex::new(Vec::new()),
            playing: Mutex::new((204, String::new())),
            player_auth: Mutex::new(Vec::new()),
            tweet_status: Mutex::new(201),
            tweets: Mutex::new(Vec::new()),
        }
    }
}

impl Upstream {
    pub fn set_stored_token(&self, token: &str, expiry: i64, created: i64) {
        *self.stored.lock().unwrap() = json!({
            "id": "rec1",
            "createdTime": "2024-01-01T00:00:00.000Z",
            "fields": { "token": token, "expiry": expiry, "created": created }
        });
    }

    pub fn respond_record(&self, status: u16, body: &str) {
        *self.record_reply.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn play(&self, url: &str) {
        let body = json!({ "item": { "external_urls": { "spotify": url } } });
        *self.playing.lock().unwrap() = (200, body.to_string());
    }

    pub fn respond_player(&self, status: u16, body: &str) {
        *self.playing.lock().unwrap() = (status, body.to_string());
    }

    pub fn token_request_count(&self) -> usize {
        self.token_requests.lock().unwrap().len()
    }

    pub fn player_call_count(&self) -> usize {
        self.player_auth.lock().unwrap().len()
    }

    pub fn tweet_texts(&self) -> Vec<String> {
        self.tweets
            .lock()
            .unwrap()
            .iter()
            .map(|(_, body)| body["text"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

pub struct MockServer {
    pub base: String,
    pub upstream: Arc<Upstream>,
}

pub async fn start() -> MockServer {
    let upstream = Arc::new(Upstream::default());

    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me/player/currently-playing", get(currently_playing))
        .route("/v0/{base}/{table}/{record}", get(get_record).patch(patch_record))
        .route("/2/tweets", post(create_tweet))
        .with_state(Arc::clone(&upstream));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        base: format!("http://{}", addr),
        upstream,
    }
}

pub fn spotify_config(base: &str) -> SpotifyConfig {
    SpotifyConfig {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: Some("refresh-token".to_string()),
        redirect_uri: "http://localhost:8080/callback".to_string(),
        accounts_url: base.to_string(),
        api_url: format!("{}/v1", base),
        track_source: TrackSource::Item,
        log_http: false,
    }
}

pub fn config(base: &str) -> Config {
    Config {
        spotify: spotify_config(base),
        airtable: AirtableConfig {
            api_key: "airtable-key".to_string(),
            base_id: "app1".to_string(),
            table_id: "tbl1".to_string(),
            record_id: "rec1".to_string(),
            api_url: format!("{}/v0", base),
        },
        twitter: TwitterConfig {
            api_key: "consumer-key".to_string(),
            api_secret: "consumer-secret".to_string(),
            access_token: "access-token".to_string(),
            access_secret: "access-secret".to_string(),
            api_url: base.to_string(),
        },
    }
}

fn header(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn token(
    State(up): State<Arc<Upstream>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let from_code = form.get("grant_type").map(String::as_str) == Some("authorization_code");
    up.token_requests
        .lock()
        .unwrap()
        .push((header(&headers), form));

    let status = StatusCode::from_u16(*up.token_status.lock().unwrap()).unwrap();
    if !status.is_success() {
        return (status, Json(json!({ "error": "invalid_grant" })));
    }

    let mut body = json!({
        "access_token": "fresh-token",
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-read-currently-playing"
    });
    if from_code {
        body["refresh_token"] = json!("long-lived-refresh");
    }
    (status, Json(body))
}

async fn currently_playing(
    State(up): State<Arc<Upstream>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    up.player_auth.lock().unwrap().push(header(&headers));
    let (status, body) = up.playing.lock().unwrap().clone();
    (StatusCode::from_u16(status).unwrap(), body)
}

async fn get_record(
    State(up): State<Arc<Upstream>>,
    Path((_base, _table, _record)): Path<(String, String, String)>,
) -> (StatusCode, String) {
    if let Some((status, body)) = up.record_reply.lock().unwrap().clone() {
        return (StatusCode::from_u16(status).unwrap(), body);
    }
    (StatusCode::OK, up.stored.lock().unwrap().to_string())
}

async fn patch_record(
    State(up): State<Arc<Upstream>>,
    Path((_base, _table, record)): Path<(String, String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    up.patches.lock().unwrap().push(body.clone());

    let status = StatusCode::from_u16(*up.patch_status.lock().unwrap()).unwrap();
    if !status.is_success() {
        return (status, Json(json!({ "error": { "type": "SERVER_ERROR" } })));
    }

    let updated = json!({ "id": record, "fields": body["fields"].clone() });
    *up.stored.lock().unwrap() = updated.clone();
    (status, Json(updated))
}

async fn create_tweet(
    State(up): State<Arc<Upstream>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let status = StatusCode::from_u16(*up.tweet_status.lock().unwrap()).unwrap();
    if !status.is_success() {
        return (status, Json(json!({ "title": "Forbidden" })));
    }

    let text = body["text"].clone();
    up.tweets.lock().unwrap().push((header(&headers), body));
    (status, Json(json!({ "data": { "id": "1", "text": text } })))
}
