//! Configuration management for the now-playing republisher.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Everything is read once into a [`Config`] that gets passed to the
//! components explicitly; nothing below this module touches the environment.
//!
//! Lookup order:
//! 1. Process environment (highest priority, `.env` never overrides it)
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/nowplaying/.env`)
//! 4. Defaults for the optional endpoint and server settings

use std::{env, path::PathBuf, str::FromStr};

use crate::{Error, Res};

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/callback";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TWITTER_API_URL: &str = "https://api.twitter.com";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const SPOTIFY_SCOPE: &str = "user-read-currently-playing";

/// Loads environment variables from `.env` files.
///
/// The working directory is tried first, then the platform-specific local
/// data directory:
/// - Linux: `~/.local/share/nowplaying/.env`
/// - macOS: `~/Library/Application Support/nowplaying/.env`
/// - Windows: `%LOCALAPPDATA%/nowplaying/.env`
///
/// The data directory is created when missing so the user knows where to
/// put the file.
///
/// # Errors
///
/// Returns an error string when neither file could be loaded. Callers treat
/// this as a warning because the process environment may already carry
/// every value.
pub async fn load_env() -> Result<PathBuf, String> {
    if let Ok(path) = dotenv::dotenv() {
        return Ok(path);
    }

    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path)
        .map(|_| path.clone())
        .map_err(|e| format!("no .env loaded from {}: {}", path.display(), e))
}

/// Location of the per-user `.env` file.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowplaying/.env");
    path
}

/// Which branch of the currently-playing payload carries the public link.
///
/// `item` is the playing track itself; `context` is the album or playlist
/// it is played from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackSource {
    #[default]
    Item,
    Context,
}

impl TrackSource {
    /// Top-level key of the branch in the payload.
    pub fn key(&self) -> &'static str {
        match self {
            TrackSource::Item => "item",
            TrackSource::Context => "context",
        }
    }
}

impl FromStr for TrackSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "item" => Ok(TrackSource::Item),
            "context" => Ok(TrackSource::Context),
            other => Err(format!(
                "unknown track source '{}', expected 'item' or 'context'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Only the publishing cycle needs it; the callback server is how one is obtained.
    pub refresh_token: Option<String>,
    pub redirect_uri: String,
    pub accounts_url: String,
    pub api_url: String,
    pub track_source: TrackSource,
    /// Dump request and response of the player call.
    pub log_http: bool,
}

impl SpotifyConfig {
    pub fn authorize_url(&self) -> String {
        format!("{}/authorize", self.accounts_url.trim_end_matches('/'))
    }

    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url.trim_end_matches('/'))
    }

    pub fn currently_playing_url(&self) -> String {
        format!(
            "{}/me/player/currently-playing",
            self.api_url.trim_end_matches('/')
        )
    }

    /// Reads only what the callback server needs.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Same as [`from_env`](Self::from_env) with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Res<Self> {
        let mut reader = EnvReader::new(&lookup);
        let config = Self::read(&mut reader, false);
        reader.finish()?;
        config
    }

    fn read(reader: &mut EnvReader<'_>, need_refresh_token: bool) -> Res<Self> {
        let client_id = reader.required("SPOTIFY_CLIENT_ID");
        let client_secret = reader.required("SPOTIFY_CLIENT_SECRET");
        let refresh_token = if need_refresh_token {
            Some(reader.required("SPOTIFY_REFRESH_TOKEN"))
        } else {
            reader.optional("SPOTIFY_REFRESH_TOKEN")
        };

        let track_source = match reader.optional("SPOTIFY_TRACK_SOURCE") {
            Some(raw) => raw.parse().map_err(Error::Config)?,
            None => TrackSource::default(),
        };

        Ok(Self {
            client_id,
            client_secret,
            refresh_token,
            redirect_uri: reader.or_default("SPOTIFY_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            accounts_url: reader.or_default("SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL),
            api_url: reader.or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
            track_source,
            log_http: reader.flag("NOWPLAYING_LOG_HTTP"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table_id: String,
    pub record_id: String,
    pub api_url: String,
}

impl AirtableConfig {
    /// `<api_url>/<base>/<table>/<record>`
    pub fn record_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.base_id,
            self.table_id,
            self.record_id
        )
    }

    fn read(reader: &mut EnvReader<'_>) -> Self {
        Self {
            api_key: reader.required("AIRTABLE_API_KEY"),
            base_id: reader.required("AIRTABLE_BASE_ID"),
            table_id: reader.required("AIRTABLE_TABLE_ID"),
            record_id: reader.required("AIRTABLE_RECORD_ID"),
            api_url: reader.or_default("AIRTABLE_API_URL", DEFAULT_AIRTABLE_API_URL),
        }
    }
}

/// User-context credentials for the X API.
///
/// The consumer pair identifies the app, the access pair the account that
/// posts.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_secret: String,
    pub api_url: String,
}

impl TwitterConfig {
    pub fn tweets_url(&self) -> String {
        format!("{}/2/tweets", self.api_url.trim_end_matches('/'))
    }

    fn read(reader: &mut EnvReader<'_>) -> Self {
        Self {
            api_key: reader.required("TW_API_KEY"),
            api_secret: reader.required("TW_API_SECRET"),
            access_token: reader.required("TW_ACCESS_TOKEN"),
            access_secret: reader.required("TW_ACCESS_SECRET"),
            api_url: reader.or_default("TWITTER_API_URL", DEFAULT_TWITTER_API_URL),
        }
    }
}

/// Everything one check-and-publish pass needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub spotify: SpotifyConfig,
    pub airtable: AirtableConfig,
    pub twitter: TwitterConfig,
}

impl Config {
    /// Reads the full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming every missing variable at once.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// let ctx = Context::new(config)?;
    /// ```
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Same as [`from_env`](Self::from_env) with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Res<Self> {
        let mut reader = EnvReader::new(&lookup);
        let twitter = TwitterConfig::read(&mut reader);
        let airtable = AirtableConfig::read(&mut reader);
        let spotify = SpotifyConfig::read(&mut reader, true);
        reader.finish()?;

        Ok(Self {
            spotify: spotify?,
            airtable,
            twitter,
        })
    }
}

/// Returns the address the callback server binds to.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

fn env_lookup(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Collects missing variables instead of stopping at the first one.
struct EnvReader<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
    missing: Vec<&'static str>,
}

impl<'a> EnvReader<'a> {
    fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            lookup,
            missing: Vec::new(),
        }
    }

    fn optional(&self, name: &'static str) -> Option<String> {
        (self.lookup)(name).filter(|v| !v.trim().is_empty())
    }

    fn required(&mut self, name: &'static str) -> String {
        match self.optional(name) {
            Some(value) => value,
            None => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    fn or_default(&self, name: &'static str, default: &str) -> String {
        self.optional(name).unwrap_or_else(|| default.to_string())
    }

    fn flag(&self, name: &'static str) -> bool {
        matches!(
            self.optional(name).as_deref().map(str::to_lowercase).as_deref(),
            Some("1" | "true" | "yes" | "on")
        )
    }

    fn finish(self) -> Res<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "missing required environment variable(s): {}",
                self.missing.join(", ")
            )))
        }
    }
}
