//! # API Module
//!
//! HTTP handlers of the local authorization server. The server exists to
//! run Spotify's authorization-code flow once and hand the operator the
//! refresh token the publishing cycle needs.
//!
//! ## Endpoints
//!
//! - [`spotify_auth`] - `GET /spotify/auth`, redirects (`307`) to the
//!   Spotify consent page for scope `user-read-currently-playing`
//! - [`callback`] - `GET /callback`, exchanges `?code=` for a token and
//!   logs the track that is playing; `400` without a code
//! - [`health`] - `GET /health`, status and version
//!
//! Handlers share nothing mutable; each callback performs its own exchange.
//!
//! ```rust,ignore
//! use nowplaying::server;
//!
//! let app = server::router(state);
//! ```

mod auth;
mod callback;
mod health;

pub use auth::spotify_auth;
pub use callback::callback;
pub use health::health;
