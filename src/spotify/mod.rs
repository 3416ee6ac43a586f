//! # Spotify Integration Module
//!
//! Client side of the two Spotify services the application talks to.
//!
//! ```text
//! Cycle / Callback handler
//!          ↓
//! Spotify Integration Layer
//!     ├── Accounts (authorize URL, refresh grant, code grant)
//!     └── Player (currently playing)
//!          ↓
//! HTTP Layer (reqwest, serde_json)
//! ```
//!
//! ## Accounts
//!
//! [`auth`] talks to `accounts.spotify.com`. Both grant types authenticate
//! the application with HTTP Basic auth built from the client id and secret,
//! and return the decoded [`TokenResponse`](crate::types::TokenResponse).
//! Persisting the result is left to
//! [`TokenManager`](crate::management::TokenManager).
//!
//! ## Player
//!
//! [`player`] reads `GET /me/player/currently-playing`:
//! - `204 No Content` means nothing is playing and yields `None`
//! - `200 OK` is decoded untyped and walked down to the public link
//! - anything else is an [`Error::Status`](crate::Error::Status)
//!
//! With `log_http` set in the configuration the request and response are
//! dumped through [`debug!`](crate::debug), bearer token masked.
//!
//! Requests carry no timeout and are never retried.

pub mod auth;
pub mod player;
