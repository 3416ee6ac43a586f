//! Posting to X (formerly Twitter).
//!
//! Requests are signed with OAuth 1.0a in user context: the app's consumer
//! key pair plus the long-lived access pair of the posting account. Posts
//! are created through the v2 `POST /2/tweets` endpoint with a JSON body,
//! which is why only the `oauth_*` parameters enter the signature.

pub mod oauth;
pub mod tweets;

pub use tweets::publish;
