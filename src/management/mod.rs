mod store;
mod token;

pub use store::TokenStore;
pub use token::EXPIRY_MARGIN_SECS;
pub use token::TokenManager;
pub use token::is_valid;
pub use token::is_valid_at;
pub use token::record_from_grant;
