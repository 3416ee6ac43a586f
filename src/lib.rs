//! Now-playing republisher library
//!
//! This library polls Spotify for the track currently playing, keeps the
//! short-lived access token in an Airtable record across runs, and posts the
//! track link to X whenever it changes. A small callback server performs the
//! authorization-code exchange that yields the long-lived refresh token.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local authorization server
//! - `cli` - Command-line interface implementations
//! - `config` - Environment loading and the injected configuration struct
//! - `cycle` - Change detection and the single check-and-publish pass
//! - `error` - Error taxonomy shared by every component
//! - `management` - Token persistence and refresh
//! - `server` - Local HTTP server wiring
//! - `spotify` - Spotify accounts and player API client
//! - `twitter` - OAuth 1.0a signing and post creation
//! - `types` - Data structures and wire shapes
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use nowplaying::{config::Config, cycle::{self, Context, CycleState}};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> nowplaying::Res<()> {
//!     let ctx = Context::new(Config::from_env()?)?;
//!     let mut state = CycleState::default();
//!     let outcome = cycle::run_cycle(&ctx, &mut state).await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod cycle;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod twitter;
pub mod types;
pub mod utils;

pub use error::Error;

/// Result alias used by every fallible operation in the crate.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Checking what is playing...");
/// info!("Stored token expires at {}", expires);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Exits with code 1 unless a code is given with the `code = N;` prefix.
/// Only used for failures where the current invocation cannot continue.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// error!(code = 2; "Could not publish: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  (code = $code:expr; $($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit($code);
  });
  ($($arg:tt)*) => ({
    $crate::error!(code = 1; $($arg)*)
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as an unreadable token record that will
/// simply be replaced by a fresh one.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line.
///
/// Only the optional HTTP dump hook calls this; nothing depends on its output.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    let line = std::format!($($arg)*);
    eprintln!("[{}] {}", "~".bright_black(), line.bright_black());
  })
}
