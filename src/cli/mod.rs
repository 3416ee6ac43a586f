//! # CLI Module
//!
//! Subcommand implementations. Each function owns its error reporting:
//! recoverable problems are printed with [`warning!`](crate::warning), fatal
//! ones end the process through [`error!`](crate::error) with the exit code
//! of the failure.
//!
//! ## Commands
//!
//! - [`run`] - one check-and-maybe-publish pass, for external schedulers
//! - [`watch`] - the same pass repeated in-process every few seconds
//! - [`serve`] - the authorization server used to obtain a refresh token
//! - [`token`] - shows (and optionally refreshes) the stored token record
//! - [`now`] - shows the current track without publishing it
//!
//! ## Usage Patterns
//!
//! ```bash
//! nowplaying serve --open          # authorize once, copy the refresh token
//! nowplaying run                   # from cron, e.g. every minute
//! nowplaying watch --interval 30   # or keep one process running
//! ```

mod now;
mod run;
mod serve;
mod token;
mod watch;

pub use now::now;
pub use run::run;
pub use serve::serve;
pub use token::token;
pub use watch::watch;
