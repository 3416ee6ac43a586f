use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::{
    cli::run::{context, report},
    cycle::{self, CycleState},
    error, warning,
};

/// Repeats the pass in-process, keeping token and previous URL in memory.
///
/// Failed passes are reported. A token refreshed during a failed pass is
/// kept, and the previous URL only moves on after a successful publish.
pub async fn watch(interval: u64, verbose: bool) {
    let ctx = match context(verbose) {
        Ok(ctx) => ctx,
        Err(e) => error!(code = e.exit_code(); "{}", e),
    };

    let mut state = CycleState::default();
    loop {
        match cycle::run_cycle(&ctx, &mut state).await {
            Ok(outcome) => report(&outcome),
            Err(e) => warning!("{}", e),
        }

        wait(interval).await;
    }
}

async fn wait(secs: u64) {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    for remaining in (1..=secs).rev() {
        pb.set_message(format!("Next check in {}s...", remaining));
        sleep(Duration::from_secs(1)).await;
    }

    pb.finish_and_clear();
}
