use crate::{
    config::Config,
    cycle::{self, Context, CycleOutcome, CycleState},
    error, info, success,
};

/// Single pass, meant to be started periodically by cron or a systemd timer.
///
/// Exit codes: `0` done or nothing playing, `1` configuration or client
/// failure, `2` publish failure.
pub async fn run(verbose: bool) {
    let ctx = match context(verbose) {
        Ok(ctx) => ctx,
        Err(e) => error!(code = e.exit_code(); "{}", e),
    };

    let mut state = CycleState::default();
    match cycle::run_cycle(&ctx, &mut state).await {
        Ok(outcome) => report(&outcome),
        Err(e) => error!(code = e.exit_code(); "{}", e),
    }
}

pub(crate) fn context(verbose: bool) -> crate::Res<Context> {
    let mut config = Config::from_env()?;
    config.spotify.log_http |= verbose;
    Context::new(config)
}

pub(crate) fn report(outcome: &CycleOutcome) {
    match outcome {
        CycleOutcome::Published(url) => success!("Published {}", url),
        CycleOutcome::Unchanged(url) => info!("Still playing {}, nothing to publish", url),
        CycleOutcome::NothingPlaying => info!("Nothing is playing."),
    }
}
