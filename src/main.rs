use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use nowplaying::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Dump request and response of the currently-playing call
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check once and publish the track if it changed
    Run,

    /// Keep checking at a fixed interval
    Watch(WatchOptions),

    /// Start the local Spotify authorization server
    Serve(ServeOptions),

    /// Show the stored access token
    Token(TokenOptions),

    /// Show the track that is playing right now
    Now,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct WatchOptions {
    /// Seconds between two checks
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the authorization page in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TokenOptions {
    /// Refresh and store a new token before showing it
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    match cli.command {
        Command::Run => cli::run(cli.verbose).await,
        Command::Watch(opt) => cli::watch(opt.interval, cli.verbose).await,
        Command::Serve(opt) => cli::serve(opt.open, cli.verbose).await,
        Command::Token(opt) => cli::token(opt.refresh, cli.verbose).await,
        Command::Now => cli::now(cli.verbose).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
