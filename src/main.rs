use std::path::PathBuf;

use clap::Parser;

use clickdeck::app::App;
use clickdeck::config::Config;
use clickdeck::error::AppResult;
use clickdeck::logging::{LogSink, Verbosity, init_logging};

/// Terminal dashboard that records clicks on three navigation cards.
#[derive(Debug, Parser)]
#[command(name = "clickdeck", version)]
struct Cli {
    /// Config file (defaults to $CLICKDECK_CONFIG_PATH or the XDG location).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file instead of the configured one.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
    let sink = LogSink::resolve(log_file)?;
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose), sink);

    let mut app = App::new_with_config(config);
    app.run().await
}
