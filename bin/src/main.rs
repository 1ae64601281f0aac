//! verhist CLI - Chrome version history lookup.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use verhist_lib::prelude::*;
use verhist_lib::url::HISTORY_BASE_URL;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "verhist")]
#[command(about = "Query the Chrome version history API", long_about = None)]
#[command(version)]
struct Cli {
    /// Print only the latest version
    #[arg(long)]
    latest: bool,

    /// Print a user agent string for the latest version
    #[arg(long)]
    latest_ua: bool,

    /// Platform (e.g., win64, linux, mac_arm64, android)
    #[arg(long, default_value = "win64")]
    platform: PlatformType,

    /// Release channel (e.g., stable, beta, dev, canary)
    #[arg(long, default_value = "stable")]
    channel: ChannelType,

    /// List available platforms
    #[arg(long, conflicts_with_all = ["latest", "latest_ua", "channels"])]
    platforms: bool,

    /// List channels available for --platform
    #[arg(long, conflicts_with_all = ["latest", "latest_ua"])]
    channels: bool,

    /// Version history API base URL
    #[arg(long, default_value = HISTORY_BASE_URL, hide = true)]
    history_url: String,

    /// Verbosity level (-v, -vv, -vvv); logs HTTP requests to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = ClientConfig::default().with_history_url(&cli.history_url);
    let mut client = HistoryClient::new(config)?;
    if cli.verbose > 0 {
        client = client.with_logging();
    }

    debug!(platform = %cli.platform, channel = %cli.channel, "querying version history");
    let out = io::stdout().lock();

    if cli.platforms {
        return commands::listing::platforms(&client, out).await;
    }
    if cli.channels {
        return commands::listing::channels(&client, out, cli.platform).await;
    }

    let mode = if cli.latest_ua {
        commands::versions::Mode::UserAgent
    } else if cli.latest {
        commands::versions::Mode::Latest
    } else {
        commands::versions::Mode::All
    };
    commands::versions::versions(&client, out, cli.platform, cli.channel, mode).await
}

/// Initialize the tracing subscriber from `RUST_LOG` or the verbosity flag.
fn init_tracing(verbose: u8) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "warn,verhist=debug,verhist_fetch=debug",
            2 => "info,verhist=debug,verhist_fetch=debug",
            _ => "debug,verhist=trace,verhist_fetch=trace",
        }
        .to_string()
    });
    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
