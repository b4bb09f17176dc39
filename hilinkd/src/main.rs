use clap::Parser;
use color_eyre::eyre::Result;
use hilinkd::client::{ModemClient, DEFAULT_IP};
use hilinkd::control;
use std::time::Duration;
use tokio::signal::unix::{self, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "HiLink modem monitoring daemon",
    long_about = "Polls a HiLink modem's HTTP API and emits status snapshots"
)]
struct Args {
    /// Modem IP address
    #[clap(long, default_value = DEFAULT_IP)]
    ip: String,

    /// Poll interval in seconds
    #[clap(long, default_value_t = 5)]
    interval: u64,

    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser, Debug)]
enum SubCommand {
    /// Poll the modem and emit status snapshots until terminated
    #[clap(action)]
    Daemon,

    /// Switch mobile data on
    #[clap(action)]
    Connect,

    /// Switch mobile data off
    #[clap(action)]
    Disconnect,

    /// Reboot the modem
    #[clap(action)]
    Reboot,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let result = match args.subcmd {
        SubCommand::Daemon => return daemon(&args).await,
        SubCommand::Connect => control::connect(&ModemClient::new(&args.ip)?).await,
        SubCommand::Disconnect => {
            control::disconnect(&ModemClient::new(&args.ip)?).await
        }
        SubCommand::Reboot => control::reboot(&ModemClient::new(&args.ip)?).await,
    };

    // Command outcomes are logged, not surfaced: the next poll cycle is the
    // source of truth for whether the modem acted on them.
    if let Err(e) = result {
        error!("command failed: {e}");
    }

    Ok(())
}

async fn daemon(args: &Args) -> Result<()> {
    let shutdown = CancellationToken::new();

    let mut sigterm = unix::signal(SignalKind::terminate())?;
    let mut sigint = unix::signal(SignalKind::interrupt())?;

    let signals = shutdown.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => warn!("received SIGTERM"),
            _ = sigint.recv()  => warn!("received SIGINT"),
        }
        signals.cancel();
    });

    hilinkd::run(&args.ip, Duration::from_secs(args.interval), shutdown).await
}
