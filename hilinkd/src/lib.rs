//! Daemon that polls a HiLink-style LTE/3G modem's embedded HTTP API and
//! emits connectivity/signal snapshots.

use crate::client::ModemClient;
use eyre::Result;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub mod client;
pub mod control;
pub mod decode;
pub mod monitor;
pub mod session;
pub mod snapshot;
pub mod wire;

/// Polls the modem until `shutdown` is cancelled, logging each snapshot as
/// single-line JSON. Returns after the poller has stopped gracefully.
pub async fn run(
    ip: &str,
    poll_interval: Duration,
    shutdown: CancellationToken,
) -> Result<()> {
    let client = ModemClient::new(ip)?;
    let (poller, mut snapshots) = monitor::spawn(client, poll_interval, shutdown);

    while let Some(snapshot) = snapshots.recv().await {
        match serde_json::to_string(&snapshot) {
            Ok(json) => info!("modem status: {json}"),
            Err(e) => error!("failed to serialize snapshot: {e}"),
        }
    }

    poller.stop().await;
    info!("modem poller stopped");

    Ok(())
}
