//! Poll cycle orchestration: one best-effort [`Snapshot`] per cycle, on a
//! fixed cadence, off the consumer's thread.

use crate::client::ModemClient;
use crate::decode;
use crate::snapshot::{ConnectionStatus, Snapshot};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const STOP_GRACE: Duration = Duration::from_secs(10);
const SNAPSHOT_BUFFER: usize = 8;

/// Runs one full poll cycle and composes a snapshot.
///
/// Each endpoint is fetched sequentially and decoded independently; a
/// failure in one degrades only its own fields. This never fails; the
/// worst case is [`Snapshot::offline`].
pub async fn poll_once(client: &ModemClient) -> Snapshot {
    let session = client.refresh_session().await;

    let unread_messages = match client.notifications(&session).await {
        Ok(n) => n.unread_messages.unwrap_or(0),
        Err(e) => {
            warn!("check-notifications unavailable: {e}");
            0
        }
    };

    let status = client.device_status(&session).await;
    let plmn = client.current_plmn(&session).await;

    let (signal_level, connection_status, network_type, operator_label) =
        match (status, plmn) {
            (Ok(status), Ok(plmn)) => {
                let network_type = decode::network_type(
                    status.network_type_ex.as_deref(),
                    status.network_type.as_deref(),
                );
                let operator = decode::operator(&plmn);

                (
                    decode::signal_level(status.signal_icon.as_deref()),
                    decode::connection_status(status.connection_status.as_deref()),
                    network_type.to_owned(),
                    decode::operator_label(&operator, network_type),
                )
            }
            (status, plmn) => {
                if let Err(e) = &status {
                    warn!("monitoring/status unavailable: {e}");
                }
                if let Err(e) = &plmn {
                    warn!("net/current-plmn unavailable: {e}");
                }
                (0, ConnectionStatus::ModemOffline, String::new(), String::new())
            }
        };

    let signal_params = match client.device_signal(&session).await {
        Ok(signal) => decode::signal_params(&signal),
        Err(e) => {
            warn!("device/signal unavailable: {e}");
            Vec::new()
        }
    };

    Snapshot {
        signal_level,
        connection_status,
        operator_label,
        network_type,
        signal_params,
        unread_messages,
    }
}

/// Handle to a running poll loop.
pub struct Poller {
    interval_tx: watch::Sender<Duration>,
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Changes the poll cadence. Takes effect at the next scheduling tick;
    /// an in-flight cycle is unaffected.
    pub fn set_interval(&self, interval: Duration) {
        let _ = self.interval_tx.send(interval);
    }

    /// Stops the loop, letting an in-flight cycle finish (bounded by the
    /// per-call timeouts). No snapshot is emitted after this returns.
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if time::timeout(STOP_GRACE, &mut self.handle).await.is_err() {
            warn!("poller did not stop within {STOP_GRACE:?}, aborting");
            self.handle.abort();
        }
    }
}

/// Spawns the poll loop on a detached task. Snapshots arrive on the
/// returned channel in emission order; the first cycle starts immediately.
pub fn spawn(
    client: ModemClient,
    interval: Duration,
    shutdown: CancellationToken,
) -> (Poller, mpsc::Receiver<Snapshot>) {
    info!("starting modem poller, interval {interval:?}");

    let (snapshot_tx, snapshot_rx) = mpsc::channel(SNAPSHOT_BUFFER);
    let (interval_tx, interval_rx) = watch::channel(interval);
    let token = shutdown.clone();

    let handle = tokio::spawn(run_loop(client, interval_rx, snapshot_tx, token));

    let poller = Poller {
        interval_tx,
        shutdown,
        handle,
    };

    (poller, snapshot_rx)
}

async fn run_loop(
    client: ModemClient,
    mut interval_rx: watch::Receiver<Duration>,
    snapshot_tx: mpsc::Sender<Snapshot>,
    shutdown: CancellationToken,
) {
    loop {
        if shutdown.is_cancelled() {
            break;
        }

        let snapshot = poll_once(&client).await;

        match snapshot_tx.try_send(snapshot) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("snapshot consumer is lagging, dropping snapshot");
            }
            Err(TrySendError::Closed(_)) => break,
        }

        if !sleep_phase(&mut interval_rx, &shutdown).await {
            break;
        }
    }
}

/// Waits out the current poll interval. Returns `false` on shutdown. An
/// interval change during the wait re-arms it with the new value, so the
/// change takes effect on the next tick rather than the in-flight one.
async fn sleep_phase(
    interval_rx: &mut watch::Receiver<Duration>,
    shutdown: &CancellationToken,
) -> bool {
    loop {
        let sleep_for = *interval_rx.borrow_and_update();

        tokio::select! {
            _ = shutdown.cancelled() => return false,
            _ = time::sleep(sleep_for) => return true,
            changed = interval_rx.changed() => {
                if changed.is_err() {
                    // Poller handle was dropped without stop(); keep the
                    // last configured interval.
                    time::sleep(sleep_for).await;
                    return true;
                }
            }
        }
    }
}
