//! The composite status emitted once per poll cycle.

use serde::Serialize;
use std::fmt;

/// Semantic connection state decoded from the modem's numeric codes.
///
/// `Unknown` covers codes outside the documented 900..=903 range; these are
/// firmware variance, not errors. `ModemOffline` is never decoded from a
/// code: the aggregator sets it when the status endpoints are unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnecting,
    Disconnected,
    #[default]
    ModemOffline,
    Unknown,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
            Self::Disconnecting => "Disconnecting",
            Self::Disconnected => "Disconnected",
            Self::ModemOffline => "Modem offline",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl ConnectionStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// One coherent reading of the modem, produced by every poll cycle, even a
/// cycle where every endpoint failed (then it equals [`Snapshot::offline`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Snapshot {
    /// Vendor-provided 0-5 icon bucket; 0 means no signal or unknown.
    pub signal_level: u8,
    pub connection_status: ConnectionStatus,
    /// `"{operator} {network_type}"`, operator segment omitted when empty.
    pub operator_label: String,
    pub network_type: String,
    /// `(key, "KEY: value")` pairs in fixed key order, non-empty values only.
    pub signal_params: Vec<(&'static str, String)>,
    pub unread_messages: u32,
}

impl Snapshot {
    /// The fully degraded snapshot: modem offline, everything else empty.
    pub fn offline() -> Self {
        Self::default()
    }
}
