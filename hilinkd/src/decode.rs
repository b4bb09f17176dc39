//! Pure mappings from vendor codes to semantic values.
//!
//! Every function here is total: unrecognized codes come from firmware
//! variance and map to an explicit unknown/default value instead of
//! panicking or erroring.

use crate::snapshot::ConnectionStatus;
use crate::wire::{CurrentPlmn, DeviceSignal};

/// Decodes `ConnectionStatus` codes. An absent field decodes as
/// `Disconnected` (idle firmware omits it); an unrecognized code decodes as
/// `Unknown`.
pub fn connection_status(code: Option<&str>) -> ConnectionStatus {
    match code {
        Some("900") => ConnectionStatus::Connecting,
        Some("901") => ConnectionStatus::Connected,
        Some("902") => ConnectionStatus::Disconnected,
        Some("903") => ConnectionStatus::Disconnecting,
        None => ConnectionStatus::Disconnected,
        Some(_) => ConnectionStatus::Unknown,
    }
}

/// Decodes the radio access technology label. Prefers the extended
/// `CurrentNetworkTypeEx` enum; falls back to the legacy
/// `CurrentNetworkType` enum when the extended field is absent.
pub fn network_type(ex: Option<&str>, legacy: Option<&str>) -> &'static str {
    match (ex, legacy) {
        (Some(code), _) => network_type_ex(code),
        (None, Some(code)) => network_type_legacy(code),
        (None, None) => "No Service",
    }
}

/// `CurrentNetworkTypeEx` vendor enum, reproduced verbatim.
fn network_type_ex(code: &str) -> &'static str {
    match code {
        "0" => "No Service",
        "1" => "GSM",
        "2" => "GPRS",
        "3" => "EDGE",
        "21" => "IS-95A",
        "22" => "IS-95B",
        "23" => "CDMA 1X",
        "24" => "EV-DO Rev. 0",
        "25" => "EV-DO Rev. A",
        "26" => "EV-DO Rev. A",
        "27" => "Hybrid CDMA 1X",
        "28" => "Hybrid EV-DO Rev. 0",
        "29" => "Hybrid EV-DO Rev. A",
        "30" => "Hybrid EV-DO Rev. A",
        "31" => "eHPRD Rel. 0",
        "32" => "eHPRD Rel. A",
        "33" => "eHPRD Rel. B",
        "34" => "Hybrid eHPRD Rel. 0",
        "35" => "Hybrid eHPRD Rel. A",
        "36" => "Hybrid eHPRD Rel. B",
        "41" => "WCDMA",
        "42" => "HSDPA",
        "43" => "HSUPA",
        "44" => "HSPA",
        "45" => "HSPA+",
        "46" => "DC-HSPA+",
        "61" => "TD-SCDMA",
        "62" => "TD-HSDPA",
        "63" => "TD-HSUPA",
        "64" => "TD-HSPA",
        "65" => "TD-HSPA+",
        "81" => "802.16e",
        "101" => "LTE",
        _ => "Unknown",
    }
}

/// `CurrentNetworkType` legacy vendor enum, pre-`Ex` firmware.
fn network_type_legacy(code: &str) -> &'static str {
    match code {
        "0" => "No Service",
        "1" => "GSM",
        "2" => "GPRS",
        "3" => "EDGE",
        "4" => "WCDMA",
        "5" => "HSDPA",
        "6" => "HSUPA",
        "7" => "HSPA",
        "8" => "TD-SCDMA",
        "9" => "HSPA+",
        "10" => "EV-DO Rev. 0",
        "11" => "EV-DO Rev. A",
        "12" => "EV-DO Rev. B",
        "13" => "1xRTT",
        "14" => "UMB",
        "15" => "1xEVDV",
        "16" => "3xRTT",
        "17" => "HSPA+ 64QAM",
        "18" => "HSPA+ MIMO",
        "19" => "LTE",
        _ => "Unknown",
    }
}

/// 0-5 icon bucket from `SignalIcon`. Absent or unparsable → 0.
pub fn signal_level(icon: Option<&str>) -> u8 {
    icon.and_then(|v| v.parse::<u8>().ok())
        .map(|level| level.min(5))
        .unwrap_or(0)
}

/// Carrier name: short name preferred, full name as fallback, empty when
/// neither is present.
pub fn operator(plmn: &CurrentPlmn) -> String {
    plmn.short_name
        .clone()
        .or_else(|| plmn.full_name.clone())
        .unwrap_or_default()
}

/// `"{operator} {network_type}"`, with the operator segment omitted when
/// the carrier name is unavailable.
pub fn operator_label(operator: &str, network_type: &str) -> String {
    if operator.is_empty() {
        network_type.to_owned()
    } else {
        format!("{operator} {network_type}").trim().to_owned()
    }
}

/// Formats the signal parameters as `(key, "KEY: value")` pairs, keeping
/// the fixed key order and skipping absent values.
pub fn signal_params(signal: &DeviceSignal) -> Vec<(&'static str, String)> {
    let fields: [(&'static str, &Option<String>); 8] = [
        ("rssi", &signal.rssi),
        ("rsrp", &signal.rsrp),
        ("rsrq", &signal.rsrq),
        ("rscp", &signal.rscp),
        ("ecio", &signal.ecio),
        ("sinr", &signal.sinr),
        ("cell_id", &signal.cell_id),
        ("pci", &signal.pci),
    ];

    fields
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|v| (key, format!("{}: {v}", key.to_ascii_uppercase())))
        })
        .collect()
}
