//! Typed views over the modem's XML response bodies.
//!
//! The HiLink API returns flat XML documents queried by element name. Each
//! endpoint gets its own struct here; a missing element is `None`, never an
//! error, because firmware revisions disagree on which fields they emit.

use roxmltree::Document;

/// Text of the first element with the given tag, trimmed. Empty or
/// whitespace-only elements count as absent.
pub(crate) fn find_text(doc: &Document, tag: &str) -> Option<String> {
    doc.descendants()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Body of `/api/monitoring/check-notifications`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    pub unread_messages: Option<u32>,
}

impl Notifications {
    pub fn from_xml(body: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(body)?;
        Ok(Self {
            unread_messages: find_text(&doc, "UnreadMessage")
                .and_then(|v| v.parse().ok()),
        })
    }
}

/// Body of `/api/monitoring/status`.
///
/// `CurrentNetworkTypeEx` is only present on newer firmware; older revisions
/// report the smaller `CurrentNetworkType` enum instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    pub signal_icon: Option<String>,
    pub connection_status: Option<String>,
    pub network_type_ex: Option<String>,
    pub network_type: Option<String>,
}

impl DeviceStatus {
    pub fn from_xml(body: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(body)?;
        Ok(Self {
            signal_icon: find_text(&doc, "SignalIcon"),
            connection_status: find_text(&doc, "ConnectionStatus"),
            network_type_ex: find_text(&doc, "CurrentNetworkTypeEx"),
            network_type: find_text(&doc, "CurrentNetworkType"),
        })
    }
}

/// Body of `/api/net/current-plmn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPlmn {
    pub short_name: Option<String>,
    pub full_name: Option<String>,
}

impl CurrentPlmn {
    pub fn from_xml(body: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(body)?;
        Ok(Self {
            short_name: find_text(&doc, "ShortName"),
            full_name: find_text(&doc, "FullName"),
        })
    }
}

/// Body of `/api/device/signal`. All fields are reported as opaque strings
/// (the modem appends units on some firmware, e.g. `-97dBm`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSignal {
    pub rssi: Option<String>,
    pub rsrp: Option<String>,
    pub rsrq: Option<String>,
    pub rscp: Option<String>,
    pub ecio: Option<String>,
    pub sinr: Option<String>,
    pub cell_id: Option<String>,
    pub pci: Option<String>,
}

impl DeviceSignal {
    pub fn from_xml(body: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(body)?;
        Ok(Self {
            rssi: find_text(&doc, "rssi"),
            rsrp: find_text(&doc, "rsrp"),
            rsrq: find_text(&doc, "rsrq"),
            rscp: find_text(&doc, "rscp"),
            ecio: find_text(&doc, "ecio"),
            sinr: find_text(&doc, "sinr"),
            cell_id: find_text(&doc, "cell_id"),
            pci: find_text(&doc, "pci"),
        })
    }
}
