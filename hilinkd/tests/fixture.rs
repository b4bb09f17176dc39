#![allow(dead_code)] // each integration test binary uses a subset

use hilinkd::client::{paths, ModemClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SES_TOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
    <SesInfo>SessionID=abc123</SesInfo>
    <TokInfo>token456</TokInfo>
</response>"#;

pub const NOTIFICATIONS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
    <UnreadMessage>3</UnreadMessage>
    <SmsStorageFull>0</SmsStorageFull>
</response>"#;

/// Connected LTE session, signal bucket 4.
pub const STATUS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
    <ConnectionStatus>901</ConnectionStatus>
    <SignalIcon>4</SignalIcon>
    <CurrentNetworkType>19</CurrentNetworkType>
    <CurrentNetworkTypeEx>101</CurrentNetworkTypeEx>
    <SimStatus>1</SimStatus>
</response>"#;

pub const PLMN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
    <State>1</State>
    <FullName>Vodafone GmbH</FullName>
    <ShortName>Vodafone</ShortName>
    <Numeric>26202</Numeric>
</response>"#;

pub const SIGNAL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
    <pci>55</pci>
    <sc></sc>
    <cell_id>12345678</cell_id>
    <rsrq>-8</rsrq>
    <rsrp>-97</rsrp>
    <rssi>-65</rssi>
    <sinr>9</sinr>
    <rscp></rscp>
    <ecio></ecio>
</response>"#;

/// Signal params decoded from [`SIGNAL_XML`], in fixed key order.
pub fn expected_signal_params() -> Vec<(&'static str, String)> {
    vec![
        ("rssi", "RSSI: -65".into()),
        ("rsrp", "RSRP: -97".into()),
        ("rsrq", "RSRQ: -8".into()),
        ("sinr", "SINR: 9".into()),
        ("cell_id", "CELL_ID: 12345678".into()),
        ("pci", "PCI: 55".into()),
    ]
}

pub fn modem_client(server: &MockServer) -> ModemClient {
    ModemClient::new(&server.address().to_string()).expect("failed to build client")
}

pub async fn mount_xml(server: &MockServer, api_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(api_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/xml"))
        .mount(server)
        .await;
}

pub async fn mount_session(server: &MockServer) {
    mount_xml(server, paths::SES_TOK_INFO, SES_TOK_XML).await;
}

pub async fn mount_notifications(server: &MockServer) {
    mount_xml(server, paths::CHECK_NOTIFICATIONS, NOTIFICATIONS_XML).await;
}

pub async fn mount_status(server: &MockServer) {
    mount_xml(server, paths::MONITORING_STATUS, STATUS_XML).await;
}

pub async fn mount_plmn(server: &MockServer) {
    mount_xml(server, paths::CURRENT_PLMN, PLMN_XML).await;
}

pub async fn mount_signal(server: &MockServer) {
    mount_xml(server, paths::DEVICE_SIGNAL, SIGNAL_XML).await;
}

/// Stubs all five telemetry endpoints with the connected-LTE fixtures.
pub async fn mount_all(server: &MockServer) {
    mount_session(server).await;
    mount_notifications(server).await;
    mount_status(server).await;
    mount_plmn(server).await;
    mount_signal(server).await;
}
