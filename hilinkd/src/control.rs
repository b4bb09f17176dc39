//! One-shot control commands, independent of the poll cycle.
//!
//! Each command refreshes a fresh session right before the POST; tokens
//! are single-cycle, so a cached pair from an earlier poll may already be
//! stale. Callers log the outcome and never retry. Whether the modem acted
//! on the command shows up in the next poll cycle.

use crate::client::{paths, EndpointError, ModemClient};
use tracing::info;

const CONNECT_PAYLOAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?><request><dataswitch>1</dataswitch></request>"#;
const DISCONNECT_PAYLOAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?><request><dataswitch>0</dataswitch></request>"#;
const REBOOT_PAYLOAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?><request><Control>1</Control></request>"#;

/// Switches mobile data on.
pub async fn connect(client: &ModemClient) -> Result<(), EndpointError> {
    info!("switching mobile data on");
    post(client, paths::MOBILE_DATASWITCH, CONNECT_PAYLOAD).await
}

/// Switches mobile data off.
pub async fn disconnect(client: &ModemClient) -> Result<(), EndpointError> {
    info!("switching mobile data off");
    post(client, paths::MOBILE_DATASWITCH, DISCONNECT_PAYLOAD).await
}

/// Reboots the modem.
pub async fn reboot(client: &ModemClient) -> Result<(), EndpointError> {
    info!("rebooting modem");
    post(client, paths::DEVICE_CONTROL, REBOOT_PAYLOAD).await
}

async fn post(
    client: &ModemClient,
    path: &str,
    payload: &'static str,
) -> Result<(), EndpointError> {
    let session = client.refresh_session().await;
    client.post_xml(&session, path, payload).await
}
