//! HTTP access to the modem's management API.
//!
//! One request/response cycle per method. The modem sits on the local
//! network, so every telemetry GET runs with a 1s timeout and fails fast
//! when the device is unreachable; control POSTs get a little longer.

use crate::session::Session;
use crate::wire::{CurrentPlmn, DeviceSignal, DeviceStatus, Notifications};
use eyre::{Result, WrapErr};
use reqwest::{header, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_IP: &str = "192.168.8.1";

/// CSRF header the modem expects alongside the session cookie.
const CSRF_HEADER: &str = "__RequestVerificationToken";

const GET_TIMEOUT: Duration = Duration::from_secs(1);
const POST_TIMEOUT: Duration = Duration::from_secs(5);

pub mod paths {
    pub const SES_TOK_INFO: &str = "/api/webserver/SesTokInfo";
    pub const CHECK_NOTIFICATIONS: &str = "/api/monitoring/check-notifications";
    pub const MONITORING_STATUS: &str = "/api/monitoring/status";
    pub const CURRENT_PLMN: &str = "/api/net/current-plmn";
    pub const DEVICE_SIGNAL: &str = "/api/device/signal";
    pub const MOBILE_DATASWITCH: &str = "/api/dialup/mobile-dataswitch";
    pub const DEVICE_CONTROL: &str = "/api/device/control";
}

/// Why a single endpoint call failed. The aggregator treats every variant
/// the same way ("endpoint unavailable"); the distinction only shows up in
/// logs.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("request timed out")]
    Timeout,
    #[error("modem unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("unexpected http status: {0}")]
    Http(StatusCode),
    #[error("malformed xml response: {0}")]
    MalformedXml(#[from] roxmltree::Error),
}

impl From<reqwest::Error> for EndpointError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Http(status)
        } else {
            Self::Unreachable(err)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModemClient {
    http: reqwest::Client,
    base: Url,
}

impl ModemClient {
    pub fn new(ip: &str) -> Result<Self> {
        let base = Url::parse(&format!("http://{ip}"))
            .wrap_err_with(|| format!("invalid modem address: {ip}"))?;

        let http = reqwest::Client::builder()
            .connect_timeout(GET_TIMEOUT)
            .timeout(GET_TIMEOUT)
            .user_agent("hilinkd")
            .build()
            .wrap_err("failed to build http client")?;

        Ok(Self { http, base })
    }

    /// Fetches a fresh cookie/token pair. Never fails: any error degrades
    /// to an unauthenticated [`Session`], leaving the per-endpoint calls to
    /// succeed or fail on their own.
    pub async fn refresh_session(&self) -> Session {
        let body = match self.get_xml(&Session::none(), paths::SES_TOK_INFO).await {
            Ok(body) => body,
            Err(e) => {
                debug!("session refresh failed: {e}");
                return Session::none();
            }
        };

        Session::from_token_xml(&body).unwrap_or_else(|e| {
            debug!("session token body is not xml: {e}");
            Session::none()
        })
    }

    pub async fn notifications(
        &self,
        session: &Session,
    ) -> Result<Notifications, EndpointError> {
        let body = self.get_xml(session, paths::CHECK_NOTIFICATIONS).await?;
        Ok(Notifications::from_xml(&body)?)
    }

    pub async fn device_status(
        &self,
        session: &Session,
    ) -> Result<DeviceStatus, EndpointError> {
        let body = self.get_xml(session, paths::MONITORING_STATUS).await?;
        Ok(DeviceStatus::from_xml(&body)?)
    }

    pub async fn current_plmn(
        &self,
        session: &Session,
    ) -> Result<CurrentPlmn, EndpointError> {
        let body = self.get_xml(session, paths::CURRENT_PLMN).await?;
        Ok(CurrentPlmn::from_xml(&body)?)
    }

    pub async fn device_signal(
        &self,
        session: &Session,
    ) -> Result<DeviceSignal, EndpointError> {
        let body = self.get_xml(session, paths::DEVICE_SIGNAL).await?;
        Ok(DeviceSignal::from_xml(&body)?)
    }

    async fn get_xml(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<String, EndpointError> {
        let mut request = self.http.get(self.url(path));

        if !session.cookie.is_empty() {
            request = request.header(header::COOKIE, session.cookie.as_str());
        }
        if !session.token.is_empty() {
            request = request.header(CSRF_HEADER, session.token.as_str());
        }

        let body = request
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }

    /// One-shot XML POST for the control endpoints. The response body is
    /// ignored; the next poll cycle is the source of truth.
    pub(crate) async fn post_xml(
        &self,
        session: &Session,
        path: &str,
        payload: &'static str,
    ) -> Result<(), EndpointError> {
        let mut request = self
            .http
            .post(self.url(path))
            .timeout(POST_TIMEOUT)
            .header(header::CONTENT_TYPE, "text/xml");

        if !session.cookie.is_empty() {
            request = request.header(header::COOKIE, session.cookie.as_str());
        }
        if !session.token.is_empty() {
            request = request.header(CSRF_HEADER, session.token.as_str());
        }

        request.body(payload).send().await?.error_for_status()?;

        Ok(())
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }
}
