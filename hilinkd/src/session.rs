//! Session token handling for the modem's web API.
//!
//! The modem hands out a short-lived cookie/CSRF-token pair via
//! `/api/webserver/SesTokInfo`. The pair is refreshed at the start of every
//! poll cycle and passed into each request as an explicit value; it is never
//! cached across cycles.

use crate::wire;
use roxmltree::Document;

/// A cookie/token pair authorizing requests against the modem API.
///
/// Either field may be empty: a failed refresh degrades to an
/// unauthenticated session and the individual endpoint calls fail (or not)
/// on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub cookie: String,
    pub token: String,
}

impl Session {
    /// An unauthenticated session. Requests carry no auth headers.
    pub fn none() -> Self {
        Self::default()
    }

    /// Extracts the pair from a `SesTokInfo` body. Missing fields become
    /// empty strings rather than errors.
    pub(crate) fn from_token_xml(body: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(body)?;
        Ok(Self {
            cookie: wire::find_text(&doc, "SesInfo").unwrap_or_default(),
            token: wire::find_text(&doc, "TokInfo").unwrap_or_default(),
        })
    }
}
