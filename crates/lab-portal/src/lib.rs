//! # lab-portal
//!
//! Client for the external results portal. The portal has no API: a lookup
//! is a form POST of `barcode` and `dob`, answered with an HTML page.

mod error;
mod http;

pub use error::PortalError;

use std::future::Future;

use lab_config::PortalConfig;

/// A source of raw result pages, one lookup per specimen.
///
/// Implemented by [`PortalClient`]; tests substitute canned pages.
pub trait ResultLookup {
    /// Fetch the result page for `barcode` and a `MM/DD/YYYY` birth date.
    fn lookup(
        &self,
        barcode: &str,
        date_of_birth: &str,
    ) -> impl Future<Output = Result<Vec<u8>, PortalError>> + Send;
}

/// HTTP client bound to one portal endpoint.
pub struct PortalClient {
    http: reqwest::Client,
    url: String,
}

impl PortalClient {
    /// Build a client from the portal configuration.
    ///
    /// No request timeout is set: a stalled lookup holds up the pass rather
    /// than being skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Http`] if the TLS backend cannot be initialized.
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    /// The endpoint lookups are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the form POST for one lookup without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Http`] if the configured URL cannot be parsed.
    pub fn lookup_request(
        &self,
        barcode: &str,
        date_of_birth: &str,
    ) -> Result<reqwest::Request, PortalError> {
        Ok(self
            .http
            .post(&self.url)
            .form(&[("barcode", barcode), ("dob", date_of_birth)])
            .build()?)
    }
}

impl ResultLookup for PortalClient {
    async fn lookup(&self, barcode: &str, date_of_birth: &str) -> Result<Vec<u8>, PortalError> {
        tracing::debug!(barcode, url = %self.url, "posting result lookup");
        let request = self.lookup_request(barcode, date_of_birth)?;
        let resp = self.http.execute(request).await?;
        let resp = crate::http::check_response(resp).await?;
        let body = resp.bytes().await?;
        tracing::debug!(barcode, bytes = body.len(), "received result page");
        Ok(body.to_vec())
    }
}
