//! Shared HTTP response checks.

use crate::error::PortalError;

/// Longest body excerpt carried in a [`PortalError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Return the response unchanged on success, else [`PortalError::Status`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, PortalError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let mut message = resp.text().await.unwrap_or_default();
    if message.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
    }
    Err(PortalError::Status { status, message })
}
