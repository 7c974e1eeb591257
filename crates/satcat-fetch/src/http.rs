//! Response classification for the catalog fetch loop.
//!
//! Keeps status handling (301/302 → follow, 2xx → body, anything else →
//! [`FetchError::Status`]) out of the request loop so it can be tested
//! against mock responses.

use reqwest::{StatusCode, Url};

use crate::error::FetchError;

/// What the fetch loop should do with a response.
#[derive(Debug)]
pub enum Step {
    /// Re-issue the request against this absolute URL.
    Redirect(Url),
    /// Terminal success; read the body.
    Body(reqwest::Response),
}

/// Classify a response received for `url`.
///
/// Only 301 and 302 are followed. Relative `Location` values are resolved
/// against `url`.
pub fn classify(resp: reqwest::Response, url: &Url) -> Result<Step, FetchError> {
    let status = resp.status();
    if status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND {
        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| FetchError::MissingLocation {
                url: url.to_string(),
            })?;
        let target = url.join(location).map_err(|e| FetchError::InvalidUrl {
            url: location.to_string(),
            reason: e.to_string(),
        })?;
        return Ok(Step::Redirect(target));
    }
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(Step::Body(resp))
}
