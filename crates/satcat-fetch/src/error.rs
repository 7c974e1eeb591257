//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while downloading the catalog. All are fatal to a run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a terminal non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
        /// URL that produced the status.
        url: String,
    },

    /// A 301/302 response carried no usable `Location` header.
    #[error("redirect from {url} has no Location header")]
    MissingLocation {
        /// URL that produced the redirect.
        url: String,
    },

    /// More consecutive redirects than the configured limit.
    #[error("too many redirects (limit {limit}) while fetching {url}")]
    TooManyRedirects {
        /// Configured maximum number of hops.
        limit: u32,
        /// URL the fetch started from.
        url: String,
    },

    /// The URL, or a redirect target, could not be parsed.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl {
        /// Offending URL text.
        url: String,
        /// Parser message.
        reason: String,
    },
}
