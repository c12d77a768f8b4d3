/*!
 * Error types for the vttscribe application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 * The caption extractor itself has no error type: it cannot fail and always
 * returns a (possibly empty) transcript string.
 */

use thiserror::Error;

/// Errors that can occur when fetching a remote caption track
#[derive(Error, Debug)]
pub enum FetchError {
    /// The caption URL could not be parsed or uses an unsupported scheme
    #[error("Invalid caption URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Error when making the HTTP request fails
    #[error("Caption request failed: {0}")]
    RequestFailed(String),

    /// The server responded with a non-success status
    #[error("Caption server responded with status {status_code} for {url}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// The requested URL
        url: String,
    },

    /// Error when reading the response body fails
    #[error("Failed to read caption response body: {0}")]
    ReadBody(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from fetching a caption track
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}
