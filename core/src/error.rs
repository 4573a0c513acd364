//! Errors and results.
use std::result::Result as StdResult;
use thiserror::Error;

// *************
// *** Error ***
// *************

/// Submission and configuration errors.
///
/// Every submission failure is shown to the visitor identically,
/// the variants only exist for logging.
#[derive(Error, Debug)]
pub enum Error {
    /// The intake answered with a non-success status.
    #[error("form intake rejected the submission with status {0}")]
    Rejected(u16),

    /// The request never produced a response.
    #[error("could not reach form intake: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured intake endpoint is not a valid URL.
    #[error("invalid intake endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
