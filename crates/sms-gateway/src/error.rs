//! Gateway errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),
}
