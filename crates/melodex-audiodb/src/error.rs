// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AudioDbError>;

/// Transport-level failure taxonomy. Every operation issues at most one
/// request, so there is nothing to retry; callers see exactly what the
/// wire did.
#[derive(Debug, Error)]
pub enum AudioDbError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("TheAudioDB returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("invalid response from TheAudioDB: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AudioDbError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AudioDbError::Timeout
        } else if let Some(status) = err.status() {
            AudioDbError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            AudioDbError::Network(err.to_string())
        }
    }
}
