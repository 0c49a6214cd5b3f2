//! Error types for the draft-value engine and CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    /// Text that matches no known tier vocabulary. Surfaced per
    /// observation so the caller can skip it; never defaulted to a rank.
    #[error("unrecognized rank token: {token:?}")]
    UnknownRankToken { token: String },

    #[error("invalid division {value} (expected 1-4)")]
    InvalidDivision { value: u8 },

    #[error("invalid season label: {label:?} (expected e.g. \"S2024 S3\")")]
    InvalidSeasonLabel { label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile store error: {message}")]
    Storage { message: String },

    #[error("player not found: {name}")]
    PlayerNotFound { name: String },
}

impl From<anyhow::Error> for DraftError {
    fn from(err: anyhow::Error) -> Self {
        DraftError::Storage {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
