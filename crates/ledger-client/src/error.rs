//! Error types for ledger client

use thiserror::Error;

/// Ledger client error
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Ledger reports it is not ready to serve data
    #[error("Ledger unavailable")]
    Unavailable,

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned an error
    #[error("Ledger gateway error {status}: {message}")]
    Server { status: u16, message: String },

    /// Write was rejected by the ledger
    #[error("Ledger write rejected: {0}")]
    WriteRejected(String),

    /// The user declined the wallet prompt for a write
    #[error("Transaction rejected by user")]
    UserRejected,

    /// No signer-bound session available for a write
    #[error("No signer session available")]
    SignerUnavailable,

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 decode error in the value envelope
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;
