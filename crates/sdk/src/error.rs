//! Error types for the DID terms SDK

use didterms_ledger_client::LedgerError;
use thiserror::Error;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, TermsError>;

/// SDK error types
///
/// Read-path parsing errors are swallowed per-record during a load; write-path
/// errors always propagate so the caller can report transaction status. No
/// variant is fatal beyond the single user action that raised it.
#[derive(Error, Debug)]
pub enum TermsError {
    /// Ledger not ready; treated as empty state, non-fatal
    #[error("Ledger unavailable")]
    LedgerUnavailable,

    /// A stored record could not be decoded
    #[error("Malformed record under {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    /// No term stored under the given id
    #[error("Term not found: {0}")]
    NotFound(String),

    /// No signer-bound session for a write
    #[error("No connected wallet for this operation")]
    SignerUnavailable,

    /// The ledger rejected or failed a write
    #[error("Ledger write failed: {0}")]
    WriteFailed(String),

    /// The user declined the wallet prompt
    #[error("Transaction rejected by user")]
    UserRejected,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<LedgerError> for TermsError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Unavailable => TermsError::LedgerUnavailable,
            LedgerError::SignerUnavailable => TermsError::SignerUnavailable,
            LedgerError::UserRejected => TermsError::UserRejected,
            other => TermsError::WriteFailed(other.to_string()),
        }
    }
}
