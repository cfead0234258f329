//! Ledger session traits
//!
//! The ledger exposes a flat key/value surface with no schema and no
//! cross-key transactions. Read-only and signer-bound sessions are distinct
//! acquisitions; only the latter may write.

use crate::error::Result;
use async_trait::async_trait;

/// Read access to the ledger.
///
/// `get_data` returns the raw bytes stored under a key; an empty byte vector
/// means the key is not present. Callers own all interpretation of the bytes.
#[async_trait]
pub trait LedgerRead: Send + Sync {
    /// Whether the ledger is ready to serve data
    async fn is_available(&self) -> Result<bool>;

    /// Fetch the value stored under `key`; empty bytes means not present
    async fn get_data(&self, key: &str) -> Result<Vec<u8>>;
}

/// Write access to the ledger, only available on signer-bound sessions.
///
/// A write overwrites the full value under the key. There is no
/// compare-and-swap: concurrent writers to the same key race, last write
/// wins.
#[async_trait]
pub trait LedgerWrite: LedgerRead {
    /// Store `value` under `key`, replacing any existing value
    async fn set_data(&self, key: &str, value: &[u8]) -> Result<()>;
}
