//! In-memory ledger for tests and local development
//!
//! Behaves like the remote contract: flat key/value map, empty bytes for
//! absent keys, full-value overwrites with no compare-and-swap. Switches
//! simulate an unavailable contract, a disconnected signer, and rejected
//! writes.

use crate::client::{LedgerRead, LedgerWrite};
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug)]
struct MemoryInner {
    data: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    signer_connected: AtomicBool,
    reject_writes: AtomicBool,
}

/// In-memory ledger with shared state across sessions
///
/// Sessions are cheap clones over the same map; `read_only()` and `signer()`
/// mirror the distinct acquisitions of the real contract.
#[derive(Clone, Debug)]
pub struct MemoryLedger {
    inner: Arc<MemoryInner>,
    writable: bool,
}

impl MemoryLedger {
    /// Create a new empty ledger with an available contract and a connected
    /// signer
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                data: Mutex::new(HashMap::new()),
                available: AtomicBool::new(true),
                signer_connected: AtomicBool::new(true),
                reject_writes: AtomicBool::new(false),
            }),
            writable: true,
        }
    }

    /// Acquire a read-only session over the same map
    pub fn read_only(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            writable: false,
        }
    }

    /// Acquire a signer-bound session over the same map
    ///
    /// Fails with `SignerUnavailable` when the simulated wallet is
    /// disconnected.
    pub fn signer(&self) -> Result<Self> {
        if !self.inner.signer_connected.load(Ordering::SeqCst) {
            return Err(LedgerError::SignerUnavailable);
        }
        Ok(Self {
            inner: Arc::clone(&self.inner),
            writable: true,
        })
    }

    /// Toggle the contract's availability
    pub fn set_available(&self, available: bool) {
        self.inner.available.store(available, Ordering::SeqCst);
    }

    /// Toggle the simulated signer connection
    pub fn set_signer_connected(&self, connected: bool) {
        self.inner.signer_connected.store(connected, Ordering::SeqCst);
    }

    /// Make subsequent writes fail with `WriteRejected`
    pub fn set_reject_writes(&self, reject: bool) {
        self.inner.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Number of keys currently stored
    pub async fn len(&self) -> usize {
        self.inner.data.lock().await.len()
    }

    /// Whether the ledger holds no keys
    pub async fn is_empty(&self) -> bool {
        self.inner.data.lock().await.is_empty()
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerRead for MemoryLedger {
    async fn is_available(&self) -> Result<bool> {
        Ok(self.inner.available.load(Ordering::SeqCst))
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>> {
        let data = self.inner.data.lock().await;
        Ok(data.get(key).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl LedgerWrite for MemoryLedger {
    async fn set_data(&self, key: &str, value: &[u8]) -> Result<()> {
        if !self.writable {
            return Err(LedgerError::SignerUnavailable);
        }
        if self.inner.reject_writes.load(Ordering::SeqCst) {
            return Err(LedgerError::WriteRejected(
                "write rejected by ledger".to_string(),
            ));
        }

        let mut data = self.inner.data.lock().await;
        debug!("memory ledger write: {} ({} bytes)", key, value.len());
        data.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
