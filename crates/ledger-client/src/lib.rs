//! Client for the generic key/value ledger backing DID terms
//!
//! The ledger is a schemaless remote store: opaque byte values under string
//! keys, with no transactional guarantees across keys. Reads go through a
//! read-only session; writes require a signer-bound session, acquired
//! separately.
//!
//! # Example
//!
//! ```rust,no_run
//! use didterms_ledger_client::{HttpLedger, LedgerConfig, LedgerRead};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = HttpLedger::read_only(LedgerConfig {
//!     base_url: "http://localhost:8080".into(),
//!     contract_address: "0xabc".into(),
//!     ..Default::default()
//! });
//!
//! if ledger.is_available().await? {
//!     let keys = ledger.get_data("term_keys").await?;
//!     println!("index is {} bytes", keys.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod memory;
pub mod types;

// Re-export main types
pub use client::{LedgerRead, LedgerWrite};
pub use error::{LedgerError, Result};
pub use http::HttpLedger;
pub use memory::MemoryLedger;
pub use types::LedgerConfig;
