//! DID Terms SDK
//!
//! Attach human-readable policy terms to a decentralized identity, persisted
//! through a schemaless key/value ledger. Each term carries a boolean
//! condition in obfuscated form; the plaintext is recovered only after the
//! viewer proves wallet control by signing a canonical challenge.
//!
//! # Architecture
//!
//! - [`TermStore`] owns the ledger key layout, the append-only id index, and
//!   the read/write protocol. Its in-memory list is a read-through cache
//!   rebuilt on `load()`; durable state lives entirely in the ledger.
//! - [`codec`] reversibly encodes the boolean condition. It is an
//!   obfuscating transform standing in for real homomorphic encryption, kept
//!   wire-compatible with deployed records.
//! - [`TermReveal`] walks `Sealed -> AwaitingSignature -> Revealed` per
//!   term, unlocking the codec only after the wallet signs the session's
//!   challenge message.
//! - [`catalog`] derives counts, search, and category projections from a
//!   term snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use didterms_ledger_client::MemoryLedger;
//! use didterms_sdk::{ActionLog, NewTerm, RevealSession, TermReveal, TermStore};
//! use didterms_sdk::wallet::LocalWallet;
//!
//! let ledger = MemoryLedger::new();
//! let wallet = LocalWallet::generate();
//! let log = Arc::new(ActionLog::new());
//! let store = TermStore::new(Arc::clone(&log));
//!
//! // Create a term through a signer-bound session
//! let term = store.create(
//!     &ledger.signer()?,
//!     NewTerm {
//!         category: "Data Usage".into(),
//!         description: "No ads".into(),
//!         condition: false,
//!     },
//!     wallet.address(),
//! ).await?;
//!
//! // Reveal its condition after a wallet signature
//! let session = RevealSession::start("0xcontract", 1);
//! let mut reveal = TermReveal::new();
//! let value = reveal
//!     .toggle_reveal(&wallet, &session, &term.encrypted_condition, &log)
//!     .await;
//! ```

// Term model and persisted wire format
pub mod term;

// Condition codec (obfuscating transform)
pub mod codec;

// Term store against the ledger collaborator
pub mod store;

// Signature-gated reveal protocol
pub mod reveal;

// Catalog projections
pub mod catalog;

// Local action history
pub mod history;

// Wallet collaborator
pub mod wallet;

// Error types
pub mod error;

// Re-export core types
pub use term::{NewTerm, Term, TermRecord, TermStatus};

// Re-export store types
pub use store::{term_key, TermStore, INDEX_KEY};

// Re-export codec operations
pub use codec::{decode_condition, encode_condition};

// Re-export reveal types
pub use reveal::{RevealSession, RevealState, TermReveal};

// Re-export catalog types
pub use catalog::{CatalogFilter, CatalogStats};

// Re-export history types
pub use history::ActionLog;

// Re-export wallet types
pub use wallet::{LocalWallet, WalletError, WalletSigner};

// Re-export error types
pub use error::{Result, TermsError};

// Re-export from the ledger collaborator crate
pub use didterms_ledger_client::{
    HttpLedger, LedgerConfig, LedgerError, LedgerRead, LedgerWrite, MemoryLedger,
};
