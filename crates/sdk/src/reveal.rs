//! Signature-gated reveal protocol
//!
//! Recovers the plaintext boolean behind a term's codec token, but only
//! after the viewer proves wallet control by signing a canonical challenge.
//! The signature is an intent gate: it is never verified against the token
//! and never used as key material. Real confidentiality would need a key
//! encapsulation scheme derived from the signature; this design knowingly
//! stops short of that.

use crate::codec::decode_condition;
use crate::history::ActionLog;
use crate::wallet::WalletSigner;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Generate the session's decryption public key blob: `0x` plus 2000 random
/// hex characters, matching the deployed format
pub fn generate_session_public_key() -> String {
    let mut rng = rand::thread_rng();
    let body: String = (0..2000)
        .map(|_| {
            std::char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0')
        })
        .collect();
    format!("0x{}", body)
}

/// Challenge parameters, fixed at session start
///
/// The challenge message is composed deterministically from these fields; a
/// viewer signs the same text for every reveal within the session.
#[derive(Debug, Clone)]
pub struct RevealSession {
    /// Session decryption public key blob
    pub public_key: String,
    /// Address of the ledger contract
    pub contract_address: String,
    /// Chain the contract lives on
    pub chain_id: u64,
    /// Session start, seconds since epoch
    pub start_timestamp: u64,
    /// Validity window in days
    pub duration_days: u32,
}

impl RevealSession {
    /// Start a session now with a fresh public key and the default 30-day
    /// window
    pub fn start(contract_address: impl Into<String>, chain_id: u64) -> Self {
        Self {
            public_key: generate_session_public_key(),
            contract_address: contract_address.into(),
            chain_id,
            start_timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
            duration_days: 30,
        }
    }

    /// The canonical challenge message for this session
    ///
    /// A fixed textual template, not protocol-negotiated. The layout is part
    /// of the deployed wallet UX and must not change.
    pub fn challenge_message(&self) -> String {
        format!(
            "publickey:{}\ncontractAddresses:{}\ncontractsChainId:{}\nstartTimestamp:{}\ndurationDays:{}",
            self.public_key,
            self.contract_address,
            self.chain_id,
            self.start_timestamp,
            self.duration_days
        )
    }
}

/// Reveal state of a single term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Condition is displayed only in opaque form
    Sealed,
    /// A signature request is in flight
    AwaitingSignature,
    /// Condition has been revealed to the viewer
    Revealed,
}

/// Per-term reveal state machine
///
/// `Sealed -> AwaitingSignature -> Revealed`, returning to `Sealed` on hide
/// or a failed signature. While revealed, re-invoking hides the value again
/// without another signature round-trip.
pub struct TermReveal {
    state: RevealState,
}

impl TermReveal {
    /// A sealed term
    pub fn new() -> Self {
        Self {
            state: RevealState::Sealed,
        }
    }

    /// Current state
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Request the reveal, or hide an already-revealed condition
    ///
    /// Suspends on the wallet's signature prompt. Only a successful
    /// signature unlocks the codec: on failure or cancel the term stays
    /// sealed and no value is produced, with no automatic retry.
    pub async fn toggle_reveal(
        &mut self,
        wallet: &dyn WalletSigner,
        session: &RevealSession,
        encrypted_condition: &str,
        log: &ActionLog,
    ) -> Option<bool> {
        if self.state == RevealState::Revealed {
            self.state = RevealState::Sealed;
            debug!("term re-sealed without signature");
            return None;
        }

        self.state = RevealState::AwaitingSignature;
        match wallet.sign_message(&session.challenge_message()).await {
            Ok(_signature) => {
                self.state = RevealState::Revealed;
                log.record("Decrypted term condition").await;
                Some(decode_condition(encrypted_condition))
            }
            Err(e) => {
                warn!("reveal signature not obtained: {}", e);
                self.state = RevealState::Sealed;
                None
            }
        }
    }
}

impl Default for TermReveal {
    fn default() -> Self {
        Self::new()
    }
}
