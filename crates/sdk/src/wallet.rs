//! Wallet collaborator
//!
//! The wallet holds the user's key material and answers two requests: the
//! account address, and a signature over a challenge message. Either request
//! may fail or be declined by the user; both surface as clean errors.

use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use thiserror::Error;

/// Wallet error
#[derive(Debug, Error)]
pub enum WalletError {
    /// The user declined the prompt
    #[error("Signature request rejected by user")]
    Rejected,

    /// No account is connected
    #[error("No wallet account available")]
    Unavailable,

    /// Signing failed
    #[error("Signing failed: {0}")]
    Signing(String),
}

/// Result type for wallet operations
pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// External wallet holding the user's keys
///
/// Both calls suspend until the wallet responds or the user cancels.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// The connected account's address
    async fn request_account(&self) -> WalletResult<String>;

    /// Sign a challenge message with the connected account's key
    async fn sign_message(&self, message: &str) -> WalletResult<Vec<u8>>;
}

/// In-process Ed25519 wallet for tests and native deployments
///
/// The address is the lowercase `0x`-hex rendering of the verifying key.
pub struct LocalWallet {
    signing_key: SigningKey,
    address: String,
}

impl LocalWallet {
    /// Generate a wallet with a fresh keypair from the OS RNG
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self::from_signing_key(signing_key)
    }

    /// Build a wallet from existing key bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(bytes))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = format!("0x{}", hex::encode(signing_key.verifying_key().to_bytes()));
        Self {
            signing_key,
            address,
        }
    }

    /// The wallet's account address
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl WalletSigner for LocalWallet {
    async fn request_account(&self) -> WalletResult<String> {
        Ok(self.address.clone())
    }

    async fn sign_message(&self, message: &str) -> WalletResult<Vec<u8>> {
        let signature = self.signing_key.sign(message.as_bytes());
        Ok(signature.to_bytes().to_vec())
    }
}
