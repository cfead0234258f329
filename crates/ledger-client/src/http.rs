//! HTTP gateway implementation of the ledger contract
//!
//! Talks to a ledger gateway that proxies the key/value contract. Values
//! travel base64-encoded inside JSON envelopes. A missing key is a 404 and
//! surfaces as empty bytes, matching the contract's "not present" semantics.

use crate::client::{LedgerRead, LedgerWrite};
use crate::error::{LedgerError, Result};
use crate::types::LedgerConfig;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JSON envelope for values on the wire
#[derive(Debug, Serialize, Deserialize)]
struct ValueEnvelope {
    /// Base64-encoded raw value bytes
    value: String,
}

/// Response from the availability endpoint
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    available: bool,
}

/// HTTP client for the ledger gateway
///
/// Read-only and signer-bound sessions are distinct acquisitions:
///
/// ```rust,no_run
/// use didterms_ledger_client::{HttpLedger, LedgerConfig};
///
/// let config = LedgerConfig {
///     base_url: "http://localhost:8080".into(),
///     signer_token: Some("token".into()),
///     ..Default::default()
/// };
///
/// // Reads only
/// let reader = HttpLedger::read_only(config.clone());
///
/// // Reads and writes; fails without a signer token
/// let signer = HttpLedger::with_signer(config).unwrap();
/// ```
pub struct HttpLedger {
    config: LedgerConfig,
    client: Client,
    writable: bool,
}

impl HttpLedger {
    /// Acquire a read-only session
    pub fn read_only(config: LedgerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            config,
            client,
            writable: false,
        }
    }

    /// Acquire a signer-bound session
    ///
    /// Fails with `SignerUnavailable` when the configuration carries no
    /// signer token.
    pub fn with_signer(config: LedgerConfig) -> Result<Self> {
        let token = config
            .signer_token
            .as_ref()
            .ok_or(LedgerError::SignerUnavailable)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| LedgerError::SignerUnavailable)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            config,
            client,
            writable: true,
        })
    }

    fn data_url(&self, key: &str) -> String {
        format!(
            "{}/ledger/v1/{}/data/{}",
            self.config.base_url,
            self.config.contract_address,
            urlencoding::encode(key)
        )
    }
}

#[async_trait]
impl LedgerRead for HttpLedger {
    async fn is_available(&self) -> Result<bool> {
        let url = format!(
            "{}/ledger/v1/{}/available",
            self.config.base_url, self.config.contract_address
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(false);
        }

        let body: AvailabilityResponse = response.json().await?;
        Ok(body.available)
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>> {
        let response = self.client.get(&self.data_url(key)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            return Err(LedgerError::Unavailable);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Server {
                status,
                message: body,
            });
        }

        let envelope: ValueEnvelope = response.json().await?;
        Ok(BASE64.decode(envelope.value)?)
    }
}

#[async_trait]
impl LedgerWrite for HttpLedger {
    async fn set_data(&self, key: &str, value: &[u8]) -> Result<()> {
        if !self.writable {
            return Err(LedgerError::SignerUnavailable);
        }

        let body = ValueEnvelope {
            value: BASE64.encode(value),
        };

        let response = self
            .client
            .put(&self.data_url(key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            return Err(LedgerError::Unavailable);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();

            // The gateway relays wallet-declined prompts as a 4xx whose body
            // names the user rejection; distinguish those for messaging.
            if message.contains("user rejected") {
                return Err(LedgerError::UserRejected);
            }
            if (400..500).contains(&status) {
                return Err(LedgerError::WriteRejected(message));
            }
            return Err(LedgerError::Server { status, message });
        }

        Ok(())
    }
}
