//! Types for ledger client configuration

/// Client configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Base URL of the ledger gateway HTTP API
    pub base_url: String,
    /// Address of the ledger contract holding the key/value data
    pub contract_address: String,
    /// Chain ID of the network the contract lives on
    pub chain_id: u64,
    /// Optional signer token; required for signer-bound sessions
    pub signer_token: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            contract_address: "0x0000000000000000000000000000000000000000".to_string(),
            chain_id: 1,
            signer_token: None,
            timeout_secs: 30,
        }
    }
}
