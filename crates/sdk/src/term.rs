//! Term model and persisted wire format

use serde::{Deserialize, Serialize};

/// Lifecycle status of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermStatus {
    Active,
    Inactive,
}

impl TermStatus {
    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            TermStatus::Active => TermStatus::Inactive,
            TermStatus::Inactive => TermStatus::Active,
        }
    }
}

impl Default for TermStatus {
    fn default() -> Self {
        TermStatus::Active
    }
}

/// Persisted term record under `term_<id>`
///
/// Field names and layout are fixed by the on-ledger format and must not
/// change. A record written before status tracking existed carries no
/// `status` field and reads back as active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Codec token for the boolean condition; never decoded server-side
    pub condition: String,
    /// Creation time, seconds since epoch
    pub timestamp: u64,
    /// Creator's wallet address, self-declared
    pub owner: String,
    /// Free-text category
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Lifecycle status
    #[serde(default)]
    pub status: TermStatus,
}

/// A policy term attached to a decentralized identity
///
/// The unit of stored policy: an obfuscated boolean condition plus metadata.
/// `owner` is self-declared by the creator and is not verified against the
/// write signer.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// Globally unique id, assigned at creation
    pub id: String,
    /// Codec token for the boolean condition
    pub encrypted_condition: String,
    /// Creation time, seconds since epoch
    pub timestamp: u64,
    /// Creator's wallet address
    pub owner: String,
    /// Free-text category
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Lifecycle status
    pub status: TermStatus,
}

impl Term {
    /// Build a term from its id and persisted record
    pub fn from_record(id: impl Into<String>, record: TermRecord) -> Self {
        Self {
            id: id.into(),
            encrypted_condition: record.condition,
            timestamp: record.timestamp,
            owner: record.owner,
            category: record.category,
            description: record.description,
            status: record.status,
        }
    }

    /// The persisted form of this term
    pub fn to_record(&self) -> TermRecord {
        TermRecord {
            condition: self.encrypted_condition.clone(),
            timestamp: self.timestamp,
            owner: self.owner.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

/// Input for creating a new term
#[derive(Debug, Clone)]
pub struct NewTerm {
    /// Free-text category (e.g. "Data Usage")
    pub category: String,
    /// Free-text description of the policy
    pub description: String,
    /// The boolean condition to obfuscate
    pub condition: bool,
}
