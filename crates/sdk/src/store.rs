//! Term store
//!
//! Owns the ledger key naming scheme, the append-only id index, and the
//! read/write protocol against the ledger collaborator. The store holds no
//! authoritative state: its in-memory list is a read-through cache rebuilt
//! only by `load()`.
//!
//! # Key layout
//!
//! - `term_keys` — UTF-8 JSON array of term id strings (the index)
//! - `term_<id>` — UTF-8 JSON object, see [`TermRecord`](crate::TermRecord)
//!
//! Ids are never removed from the index; there is no delete operation.

use crate::codec::encode_condition;
use crate::error::{Result, TermsError};
use crate::history::ActionLog;
use crate::term::{NewTerm, Term, TermRecord, TermStatus};
use didterms_ledger_client::{LedgerRead, LedgerWrite};
use rand::Rng;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Ledger key holding the term id index
pub const INDEX_KEY: &str = "term_keys";

/// Ledger key for a term record
pub fn term_key(id: &str) -> String {
    format!("term_{}", id)
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Fresh term id: creation millis plus a random base36 suffix
fn generate_term_id() -> String {
    const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let mut rng = rand::thread_rng();
    let suffix: String = (0..7)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();

    format!("{}-{}", millis, suffix)
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Registry of terms persisted through the key/value ledger
///
/// Every operation takes an explicit ledger session; the store carries no
/// ambient connection state. `load()` reads through a read-only session,
/// `create()`/`toggle_status()` require a signer-bound session.
pub struct TermStore {
    /// Read-through cache, rebuilt only by `load()`
    cache: Mutex<Vec<Term>>,
    log: Arc<ActionLog>,
}

impl TermStore {
    /// Create a store that records actions into `log`
    pub fn new(log: Arc<ActionLog>) -> Self {
        Self {
            cache: Mutex::new(Vec::new()),
            log,
        }
    }

    /// The last loaded snapshot; non-authoritative
    pub async fn snapshot(&self) -> Vec<Term> {
        self.cache.lock().await.clone()
    }

    /// Load all terms reachable from the index, newest first
    ///
    /// An unavailable ledger yields an empty list (not-ready, not an error)
    /// and leaves the previous snapshot untouched. A missing or malformed
    /// record is skipped and logged; one corrupt entry never fails the load.
    pub async fn load(&self, ledger: &dyn LedgerRead) -> Result<Vec<Term>> {
        match ledger.is_available().await {
            Ok(true) => {}
            Ok(false) => {
                debug!("ledger not ready, returning empty term list");
                return Ok(Vec::new());
            }
            Err(e) => {
                debug!("ledger availability check failed: {}", e);
                return Ok(Vec::new());
            }
        }

        let keys = self.read_index(ledger).await?;

        let mut list = Vec::with_capacity(keys.len());
        for id in &keys {
            let key = term_key(id);
            let bytes = match ledger.get_data(&key).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("error loading {}: {}", key, e);
                    continue;
                }
            };
            if bytes.is_empty() {
                warn!("index references {} but no record is stored", key);
                continue;
            }
            match serde_json::from_slice::<TermRecord>(&bytes) {
                Ok(record) => list.push(Term::from_record(id.clone(), record)),
                Err(e) => warn!("malformed record under {}: {}", key, e),
            }
        }

        // Newest first; the sort is stable so index order breaks ties
        list.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        debug!("loaded {} of {} indexed terms", list.len(), keys.len());
        *self.cache.lock().await = list.clone();
        Ok(list)
    }

    /// Create a new term and append its id to the index
    ///
    /// The record write and the index rewrite are two separate ledger calls
    /// with a read of the index in between. The collaborator offers no
    /// compare-and-swap, so two concurrent creators can both read the same
    /// index and the later index write drops the earlier id; the orphaned
    /// record stays stored but unreachable. This race is inherent to the
    /// single-key ledger model and is left observable.
    pub async fn create(
        &self,
        session: &dyn LedgerWrite,
        input: NewTerm,
        owner: &str,
    ) -> Result<Term> {
        let record = TermRecord {
            condition: encode_condition(input.condition),
            timestamp: now_secs(),
            owner: owner.to_string(),
            category: input.category,
            description: input.description,
            status: TermStatus::Active,
        };

        let id = generate_term_id();
        session
            .set_data(&term_key(&id), &serde_json::to_vec(&record)?)
            .await?;

        let mut keys = self.read_index(session).await?;
        keys.push(id.clone());
        session
            .set_data(INDEX_KEY, &serde_json::to_vec(&keys)?)
            .await?;

        info!("created term {} in category {}", id, record.category);
        self.log
            .record(format!(
                "Created term: {}...",
                truncate_chars(&record.description, 30)
            ))
            .await;

        Ok(Term::from_record(id, record))
    }

    /// Flip a term's status, rewriting the full record under the same key
    ///
    /// All other fields are carried over unchanged. The store enforces no
    /// ownership check here; only-the-owner-toggles is a catalog-level
    /// convention.
    pub async fn toggle_status(&self, session: &dyn LedgerWrite, id: &str) -> Result<Term> {
        let key = term_key(id);
        let bytes = session.get_data(&key).await?;
        if bytes.is_empty() {
            return Err(TermsError::NotFound(id.to_string()));
        }

        let mut record: TermRecord =
            serde_json::from_slice(&bytes).map_err(|e| TermsError::MalformedRecord {
                key: key.clone(),
                reason: e.to_string(),
            })?;

        record.status = record.status.toggled();
        session
            .set_data(&key, &serde_json::to_vec(&record)?)
            .await?;

        info!("toggled term {} to {:?}", id, record.status);
        self.log
            .record(format!("Toggled term {}... status", truncate_chars(id, 6)))
            .await;

        Ok(Term::from_record(id.to_string(), record))
    }

    /// Read and parse the index; a malformed index degrades to empty
    async fn read_index<L: LedgerRead + ?Sized>(&self, ledger: &L) -> Result<Vec<String>> {
        let bytes = ledger.get_data(INDEX_KEY).await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_slice::<Vec<String>>(&bytes) {
            Ok(keys) => Ok(keys),
            Err(e) => {
                warn!("error parsing term index: {}", e);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_condition;
    use didterms_ledger_client::MemoryLedger;

    fn store() -> TermStore {
        TermStore::new(Arc::new(ActionLog::new()))
    }

    fn record_json(timestamp: u64, description: &str) -> Vec<u8> {
        serde_json::to_vec(&TermRecord {
            condition: encode_condition(true),
            timestamp,
            owner: "0xabc".to_string(),
            category: "Privacy".to_string(),
            description: description.to_string(),
            status: TermStatus::Active,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_load_empty_ledger() {
        let ledger = MemoryLedger::new();
        let terms = store().load(&ledger.read_only()).await.unwrap();
        assert!(terms.is_empty());
    }

    #[tokio::test]
    async fn test_load_unavailable_ledger_keeps_snapshot() {
        let ledger = MemoryLedger::new();
        let store = store();

        ledger
            .set_data(INDEX_KEY, br#"["a"]"#)
            .await
            .unwrap();
        ledger
            .set_data("term_a", &record_json(1, "kept"))
            .await
            .unwrap();
        store.load(&ledger.read_only()).await.unwrap();
        assert_eq!(store.snapshot().await.len(), 1);

        ledger.set_available(false);
        let terms = store.load(&ledger.read_only()).await.unwrap();
        assert!(terms.is_empty());
        // Previous snapshot survives a not-ready load
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_load_skips_missing_and_malformed_records() {
        let ledger = MemoryLedger::new();
        ledger
            .set_data(INDEX_KEY, br#"["good","missing","broken","also-good"]"#)
            .await
            .unwrap();
        ledger
            .set_data("term_good", &record_json(1, "good"))
            .await
            .unwrap();
        ledger
            .set_data("term_broken", b"{not json")
            .await
            .unwrap();
        ledger
            .set_data("term_also-good", &record_json(2, "also good"))
            .await
            .unwrap();

        let terms = store().load(&ledger.read_only()).await.unwrap();
        assert_eq!(terms.len(), 2);
        assert!(terms.iter().any(|t| t.id == "good"));
        assert!(terms.iter().any(|t| t.id == "also-good"));
    }

    #[tokio::test]
    async fn test_load_orders_newest_first() {
        let ledger = MemoryLedger::new();
        ledger
            .set_data(INDEX_KEY, br#"["a","b","c"]"#)
            .await
            .unwrap();
        ledger.set_data("term_a", &record_json(10, "a")).await.unwrap();
        ledger.set_data("term_b", &record_json(30, "b")).await.unwrap();
        ledger.set_data("term_c", &record_json(20, "c")).await.unwrap();

        let terms = store().load(&ledger.read_only()).await.unwrap();
        let stamps: Vec<u64> = terms.iter().map(|t| t.timestamp).collect();
        assert_eq!(stamps, vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn test_load_tie_break_follows_index_order() {
        let ledger = MemoryLedger::new();
        ledger
            .set_data(INDEX_KEY, br#"["first","second"]"#)
            .await
            .unwrap();
        ledger
            .set_data("term_first", &record_json(5, "first"))
            .await
            .unwrap();
        ledger
            .set_data("term_second", &record_json(5, "second"))
            .await
            .unwrap();

        let terms = store().load(&ledger.read_only()).await.unwrap();
        assert_eq!(terms[0].id, "first");
        assert_eq!(terms[1].id, "second");
    }

    #[tokio::test]
    async fn test_create_writes_record_and_index() {
        let ledger = MemoryLedger::new();
        let signer = ledger.signer().unwrap();
        let store = store();

        let term = store
            .create(
                &signer,
                NewTerm {
                    category: "Data Usage".to_string(),
                    description: "No ads".to_string(),
                    condition: false,
                },
                "0xOwner",
            )
            .await
            .unwrap();

        assert_eq!(term.status, TermStatus::Active);
        assert!(!decode_condition(&term.encrypted_condition));

        let index: Vec<String> =
            serde_json::from_slice(&ledger.get_data(INDEX_KEY).await.unwrap()).unwrap();
        assert_eq!(index, vec![term.id.clone()]);

        let stored: TermRecord =
            serde_json::from_slice(&ledger.get_data(&term_key(&term.id)).await.unwrap()).unwrap();
        assert_eq!(stored, term.to_record());
    }

    #[tokio::test]
    async fn test_create_appends_to_existing_index() {
        let ledger = MemoryLedger::new();
        let signer = ledger.signer().unwrap();
        ledger
            .set_data(INDEX_KEY, br#"["existing"]"#)
            .await
            .unwrap();

        let term = store()
            .create(
                &signer,
                NewTerm {
                    category: "c".to_string(),
                    description: "d".to_string(),
                    condition: true,
                },
                "0xabc",
            )
            .await
            .unwrap();

        let index: Vec<String> =
            serde_json::from_slice(&ledger.get_data(INDEX_KEY).await.unwrap()).unwrap();
        assert_eq!(index, vec!["existing".to_string(), term.id]);
    }

    #[tokio::test]
    async fn test_create_propagates_rejected_write() {
        let ledger = MemoryLedger::new();
        let signer = ledger.signer().unwrap();
        ledger.set_reject_writes(true);

        let err = store()
            .create(
                &signer,
                NewTerm {
                    category: "c".to_string(),
                    description: "d".to_string(),
                    condition: true,
                },
                "0xabc",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TermsError::WriteFailed(_)));
    }

    #[tokio::test]
    async fn test_toggle_missing_term_is_not_found() {
        let ledger = MemoryLedger::new();
        let signer = ledger.signer().unwrap();

        let err = store().toggle_status(&signer, "absent").await.unwrap_err();
        assert!(matches!(err, TermsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_double_toggle_restores_record_bytes() {
        let ledger = MemoryLedger::new();
        let signer = ledger.signer().unwrap();
        let store = store();

        let term = store
            .create(
                &signer,
                NewTerm {
                    category: "c".to_string(),
                    description: "d".to_string(),
                    condition: true,
                },
                "0xabc",
            )
            .await
            .unwrap();

        let key = term_key(&term.id);
        let original = ledger.get_data(&key).await.unwrap();

        let toggled = store.toggle_status(&signer, &term.id).await.unwrap();
        assert_eq!(toggled.status, TermStatus::Inactive);
        assert_ne!(ledger.get_data(&key).await.unwrap(), original);

        let restored = store.toggle_status(&signer, &term.id).await.unwrap();
        assert_eq!(restored.status, TermStatus::Active);
        assert_eq!(ledger.get_data(&key).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_actions_are_recorded() {
        let ledger = MemoryLedger::new();
        let signer = ledger.signer().unwrap();
        let log = Arc::new(ActionLog::new());
        let store = TermStore::new(Arc::clone(&log));

        let term = store
            .create(
                &signer,
                NewTerm {
                    category: "c".to_string(),
                    description: "A very long description that gets truncated".to_string(),
                    condition: true,
                },
                "0xabc",
            )
            .await
            .unwrap();
        store.toggle_status(&signer, &term.id).await.unwrap();

        let entries = log.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], "Created term: A very long description that g...");
        assert!(entries[1].starts_with("Toggled term "));
        assert!(entries[1].ends_with("... status"));
    }
}
