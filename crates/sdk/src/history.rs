//! Local action history
//!
//! Human-readable log of the user's registry actions (creates, toggles,
//! reveals). In-memory only, never persisted, never authoritative.

use tokio::sync::Mutex;

/// Append-only log of user actions
pub struct ActionLog {
    entries: Mutex<Vec<String>>,
}

impl ActionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Record an action
    pub async fn record(&self, action: impl Into<String>) {
        self.entries.lock().await.push(action.into());
    }

    /// The most recent actions, newest first
    pub async fn recent(&self, limit: usize) -> Vec<String> {
        let entries = self.entries.lock().await;
        entries.iter().rev().take(limit).cloned().collect()
    }

    /// All actions in the order they happened
    pub async fn entries(&self) -> Vec<String> {
        self.entries.lock().await.clone()
    }

    /// Number of recorded actions
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether anything has been recorded
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}
