//! Dialog Store - in-memory conversation storage
//!
//! The store owns every conversation for the lifetime of the process. It is
//! the only shared mutable state in the service; handlers receive a cloned
//! handle and all reads return snapshots, so callers can never mutate
//! history. Persistence, if it ever arrives, slots in behind this interface
//! as a write-ahead append without changing the guarantees below.

pub mod key;

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

use socialite_core::{DialogMessage, StoreStats, UserId};

pub use key::{dialog_key, DialogKey};

/// Concurrent map from conversation key to its append-only message sequence.
///
/// Appends to the same key are serialized by the per-key entry lock; their
/// order is the order the store observed them, not client wall-clock order.
/// A send either fully commits or does not execute, so reads never see a
/// half-written message.
#[derive(Clone, Default)]
pub struct DialogStore {
    dialogs: Arc<DashMap<DialogKey, Vec<DialogMessage>>>,
}

impl DialogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, creating the conversation on first use.
    ///
    /// The timestamp is taken while the entry lock is held, so within one
    /// conversation timestamps are non-decreasing in serialization order.
    pub fn append(&self, key: DialogKey, from: &UserId, to: &UserId, text: String) -> DialogMessage {
        let mut entry = self.dialogs.entry(key).or_default();
        let message = DialogMessage {
            from: from.clone(),
            to: to.clone(),
            text,
            timestamp: chrono::Utc::now(),
        };
        entry.push(message.clone());
        message
    }

    /// Snapshot of a conversation in insertion order. A never-created
    /// conversation is an empty sequence, not an error.
    pub fn list(&self, key: &DialogKey) -> Vec<DialogMessage> {
        self.dialogs
            .get(key)
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// All conversations the given user participates in, keyed by
    /// conversation key.
    ///
    /// Participants are inferred from the first message only. That is
    /// sufficient because a conversation key is immutably tied to exactly
    /// two identities for its entire lifetime.
    pub fn list_for_user(&self, user: &UserId) -> HashMap<String, Vec<DialogMessage>> {
        self.dialogs
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .first()
                    .is_some_and(|first| first.from == *user || first.to == *user)
            })
            .map(|entry| (entry.key().to_string(), entry.value().clone()))
            .collect()
    }

    /// Aggregate counters for monitoring. Eventually-consistent: the counts
    /// reflect some serialization point, not necessarily the latest write.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_dialogs: self.dialogs.len(),
            total_messages: self.dialogs.iter().map(|entry| entry.value().len()).sum(),
        }
    }
}
