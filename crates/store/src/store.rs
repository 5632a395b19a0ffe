//! In-memory per-user event log

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use vigil_core::{Event, UserId};

/// In-memory, append-only store of per-user event histories.
///
/// Histories are keyed by [`UserId`], created lazily on first use, and only
/// ever grow. Access to a single user's log goes through a per-user mutex so
/// a read-evaluate-append sequence for one user never interleaves with
/// another for the same user; distinct users proceed in parallel.
///
/// The raw map is never handed out: callers only ever see `&[Event]`
/// snapshots or clones.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, Arc<Mutex<Vec<Event>>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user log handle, created on first use.
    fn log_of(&self, user_id: &UserId) -> Arc<Mutex<Vec<Event>>> {
        if let Some(log) = self.users.read().unwrap().get(user_id) {
            return Arc::clone(log);
        }
        let mut users = self.users.write().unwrap();
        Arc::clone(users.entry(user_id.clone()).or_default())
    }

    /// Snapshot of a user's committed events, oldest first.
    ///
    /// An unseen user has an empty history; this is never an error.
    pub fn history_of(&self, user_id: &UserId) -> Vec<Event> {
        match self.users.read().unwrap().get(user_id) {
            Some(log) => log.lock().unwrap().clone(),
            None => Vec::new(),
        }
    }

    /// Append one event to a user's history.
    ///
    /// The append is visible to the next `history_of` call for the same user.
    pub fn append(&self, user_id: &UserId, event: Event) {
        let log = self.log_of(user_id);
        let mut log = log.lock().unwrap();
        log.push(event);
    }

    /// Run `f` against the user's prior events, then append `event`, all
    /// under the user's lock.
    ///
    /// `f` never observes the event being committed, and no other writer for
    /// the same user can slip in between evaluation and commit. The append
    /// happens unconditionally, whatever `f` returns.
    pub fn evaluate_then_append<F, R>(&self, user_id: &UserId, event: Event, f: F) -> R
    where
        F: FnOnce(&[Event]) -> R,
    {
        let log = self.log_of(user_id);
        let mut log = log.lock().unwrap();
        let result = f(&log);
        log.push(event);
        result
    }

    /// Check if a user has a history entry (possibly empty)
    pub fn has_user(&self, user_id: &UserId) -> bool {
        self.users.read().unwrap().contains_key(user_id)
    }

    /// Number of tracked users
    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }
}
