//! Vigil Store - Per-user append-only event histories
//!
//! Pure storage: the store has no alert-relevant behavior of its own. It
//! guarantees ordering (insertion order = chronological order) and per-user
//! serialization of the read-evaluate-append sequence.

pub mod store;

pub use store::MemoryStore;
