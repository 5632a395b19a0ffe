//! Vigil API - HTTP boundary for event ingestion
//!
//! Validation lives here: unsupported event types, malformed amounts and
//! out-of-range seconds are rejected with a client error before the engine
//! or the store is ever touched.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
