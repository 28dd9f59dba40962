//! discern-core
//!
//! Pure domain types for the Discern screening system. No I/O, no HTTP.
//! This is the shared vocabulary between the scorer, the inference engine,
//! the session store, and the server.

pub mod error;
pub mod models;
