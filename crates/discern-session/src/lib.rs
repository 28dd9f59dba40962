//! discern-session
//!
//! Session storage for in-progress questionnaires. The HTTP layer holds an
//! `Arc<dyn SessionStore>`; nothing here is process-global.

pub mod error;
pub mod memory;
pub mod store;

pub use error::SessionError;
pub use memory::MemorySessionStore;
pub use store::SessionStore;
