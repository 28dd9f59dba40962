use discern_core::models::session::SessionRecord;
use discern_core::models::user::UserInfo;
use uuid::Uuid;

use crate::error::SessionError;

/// Keyed storage for session records with idle expiry.
///
/// Records are returned by value; callers modify a copy and write it back
/// with [`SessionStore::save`]. Concurrent saves of the same session are
/// last-write-wins.
pub trait SessionStore: Send + Sync {
    /// Create and store a fresh session for `user`.
    fn create(&self, user: UserInfo) -> SessionRecord;

    /// Fetch a live session and mark it active. An expired session is
    /// removed and reported as absent.
    fn get(&self, id: Uuid) -> Option<SessionRecord>;

    /// Replace a stored session. Fails if the session is gone or expired.
    fn save(&self, record: SessionRecord) -> Result<(), SessionError>;

    /// Remove a session. Returns whether one was present.
    fn delete(&self, id: Uuid) -> bool;

    /// Drop every expired session, returning how many were removed.
    fn purge_expired(&self) -> usize;

    /// Number of stored sessions, expired ones included until purged.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
