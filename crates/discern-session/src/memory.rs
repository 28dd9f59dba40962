use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use discern_core::models::session::SessionRecord;
use discern_core::models::user::UserInfo;
use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use crate::error::SessionError;
use crate::store::SessionStore;

/// Source of the current time. Injected so expiry can be tested.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// In-process session store with idle-time expiry.
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<Uuid, SessionRecord>>,
    ttl: SignedDuration,
    clock: Clock,
}

impl MemorySessionStore {
    pub fn new(ttl: SignedDuration) -> Self {
        Self::with_clock(ttl, Arc::new(Timestamp::now))
    }

    pub fn with_clock(ttl: SignedDuration, clock: Clock) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> SignedDuration {
        self.ttl
    }

    // A panic while holding the lock cannot leave a record half-written
    // (every mutation is a single insert or remove), so poison is ignored.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionRecord>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, user: UserInfo) -> SessionRecord {
        let record = SessionRecord::new(user, (self.clock)());
        self.lock().insert(record.id, record.clone());
        tracing::info!(session_id = %record.id, "session created");
        record
    }

    fn get(&self, id: Uuid) -> Option<SessionRecord> {
        let now = (self.clock)();
        let mut sessions = self.lock();
        let record = sessions.get_mut(&id)?;

        if record.is_expired(now, self.ttl) {
            sessions.remove(&id);
            tracing::info!(session_id = %id, "session expired");
            return None;
        }

        record.last_activity = now;
        Some(record.clone())
    }

    fn save(&self, mut record: SessionRecord) -> Result<(), SessionError> {
        let now = (self.clock)();
        let id = record.id;
        let mut sessions = self.lock();

        match sessions.get(&id) {
            None => return Err(SessionError::NotFound { id }),
            Some(existing) if existing.is_expired(now, self.ttl) => {
                sessions.remove(&id);
                return Err(SessionError::Expired { id });
            }
            Some(_) => {}
        }

        record.last_activity = now;
        sessions.insert(id, record);
        tracing::debug!(session_id = %id, "session saved");
        Ok(())
    }

    fn delete(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id).is_some();
        if removed {
            tracing::info!(session_id = %id, "session deleted");
        }
        removed
    }

    fn purge_expired(&self) -> usize {
        let now = (self.clock)();
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, record| !record.is_expired(now, self.ttl));
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!(purged, remaining = sessions.len(), "expired sessions purged");
        }
        purged
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
