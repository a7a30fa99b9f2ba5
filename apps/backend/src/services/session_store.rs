//! In-memory session store.
//!
//! Sessions live for the lifetime of the process. The map is a `DashMap`
//! for concurrent lookups and inserts; each session sits behind its own
//! mutex so a guess's read-compare-write runs atomically without
//! serialising unrelated games.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use tracing::warn;

use crate::domain::{Session, SessionId};

/// A locked-on-demand reference to one stored session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: SessionId,
    session: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Lock the session. Never hold the guard across an `.await`.
    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock()
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, Arc<Mutex<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Insert a fresh round-0 session under a newly generated id.
    pub fn create(&self) -> SessionHandle {
        loop {
            match self.sessions.entry(SessionId::generate()) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    let session = Arc::new(Mutex::new(Session::new()));
                    slot.insert(Arc::clone(&session));
                    return SessionHandle { id, session };
                }
                Entry::Occupied(taken) => {
                    warn!(session_id = %taken.key(), "session id collision, regenerating");
                }
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.get(id).map(|entry| SessionHandle {
            id: entry.key().clone(),
            session: Arc::clone(entry.value()),
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
