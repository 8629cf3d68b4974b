//! In-memory session store. Sessions are the only state this service owns:
//! they live for one guidance conversation, are purged after a TTL of
//! inactivity, and are lost on restart. There is deliberately no
//! persistence layer behind this.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::conversation::ConversationTurn;
use crate::models::profile::{CareerPreferences, Profile};
use crate::models::recommendation::RecommendationSet;
use crate::roadmap::planner::LearningRoadmap;
use crate::skills::gap::GapReport;

/// Everything the service remembers about one user conversation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: Option<Profile>,
    pub preferences: Option<CareerPreferences>,
    pub recommendations: Option<RecommendationSet>,
    pub selected_path: Option<String>,
    pub roadmap: Option<LearningRoadmap>,
    pub gap_report: Option<GapReport>,
    pub turns: Vec<ConversationTurn>,
}

struct Entry {
    session: Session,
    last_active: Instant,
}

/// Concurrent map of session id to session state. Writes are atomic per
/// operation; the last write wins, which matches the one-outstanding-request
/// contract of the UI.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a fresh session and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut guard = self.inner.write().await;
        guard.insert(
            id,
            Entry {
                session: Session::default(),
                last_active: Instant::now(),
            },
        );
        id
    }

    /// Returns a snapshot of the session, touching its activity clock.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let mut guard = self.inner.write().await;
        let entry = guard.get_mut(&id)?;
        entry.last_active = Instant::now();
        Some(entry.session.clone())
    }

    /// Applies a mutation to the session, touching its activity clock.
    /// Returns `None` when the session does not exist.
    pub async fn update<F, T>(&self, id: Uuid, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut guard = self.inner.write().await;
        let entry = guard.get_mut(&id)?;
        entry.last_active = Instant::now();
        Some(mutate(&mut entry.session))
    }

    /// Removes a session ("start fresh"). Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(&id).is_some()
    }

    /// Removes sessions idle longer than the TTL. Returns the number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, e| now.duration_since(e.last_active) < self.ttl);
        before - guard.len()
    }
}
