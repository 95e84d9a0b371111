//! Process-wide, bounded session map.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::session::ChatSession;

/// Default bound on live sessions when the deployment does not configure one.
pub const DEFAULT_CAPACITY: usize = 1024;

struct Entry {
    session: Arc<Mutex<ChatSession>>,
    last_used: DateTime<Utc>,
}

/// Map from session id to conversation state.
///
/// Lookup-or-create and removal are atomic under the map lock; the session
/// itself is handed out as an `Arc<Mutex<ChatSession>>` so a handler can
/// hold one session's lock across the begin-turn / generate / record-reply
/// sequence without serializing unrelated sessions.
///
/// The map is bounded: creating a session at capacity evicts the least
/// recently used one. Sessions are otherwise only removed by [`reset`].
///
/// [`reset`]: SessionStore::reset
pub struct SessionStore {
    inner: Mutex<HashMap<String, Entry>>,
    capacity: usize,
}

impl SessionStore {
    /// Creates a store bounded to `capacity` live sessions (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Returns the session for `id`, creating an Uninitiated one if the id
    /// is unknown. Refreshes the id's recency either way.
    pub async fn session(&self, id: &str) -> Arc<Mutex<ChatSession>> {
        let mut map = self.inner.lock().await;

        if !map.contains_key(id) && map.len() >= self.capacity {
            if let Some(victim) = map
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone())
            {
                map.remove(&victim);
                info!(session = %victim, "evicted least recently used session");
            }
        }

        let entry = map.entry(id.to_string()).or_insert_with(|| {
            debug!(session = %id, "created new session");
            Entry {
                session: Arc::new(Mutex::new(ChatSession::new())),
                last_used: Utc::now(),
            }
        });
        entry.last_used = Utc::now();
        Arc::clone(&entry.session)
    }

    /// Removes the session if present. Idempotent: callers get no signal
    /// about whether the id existed.
    pub async fn reset(&self, id: &str) {
        let removed = self.inner.lock().await.remove(id).is_some();
        debug!(session = %id, removed, "session reset");
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// True when no session is live.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_creates_lazily_and_is_idempotent() {
        let store = SessionStore::new(8);
        let a = store.session("s1").await;
        let b = store.session("s1").await;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn store_starts_empty_and_reflects_removal() {
        let store = SessionStore::new(8);
        assert!(store.is_empty().await);

        store.session("s1").await;
        assert!(!store.is_empty().await);

        store.reset("s1").await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn reset_makes_the_id_behave_like_a_fresh_session() {
        let store = SessionStore::new(8);
        {
            let entry = store.session("s1").await;
            entry.lock().await.begin_turn("explain recursion");
        }

        store.reset("s1").await;
        // Resetting an absent id is a no-op, not an error.
        store.reset("s1").await;

        let entry = store.session("s1").await;
        assert!(entry.lock().await.is_uninitiated());
    }

    #[tokio::test]
    async fn capacity_bound_evicts_least_recently_used() {
        let store = SessionStore::new(2);
        store.session("a").await;
        store.session("b").await;
        // Touch "a" so "b" becomes the eviction candidate.
        store.session("a").await;

        store.session("c").await;
        assert_eq!(store.len().await, 2);

        // "b" was evicted: recreating it yields a fresh session while "a"
        // kept its state.
        {
            let a = store.session("a").await;
            a.lock().await.begin_turn("pinned");
        }
        let a = store.session("a").await;
        assert_eq!(a.lock().await.base_question(), "pinned");
    }

    #[tokio::test]
    async fn concurrent_turns_on_distinct_sessions_do_not_block_each_other() {
        let store = Arc::new(SessionStore::new(8));
        let s1 = store.session("s1").await;
        let s2 = store.session("s2").await;

        // Holding s1's lock must not prevent work on s2.
        let _guard = s1.lock().await;
        let mut g2 = s2.lock().await;
        g2.begin_turn("hello");
        assert_eq!(g2.base_question(), "hello");
    }
}
