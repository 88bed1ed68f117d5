mod session;

pub use session::{RefillError, Session};

use crate::types::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A session handle. The mutex serializes all work for one user.
pub type SharedSession = Arc<Mutex<Session>>;

/// In-memory map of active quiz sessions, keyed by user
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<UserId, SharedSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `user_id` unless one already exists.
    /// Returns true if a new session was created.
    pub async fn create_if_absent(&self, user_id: UserId) -> bool {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&user_id) {
            return false;
        }
        sessions.insert(user_id, Arc::new(Mutex::new(Session::new(user_id))));
        tracing::info!("Started session for user {}", user_id);
        true
    }

    pub async fn get(&self, user_id: UserId) -> Option<SharedSession> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    /// Remove the session for `user_id`, returning it if there was one
    pub async fn remove(&self, user_id: UserId) -> Option<SharedSession> {
        let removed = self.sessions.write().await.remove(&user_id);
        if removed.is_some() {
            tracing::info!("Ended session for user {}", user_id);
        }
        removed
    }

    #[cfg(test)]
    pub async fn contains(&self, user_id: UserId) -> bool {
        self.sessions.read().await.contains_key(&user_id)
    }

    /// Whether `session` is still the handle registered for `user_id`.
    /// False once the session was ended, even if a new one was started since.
    pub async fn is_current(&self, user_id: UserId, session: &SharedSession) -> bool {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .is_some_and(|current| Arc::ptr_eq(current, session))
    }

    /// Number of active sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
