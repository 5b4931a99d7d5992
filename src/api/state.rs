//! Application state for the take-home pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::session::SessionState;

/// Every live session, keyed by session id.
pub type SessionMap = HashMap<Uuid, SessionState>;

/// Shared application state.
///
/// Holds the loaded pay configuration, which is read-only after startup,
/// and the session map. Each request locks the map for as long as it takes
/// to apply one interaction.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pay configuration.
    config: Arc<ConfigLoader>,
    /// Per-user session state.
    sessions: Arc<RwLock<SessionMap>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and no sessions.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the session map.
    pub fn sessions(&self) -> &RwLock<SessionMap> {
        &self.sessions
    }

    /// Starts a fresh session and returns its id.
    pub async fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, SessionState::new());
        id
    }

    /// Ends a session. Returns whether it existed.
    pub async fn remove_session(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }
}
