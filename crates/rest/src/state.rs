//! Application state for the REST API.
//!
//! The state holds the storage backend handle (acquired once at process
//! start, shared by every request), the record minter, and the server
//! configuration. Handlers receive it through axum's `State` extractor.

use std::sync::Arc;

use medibase_model::RecordMinter;
use medibase_persistence::RecordStore;

use crate::config::ServerConfig;

/// Shared application state.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`RecordStore`])
pub struct AppState<S> {
    store: Arc<S>,
    minter: RecordMinter,
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is behind an Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            minter: self.minter.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: RecordStore> AppState<S> {
    /// Creates state with the default minter (UUIDv4 identities, system clock).
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            minter: RecordMinter::default(),
            config: Arc::new(config),
        }
    }

    /// Replaces the minter, for deterministic identities/timestamps in tests.
    pub fn with_minter(mut self, minter: RecordMinter) -> Self {
        self.minter = minter;
        self
    }

    /// Returns a reference to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the record minter.
    pub fn minter(&self) -> &RecordMinter {
        &self.minter
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medibase_persistence::MemoryStore;

    #[test]
    fn test_app_state_creation() {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store, ServerConfig::for_testing());
        assert_eq!(state.store().backend_name(), "memory");
        assert_eq!(state.config().db_name, "medibase-test");
    }

    #[test]
    fn test_app_state_clone_shares_store() {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store, ServerConfig::for_testing());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.store(), cloned.store()));
    }
}
