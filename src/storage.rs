//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use kanban_core::{KanbanError, KanbanResult, KeyValueStore};

/// Handle to the page's local storage, looked up on every access
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> KanbanResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| KanbanError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| KanbanError::Storage(format!("{:?}", e)))
    }
}
