//! Board Configuration
//!
//! Every field has a default; JSON overrides may name any subset.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{KanbanError, KanbanResult};
use crate::persistence::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KanbanConfig {
    /// Storage key holding the snapshot
    pub storage_key: String,
    /// Pointer travel in pixels before a press becomes a drag
    pub drag_activation_px: i32,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
    /// "error", "warn", "info", "debug", "trace" or "off"
    pub log_level: String,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            drag_activation_px: 3,
            log_capacity: 500,
            log_level: "info".to_string(),
        }
    }
}

impl KanbanConfig {
    pub fn from_json(raw: &str) -> KanbanResult<Self> {
        serde_json::from_str(raw).map_err(|e| KanbanError::Deserialization(e.to_string()))
    }

    /// Parsed log level; unknown names fall back to info
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
