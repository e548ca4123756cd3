//! Snapshot Persistence
//!
//! The whole state is written as one JSON string under one fixed key of a
//! key-value string store (`localStorage` in the browser). Loading fails
//! open: a missing or corrupt snapshot yields an empty board.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use log::{info, warn};
use serde::Deserialize;

use crate::error::{KanbanError, KanbanResult};
use crate::model::{Board, BoardId, KanbanState, Task, TaskId};

/// Key under which the snapshot lives unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "kanbanBoards";

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> KanbanResult<()>;
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> KanbanResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> KanbanResult<()> {
        (**self).set_item(key, value)
    }
}

// ========================
// Legacy format
// ========================

/// Boards with embedded tasks, as written by the first version of the app
#[derive(Deserialize)]
struct LegacyBoard {
    id: BoardId,
    title: String,
    #[serde(default)]
    tasks: Vec<LegacyTask>,
}

#[derive(Deserialize)]
struct LegacyTask {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSnapshot {
    Current(KanbanState),
    Legacy(Vec<LegacyBoard>),
}

/// Flatten embedded tasks, in order, onto their containing board
fn flatten_legacy(boards: Vec<LegacyBoard>) -> KanbanState {
    let mut state = KanbanState::new();
    for board in boards {
        for task in board.tasks {
            state.tasks.push(Task {
                id: task.id,
                title: task.title,
                description: task.description,
                board_id: board.id,
            });
        }
        state.boards.push(Board::new(board.id, board.title));
    }
    state
}

/// Drop duplicate ids and tasks whose board is gone
fn sanitize(mut state: KanbanState) -> KanbanState {
    let mut seen = HashSet::new();
    let before = (state.boards.len(), state.tasks.len());

    state.boards.retain(|b| seen.insert(b.id.0));
    let boards: HashSet<BoardId> = state.boards.iter().map(|b| b.id).collect();
    state.tasks.retain(|t| boards.contains(&t.board_id) && seen.insert(t.id.0));

    let after = (state.boards.len(), state.tasks.len());
    if before != after {
        warn!(
            "snapshot had invalid entries: dropped {} board(s), {} task(s)",
            before.0 - after.0,
            before.1 - after.1
        );
    }
    state
}

// ========================
// Snapshot store
// ========================

/// Reads and writes the board snapshot under a single key
pub struct SnapshotStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parse a stored snapshot (current or legacy format)
    pub fn decode(raw: &str) -> KanbanResult<KanbanState> {
        let snapshot: StoredSnapshot =
            serde_json::from_str(raw).map_err(|e| KanbanError::Deserialization(e.to_string()))?;
        let state = match snapshot {
            StoredSnapshot::Current(state) => state,
            StoredSnapshot::Legacy(boards) => {
                info!("upgrading legacy snapshot with {} board(s)", boards.len());
                flatten_legacy(boards)
            }
        };
        Ok(sanitize(state))
    }

    pub fn encode(state: &KanbanState) -> KanbanResult<String> {
        serde_json::to_string(state).map_err(|e| KanbanError::Storage(e.to_string()))
    }

    /// Stored state, or an empty one if nothing usable is stored
    pub fn load(&self) -> KanbanState {
        let Some(raw) = self.store.get_item(&self.key) else {
            return KanbanState::new();
        };
        match Self::decode(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("ignoring stored snapshot under {:?}: {}", self.key, e);
                KanbanState::new()
            }
        }
    }

    /// Overwrite the stored snapshot with `state`
    pub fn save(&self, state: &KanbanState) -> KanbanResult<()> {
        let raw = Self::encode(state)?;
        self.store.set_item(&self.key, &raw)
    }
}
