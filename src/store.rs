//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds the one board state tree; every change goes through these helpers.

use leptos::prelude::*;
use log::debug;
use reactive_stores::Store;

use kanban_core::{BoardId, DragState, KanbanResult, KanbanState, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Boards and tasks (the persisted snapshot)
    pub board: KanbanState,
    /// Drag state machine
    pub drag: DragState,
}

impl AppState {
    pub fn new(board: KanbanState) -> Self {
        Self {
            board,
            drag: DragState::Idle,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current board state (tracked)
pub fn store_board(store: &AppStore) -> KanbanState {
    store.board().get()
}

pub fn store_board_untracked(store: &AppStore) -> KanbanState {
    store.board().get_untracked()
}

/// Tasks of one board in display order (tracked)
pub fn store_tasks_for_board(store: &AppStore, board_id: BoardId) -> Vec<Task> {
    store.board().with(|state| state.tasks_for_board(board_id))
}

/// Replace the board state
pub fn store_replace_board(store: &AppStore, next: KanbanState) {
    *store.board().write() = next;
}

/// Commit a delete. Its only failure is a stale id, which is ignored.
pub fn store_commit(store: &AppStore, result: KanbanResult<KanbanState>) {
    match result {
        Ok(next) => store_replace_board(store, next),
        Err(e) => debug!("ignored stale operation: {}", e),
    }
}

/// Drag state (tracked)
pub fn store_drag(store: &AppStore) -> DragState {
    store.drag().get()
}

pub fn store_drag_untracked(store: &AppStore) -> DragState {
    store.drag().get_untracked()
}

pub fn store_set_drag(store: &AppStore, drag: DragState) {
    *store.drag().write() = drag;
}
