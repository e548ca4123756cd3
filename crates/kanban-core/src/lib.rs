//! Kanban Core
//!
//! Framework-independent board logic:
//! - model: boards, tasks and the state tree
//! - ops: create/rename/delete operations
//! - ordering: drag-and-drop reordering and reparenting
//! - persistence: snapshot load/save over a key-value store
//! - form: dialog contract and form drafts

mod config;
mod error;
mod form;
mod ids;
mod model;
mod ops;
mod ordering;
mod persistence;


pub use config::KanbanConfig;
pub use error::{KanbanError, KanbanResult};
pub use form::{cancel, submit, Dialog, FormDraft, FormKind};
pub use ids::{next_id, Clock, FixedClock, SystemClock};
pub use model::{Board, BoardId, KanbanState, Task, TaskId};
pub use ordering::{move_item, DragEndEvent, DragItem, DragOverEvent, DragStartEvent, DragState};
pub use persistence::{KeyValueStore, MemoryStore, SnapshotStore, DEFAULT_STORAGE_KEY};
