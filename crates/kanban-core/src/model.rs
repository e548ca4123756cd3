//! Board Model
//!
//! Boards and tasks in normalized form: one ordered board list and one flat
//! ordered task list where every task names its owning board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(pub u64);

/// Task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board {}", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task {}", self.0)
    }
}

/// A named column holding tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
}

impl Board {
    pub fn new(id: BoardId, title: impl Into<String>) -> Self {
        Self { id, title: title.into() }
    }
}

/// A work item owned by exactly one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub board_id: BoardId,
}

impl Task {
    pub fn new(id: TaskId, board_id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            board_id,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The whole board state; the single thing that gets persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanState {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl KanbanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn board_index(&self, id: BoardId) -> Option<usize> {
        self.boards.iter().position(|b| b.id == id)
    }

    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn board_ids(&self) -> Vec<BoardId> {
        self.boards.iter().map(|b| b.id).collect()
    }

    /// Tasks owned by a board, in display order
    pub fn tasks_for_board(&self, id: BoardId) -> Vec<Task> {
        self.tasks.iter().filter(|t| t.board_id == id).cloned().collect()
    }

    /// Largest id in use across boards and tasks
    pub fn max_id(&self) -> Option<u64> {
        let boards = self.boards.iter().map(|b| b.id.0);
        let tasks = self.tasks.iter().map(|t| t.id.0);
        boards.chain(tasks).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KanbanState {
        KanbanState {
            boards: vec![Board::new(BoardId(1), "A"), Board::new(BoardId(2), "B")],
            tasks: vec![
                Task::new(TaskId(10), BoardId(1), "T1"),
                Task::new(TaskId(11), BoardId(2), "T2"),
                Task::new(TaskId(12), BoardId(1), "T3"),
            ],
        }
    }

    #[test]
    fn test_tasks_for_board_keeps_order() {
        let state = sample();
        let ids: Vec<_> = state.tasks_for_board(BoardId(1)).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(10), TaskId(12)]);
        assert!(state.tasks_for_board(BoardId(99)).is_empty());
    }

    #[test]
    fn test_lookup() {
        let state = sample();
        assert_eq!(state.board(BoardId(2)).map(|b| b.title.as_str()), Some("B"));
        assert_eq!(state.task_index(TaskId(12)), Some(2));
        assert_eq!(state.board_index(BoardId(3)), None);
        assert_eq!(state.max_id(), Some(12));
        assert_eq!(KanbanState::new().max_id(), None);
    }

    #[test]
    fn test_task_serializes_board_id_camel_case() {
        let task = Task::new(TaskId(5), BoardId(1), "Write").with_description("docs");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":5,"title":"Write","description":"docs","boardId":1}"#);
    }
}
