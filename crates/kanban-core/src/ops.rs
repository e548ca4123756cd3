//! Board and Task Operations
//!
//! Each operation borrows the current state and returns a new one; the
//! input is never touched, so a rejected operation leaves state as it was.

use log::debug;

use crate::error::{KanbanError, KanbanResult};
use crate::ids::{next_id, Clock};
use crate::model::{Board, BoardId, KanbanState, Task, TaskId};

fn require_title(title: &str, what: &str) -> KanbanResult<()> {
    if title.trim().is_empty() {
        return Err(KanbanError::Validation(format!("{} title is empty", what)));
    }
    Ok(())
}

impl KanbanState {
    // ========================
    // Boards
    // ========================

    /// Append a new board at the end
    pub fn create_board(&self, title: &str, clock: &impl Clock) -> KanbanResult<Self> {
        require_title(title, "board")?;
        let id = BoardId(next_id(self, clock)?);
        debug!("create {} ({:?})", id, title);

        let mut next = self.clone();
        next.boards.push(Board::new(id, title));
        Ok(next)
    }

    pub fn rename_board(&self, board_id: BoardId, new_title: &str) -> KanbanResult<Self> {
        require_title(new_title, "board")?;
        let index = self
            .board_index(board_id)
            .ok_or_else(|| KanbanError::NotFound(board_id.to_string()))?;

        let mut next = self.clone();
        next.boards[index].title = new_title.to_string();
        Ok(next)
    }

    /// Remove a board together with every task it owns
    pub fn delete_board(&self, board_id: BoardId) -> KanbanResult<Self> {
        if self.board(board_id).is_none() {
            return Err(KanbanError::NotFound(board_id.to_string()));
        }

        let mut next = self.clone();
        next.boards.retain(|b| b.id != board_id);
        next.tasks.retain(|t| t.board_id != board_id);
        debug!("deleted {} and {} task(s)", board_id, self.tasks.len() - next.tasks.len());
        Ok(next)
    }

    /// Remove all boards and tasks
    pub fn clear_boards(&self) -> Self {
        Self::new()
    }

    // ========================
    // Tasks
    // ========================

    /// Append a new task owned by `board_id`
    pub fn create_task(
        &self,
        board_id: BoardId,
        title: &str,
        description: &str,
        clock: &impl Clock,
    ) -> KanbanResult<Self> {
        require_title(title, "task")?;
        if self.board(board_id).is_none() {
            return Err(KanbanError::NotFound(board_id.to_string()));
        }
        let id = TaskId(next_id(self, clock)?);
        debug!("create {} in {}", id, board_id);

        let mut next = self.clone();
        next.tasks.push(Task::new(id, board_id, title).with_description(description));
        Ok(next)
    }

    /// Replace a task's title and description
    pub fn update_task(
        &self,
        task_id: TaskId,
        new_title: &str,
        new_description: &str,
    ) -> KanbanResult<Self> {
        require_title(new_title, "task")?;
        let index = self
            .task_index(task_id)
            .ok_or_else(|| KanbanError::NotFound(task_id.to_string()))?;

        let mut next = self.clone();
        let task = &mut next.tasks[index];
        task.title = new_title.to_string();
        task.description = new_description.to_string();
        Ok(next)
    }

    pub fn rename_task(&self, task_id: TaskId, new_title: &str) -> KanbanResult<Self> {
        let task = self
            .task(task_id)
            .ok_or_else(|| KanbanError::NotFound(task_id.to_string()))?;
        self.update_task(task_id, new_title, &task.description)
    }

    pub fn edit_task_description(
        &self,
        task_id: TaskId,
        new_description: &str,
    ) -> KanbanResult<Self> {
        let task = self
            .task(task_id)
            .ok_or_else(|| KanbanError::NotFound(task_id.to_string()))?;
        self.update_task(task_id, &task.title, new_description)
    }

    pub fn delete_task(&self, task_id: TaskId) -> KanbanResult<Self> {
        let index = self
            .task_index(task_id)
            .ok_or_else(|| KanbanError::NotFound(task_id.to_string()))?;

        let mut next = self.clone();
        next.tasks.remove(index);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FixedClock;

    fn board_titles(state: &KanbanState) -> Vec<&str> {
        state.boards.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_create_board_appends() {
        let state = KanbanState::new()
            .create_board("Todo", &FixedClock(1))
            .unwrap()
            .create_board("Done", &FixedClock(1))
            .unwrap();

        assert_eq!(board_titles(&state), vec!["Todo", "Done"]);
        assert_ne!(state.boards[0].id, state.boards[1].id);
    }

    #[test]
    fn test_create_board_rejects_blank_title() {
        let state = KanbanState::new().create_board("A", &FixedClock(1)).unwrap();
        for title in ["", "   ", "\t\n"] {
            let err = state.create_board(title, &FixedClock(2)).unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(state.boards.len(), 1);
    }

    #[test]
    fn test_rename_board() {
        let state = KanbanState::new().create_board("A", &FixedClock(1)).unwrap();
        let id = state.boards[0].id;

        let renamed = state.rename_board(id, "Backlog").unwrap();
        assert_eq!(board_titles(&renamed), vec!["Backlog"]);
        // Input untouched
        assert_eq!(board_titles(&state), vec!["A"]);

        assert!(state.rename_board(id, " ").unwrap_err().is_validation());
        assert!(state.rename_board(BoardId(404), "X").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_board_cascades() {
        let state = KanbanState::new()
            .create_board("A", &FixedClock(1))
            .unwrap()
            .create_board("B", &FixedClock(2))
            .unwrap();
        let (a, b) = (state.boards[0].id, state.boards[1].id);
        let state = state
            .create_task(a, "T1", "", &FixedClock(3))
            .unwrap()
            .create_task(b, "T2", "", &FixedClock(4))
            .unwrap()
            .create_task(a, "T3", "", &FixedClock(5))
            .unwrap();

        let after = state.delete_board(a).unwrap();
        assert_eq!(board_titles(&after), vec!["B"]);
        assert_eq!(after.tasks.len(), 1);
        assert!(after.tasks.iter().all(|t| t.board_id == b));

        assert!(after.delete_board(a).unwrap_err().is_not_found());
    }

    #[test]
    fn test_clear_boards() {
        let state = KanbanState::new().create_board("A", &FixedClock(1)).unwrap();
        let a = state.boards[0].id;
        let state = state.create_task(a, "T", "", &FixedClock(2)).unwrap();

        let cleared = state.clear_boards();
        assert!(cleared.is_empty());
        assert!(cleared.tasks.is_empty());
    }

    #[test]
    fn test_create_task() {
        let state = KanbanState::new().create_board("A", &FixedClock(1)).unwrap();
        let a = state.boards[0].id;

        let state = state.create_task(a, "Write", "first draft", &FixedClock(2)).unwrap();
        let tasks = state.tasks_for_board(a);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Write");
        assert_eq!(tasks[0].description, "first draft");

        let err = state.create_task(BoardId(404), "X", "", &FixedClock(3)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_task_rejects_blank_title() {
        let state = KanbanState::new().create_board("A", &FixedClock(1)).unwrap();
        let a = state.boards[0].id;

        let err = state.create_task(a, "  ", "desc", &FixedClock(2)).unwrap_err();
        assert!(err.is_validation());
        assert!(state.tasks_for_board(a).is_empty());
    }

    #[test]
    fn test_update_and_delete_task() {
        let state = KanbanState::new().create_board("A", &FixedClock(1)).unwrap();
        let a = state.boards[0].id;
        let state = state.create_task(a, "Old", "old desc", &FixedClock(2)).unwrap();
        let t = state.tasks[0].id;

        let state = state.update_task(t, "New", "").unwrap();
        assert_eq!(state.tasks[0].title, "New");
        assert_eq!(state.tasks[0].description, "");

        let state = state.rename_task(t, "Newer").unwrap();
        let state = state.edit_task_description(t, "details").unwrap();
        assert_eq!(state.tasks[0].title, "Newer");
        assert_eq!(state.tasks[0].description, "details");

        assert!(state.update_task(t, "", "x").unwrap_err().is_validation());
        assert!(state.update_task(TaskId(404), "x", "").unwrap_err().is_not_found());

        let state = state.delete_task(t).unwrap();
        assert!(state.tasks.is_empty());
        assert!(state.delete_task(t).unwrap_err().is_not_found());
    }
}
