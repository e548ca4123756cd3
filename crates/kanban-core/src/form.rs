//! Form Drafts and the Dialog Contract
//!
//! Create/edit input is collected in a modal dialog. Closing the dialog never
//! commits; only `submit` applies the draft, and it closes the dialog only
//! when the draft was accepted.

use crate::error::KanbanResult;
use crate::ids::Clock;
use crate::model::{BoardId, KanbanState, TaskId};

/// Show/hide capability of a modal surface
pub trait Dialog {
    fn open(&self);
    fn close(&self);
}

/// What saving the form will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    CreateBoard,
    RenameBoard(BoardId),
    CreateTask(BoardId),
    EditTask(TaskId),
}

impl FormKind {
    /// Task forms also collect a description
    pub fn has_description(&self) -> bool {
        matches!(self, FormKind::CreateTask(_) | FormKind::EditTask(_))
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormKind::CreateBoard => "Title",
            FormKind::RenameBoard(_) => "Enter new title",
            FormKind::CreateTask(_) | FormKind::EditTask(_) => "Enter Task Title",
        }
    }
}

/// Field values being edited in the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub kind: FormKind,
    pub title: String,
    pub description: String,
}

impl FormDraft {
    fn blank(kind: FormKind) -> Self {
        Self {
            kind,
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn create_board() -> Self {
        Self::blank(FormKind::CreateBoard)
    }

    pub fn create_task(board_id: BoardId) -> Self {
        Self::blank(FormKind::CreateTask(board_id))
    }

    /// Prefilled with the board's current title
    pub fn rename_board(state: &KanbanState, board_id: BoardId) -> Option<Self> {
        let board = state.board(board_id)?;
        Some(Self {
            title: board.title.clone(),
            ..Self::blank(FormKind::RenameBoard(board_id))
        })
    }

    /// Prefilled with the task's current fields
    pub fn edit_task(state: &KanbanState, task_id: TaskId) -> Option<Self> {
        let task = state.task(task_id)?;
        Some(Self {
            kind: FormKind::EditTask(task_id),
            title: task.title.clone(),
            description: task.description.clone(),
        })
    }

    /// Run the operation this draft stands for
    pub fn apply(&self, state: &KanbanState, clock: &impl Clock) -> KanbanResult<KanbanState> {
        match self.kind {
            FormKind::CreateBoard => state.create_board(&self.title, clock),
            FormKind::RenameBoard(id) => state.rename_board(id, &self.title),
            FormKind::CreateTask(board_id) => {
                state.create_task(board_id, &self.title, &self.description, clock)
            }
            FormKind::EditTask(id) => state.update_task(id, &self.title, &self.description),
        }
    }
}

/// Apply the draft; on success close the dialog, otherwise leave it open
pub fn submit(
    dialog: &impl Dialog,
    draft: &FormDraft,
    state: &KanbanState,
    clock: &impl Clock,
) -> KanbanResult<KanbanState> {
    let next = draft.apply(state, clock)?;
    dialog.close();
    Ok(next)
}

/// Dismiss without committing
pub fn cancel(dialog: &impl Dialog) {
    dialog.close();
}
