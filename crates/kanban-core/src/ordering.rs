//! Ordering Engine
//!
//! Reorders boards and tasks, and moves tasks between boards, in response to
//! drag-start / drag-over / drag-end events from the drag surface.
//!
//! Transitions return `None` when nothing changed so callers can skip the
//! re-render and the persist write. Events naming ids that no longer exist
//! are ignored; the engine never fails.

use log::debug;

use crate::model::{BoardId, KanbanState, TaskId};

/// A draggable thing: id plus type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragItem {
    Board(BoardId),
    Task(TaskId),
}

impl DragItem {
    pub fn is_task(&self) -> bool {
        matches!(self, DragItem::Task(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStartEvent {
    pub active: DragItem,
}

/// Fired whenever the hovered target changes during a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOverEvent {
    pub active: DragItem,
    pub over: Option<DragItem>,
}

/// Fired once when the pointer is released; `over: None` is a cancelled drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEndEvent {
    pub active: DragItem,
    pub over: Option<DragItem>,
}

/// Move one element from `from` to `to`, shifting the ones in between.
/// Out-of-range indices leave the vector as it is.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Which item (if any) is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragItem),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn active(&self) -> Option<DragItem> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(item) => Some(*item),
        }
    }

    pub fn active_board(&self) -> Option<BoardId> {
        match self {
            DragState::Dragging(DragItem::Board(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<TaskId> {
        match self {
            DragState::Dragging(DragItem::Task(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn on_drag_start(&mut self, event: DragStartEvent) {
        debug!("drag start {:?}", event.active);
        *self = DragState::Dragging(event.active);
    }

    /// Live reordering while hovering. Only task drags change state here.
    pub fn on_drag_over(&self, state: &KanbanState, event: DragOverEvent) -> Option<KanbanState> {
        let over = event.over?;
        if over == event.active {
            return None;
        }

        match (event.active, over) {
            (DragItem::Task(active), DragItem::Task(target)) => {
                move_task_onto_task(state, active, target)
            }
            (DragItem::Task(active), DragItem::Board(target)) => {
                reparent_task(state, active, target)
            }
            _ => None,
        }
    }

    /// Commit a board reorder and return to idle
    pub fn on_drag_end(&mut self, state: &KanbanState, event: DragEndEvent) -> Option<KanbanState> {
        *self = DragState::Idle;

        let Some(over) = event.over else {
            debug!("drag of {:?} cancelled", event.active);
            return None;
        };

        match (event.active, over) {
            (DragItem::Board(active), DragItem::Board(target)) if active != target => {
                let from = state.board_index(active)?;
                let to = state.board_index(target)?;
                debug!("move {} from {} to {}", active, from, to);

                let mut next = state.clone();
                move_item(&mut next.boards, from, to);
                Some(next)
            }
            _ => None,
        }
    }
}

/// Relocate a task to the hovered task's position, adopting its board
fn move_task_onto_task(state: &KanbanState, active: TaskId, target: TaskId) -> Option<KanbanState> {
    let from = state.task_index(active)?;
    let to = state.task_index(target)?;

    let mut next = state.clone();
    next.tasks[from].board_id = next.tasks[to].board_id;
    move_item(&mut next.tasks, from, to);
    Some(next)
}

fn reparent_task(state: &KanbanState, active: TaskId, target: BoardId) -> Option<KanbanState> {
    let index = state.task_index(active)?;
    state.board(target)?;
    if state.tasks[index].board_id == target {
        return None;
    }
    debug!("reparent {} to {}", active, target);

    let mut next = state.clone();
    next.tasks[index].board_id = target;
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, Task};

    fn two_boards() -> KanbanState {
        KanbanState {
            boards: vec![Board::new(BoardId(1), "A"), Board::new(BoardId(2), "B")],
            tasks: vec![
                Task::new(TaskId(10), BoardId(1), "T1"),
                Task::new(TaskId(11), BoardId(1), "T2"),
            ],
        }
    }

    fn task_ids(state: &KanbanState, board: BoardId) -> Vec<TaskId> {
        state.tasks_for_board(board).iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_move_item_shifts_not_swaps() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        move_item(&mut v, 0, 2);
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
        move_item(&mut v, 3, 0);
        assert_eq!(v, vec!['d', 'b', 'c', 'a']);
        move_item(&mut v, 1, 9);
        assert_eq!(v, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_drag_start_records_active_item() {
        let mut drag = DragState::default();
        assert!(drag.is_idle());

        drag.on_drag_start(DragStartEvent { active: DragItem::Task(TaskId(10)) });
        assert_eq!(drag.active_task(), Some(TaskId(10)));
        assert_eq!(drag.active_board(), None);

        drag.on_drag_start(DragStartEvent { active: DragItem::Board(BoardId(1)) });
        assert_eq!(drag.active_board(), Some(BoardId(1)));
        assert_eq!(drag.active_task(), None);
    }

    #[test]
    fn test_drag_end_moves_board() {
        let state = two_boards();
        let mut drag = DragState::Dragging(DragItem::Board(BoardId(1)));

        let next = drag
            .on_drag_end(&state, DragEndEvent {
                active: DragItem::Board(BoardId(1)),
                over: Some(DragItem::Board(BoardId(2))),
            })
            .unwrap();

        assert_eq!(next.board_ids(), vec![BoardId(2), BoardId(1)]);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drag_end_onto_self_or_nothing_is_noop() {
        let state = two_boards();
        let mut drag = DragState::Dragging(DragItem::Board(BoardId(1)));
        let onto_self = DragEndEvent {
            active: DragItem::Board(BoardId(1)),
            over: Some(DragItem::Board(BoardId(1))),
        };
        assert_eq!(drag.on_drag_end(&state, onto_self), None);
        assert!(drag.is_idle());

        let mut drag = DragState::Dragging(DragItem::Board(BoardId(1)));
        let cancelled = DragEndEvent { active: DragItem::Board(BoardId(1)), over: None };
        assert_eq!(drag.on_drag_end(&state, cancelled), None);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drag_end_ignores_unknown_and_mixed() {
        let state = two_boards();
        let mut drag = DragState::Idle;
        let stale = DragEndEvent {
            active: DragItem::Board(BoardId(99)),
            over: Some(DragItem::Board(BoardId(2))),
        };
        assert_eq!(drag.on_drag_end(&state, stale), None);

        let mixed = DragEndEvent {
            active: DragItem::Task(TaskId(10)),
            over: Some(DragItem::Board(BoardId(2))),
        };
        assert_eq!(drag.on_drag_end(&state, mixed), None);
    }

    #[test]
    fn test_drag_over_reorders_tasks() {
        let state = two_boards();
        let drag = DragState::Dragging(DragItem::Task(TaskId(10)));

        let next = drag
            .on_drag_over(&state, DragOverEvent {
                active: DragItem::Task(TaskId(10)),
                over: Some(DragItem::Task(TaskId(11))),
            })
            .unwrap();

        assert_eq!(task_ids(&next, BoardId(1)), vec![TaskId(11), TaskId(10)]);
        // Input untouched
        assert_eq!(task_ids(&state, BoardId(1)), vec![TaskId(10), TaskId(11)]);
    }

    #[test]
    fn test_drag_over_board_reparents_task() {
        let state = two_boards();
        let drag = DragState::Dragging(DragItem::Task(TaskId(10)));

        let next = drag
            .on_drag_over(&state, DragOverEvent {
                active: DragItem::Task(TaskId(10)),
                over: Some(DragItem::Board(BoardId(2))),
            })
            .unwrap();

        assert_eq!(next.task(TaskId(10)).map(|t| t.board_id), Some(BoardId(2)));
        assert_eq!(task_ids(&next, BoardId(1)), vec![TaskId(11)]);
        assert_eq!(task_ids(&next, BoardId(2)), vec![TaskId(10)]);

        // Hovering the board it already belongs to changes nothing
        let again = DragOverEvent {
            active: DragItem::Task(TaskId(10)),
            over: Some(DragItem::Board(BoardId(2))),
        };
        assert_eq!(drag.on_drag_over(&next, again), None);
    }

    #[test]
    fn test_drag_over_task_in_other_board_adopts_board() {
        let mut state = two_boards();
        state.tasks.push(Task::new(TaskId(12), BoardId(2), "T3"));
        let drag = DragState::Dragging(DragItem::Task(TaskId(10)));

        let next = drag
            .on_drag_over(&state, DragOverEvent {
                active: DragItem::Task(TaskId(10)),
                over: Some(DragItem::Task(TaskId(12))),
            })
            .unwrap();

        assert_eq!(task_ids(&next, BoardId(1)), vec![TaskId(11)]);
        assert_eq!(task_ids(&next, BoardId(2)), vec![TaskId(12), TaskId(10)]);
    }

    #[test]
    fn test_drag_over_noops() {
        let state = two_boards();
        let drag = DragState::Dragging(DragItem::Task(TaskId(10)));
        let task = DragItem::Task(TaskId(10));
        let event = |active, over| DragOverEvent { active, over };
        let cases = [
            event(task, Some(task)),
            event(task, None),
            event(task, Some(DragItem::Task(TaskId(77)))),
            event(task, Some(DragItem::Board(BoardId(77)))),
            event(DragItem::Board(BoardId(1)), Some(DragItem::Board(BoardId(2)))),
        ];
        for event in cases {
            assert_eq!(drag.on_drag_over(&state, event), None, "{:?}", event);
        }
    }
}
