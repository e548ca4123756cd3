//! Id Generation
//!
//! Ids are creation timestamps in milliseconds, bumped past every id already
//! in use so two creations in the same millisecond never collide.

use crate::error::{KanbanError, KanbanResult};
use crate::model::KanbanState;

/// Millisecond time source
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Clock pinned to one instant (tests, replay)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// Fresh id, unique across all boards and tasks in `state`.
/// Fails only when the largest id in use is already `u64::MAX`.
pub fn next_id(state: &KanbanState, clock: &impl Clock) -> KanbanResult<u64> {
    let now = clock.now_millis();
    match state.max_id() {
        Some(max) if max >= now => max
            .checked_add(1)
            .ok_or_else(|| KanbanError::IdExhausted(max.to_string())),
        _ => Ok(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, BoardId};

    #[test]
    fn test_uses_clock_when_ahead() {
        let state = KanbanState::new();
        assert_eq!(next_id(&state, &FixedClock(1_000)), Ok(1_000));
    }

    #[test]
    fn test_bumps_past_existing_ids() {
        let state = KanbanState {
            boards: vec![Board::new(BoardId(1_000), "A")],
            tasks: vec![],
        };
        assert_eq!(next_id(&state, &FixedClock(1_000)), Ok(1_001));
        // Clock went backwards
        assert_eq!(next_id(&state, &FixedClock(5)), Ok(1_001));
    }

    #[test]
    fn test_exhausted_id_space_is_an_error() {
        let state = KanbanState {
            boards: vec![Board::new(BoardId(u64::MAX), "A")],
            tasks: vec![],
        };
        let err = next_id(&state, &FixedClock(1)).unwrap_err();
        assert!(matches!(err, KanbanError::IdExhausted(_)));
    }

    #[test]
    fn test_system_clock_is_positive() {
        assert!(SystemClock.now_millis() > 0);
    }
}
