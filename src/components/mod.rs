//! UI Components
//!
//! Reusable Leptos components.

mod board_column;
mod drag_overlay;
mod form_dialog;
mod modal;
mod task_card;

pub use board_column::BoardColumn;
pub use drag_overlay::DragOverlay;
pub use form_dialog::FormDialog;
pub use modal::{Modal, ModalHandle};
pub use task_card::TaskCard;
