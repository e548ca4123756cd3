//! Drag Overlay Component
//!
//! Floating copy of the dragged board or task that follows the pointer.
//! Ignores pointer events so hover detection sees what is underneath.

use leptos::prelude::*;

use kanban_core::DragItem;

use crate::context::use_app_context;
use crate::store::{store_board, store_drag, use_app_store};

/// Pixel offset of the preview from the pointer
const OVERLAY_OFFSET_PX: i32 = 12;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // (title, detail) of whatever is being dragged
    let preview = move || {
        let active = store_drag(&store).active()?;
        let state = store_board(&store);
        match active {
            DragItem::Board(id) => {
                let count = state.tasks_for_board(id).len();
                state.board(id).map(|b| (b.title.clone(), format!("{} task(s)", count)))
            }
            DragItem::Task(id) => state.task(id).map(|t| (t.title.clone(), t.description.clone())),
        }
    };

    move || {
        preview().map(|(title, detail)| {
            let (x, y) = ctx.dnd.pointer_read.get();
            let style = format!(
                "left: {}px; top: {}px;",
                x + OVERLAY_OFFSET_PX,
                y + OVERLAY_OFFSET_PX
            );
            view! {
                <div class="drag-overlay card" style=style>
                    <div class="card-body">
                        <h5 class="card-title">{title}</h5>
                        <p class="card-text">{detail}</p>
                    </div>
                </div>
            }
        })
    }
}
