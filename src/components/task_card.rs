//! Task Card Component

use leptos::prelude::*;
use leptos_dragdrop::*;

use kanban_core::{DragItem, FormDraft, Task};

use crate::context::use_app_context;
use crate::store::{store_board_untracked, store_commit, use_app_store};

/// Tasks only take task drags; board drags fall through to the column
fn accepts_task_drag(active: DragItem, _target: DragItem) -> bool {
    active.is_task()
}

/// A draggable task card
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = task.id;
    let item = DragItem::Task(id);

    let on_mousedown = make_on_mousedown(ctx.dnd, item);
    let on_mouseover = make_on_target_mouseover(ctx.dnd, ctx.handlers, item, accepts_task_drag);

    let card_class = move || {
        if ctx.dnd.dragging_read.get() == Some(item) {
            "task-card dragging"
        } else {
            "task-card"
        }
    };

    let edit = move |_| {
        if let Some(draft) = FormDraft::edit_task(&store_board_untracked(&store), id) {
            ctx.open_form(draft);
        }
    };
    let delete = move |_| store_commit(&store, store_board_untracked(&store).delete_task(id));

    view! {
        <div class=card_class on:mousedown=on_mousedown on:mouseover=on_mouseover>
            <div class="card">
                <div class="card-body">
                    <h5 class="card-title">{task.title}</h5>
                    <p class="card-text">{task.description}</p>
                    <div class="task-actions">
                        <button class="btn btn-outline-primary" type="button" on:click=edit>
                            "Edit"
                        </button>
                        <button class="btn btn-outline-danger" type="button" on:click=delete>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
