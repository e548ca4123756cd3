//! Board Column Component
//!
//! One board: header (drag handle, Edit / Delete / Add Task) and its tasks.
//! The column is a drop target for both board drags (reorder on release)
//! and task drags (the task moves into this board while hovering).

use leptos::prelude::*;
use leptos_dragdrop::*;

use kanban_core::{Board, DragItem, FormDraft};

use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::store::{store_board_untracked, store_commit, store_tasks_for_board, use_app_store};

fn accepts_any(_active: DragItem, _target: DragItem) -> bool {
    true
}

#[component]
pub fn BoardColumn(board: Board) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = board.id;
    let item = DragItem::Board(id);

    // DnD handlers
    let on_mousedown = make_on_mousedown(ctx.dnd, item);
    let on_mouseover = make_on_target_mouseover(ctx.dnd, ctx.handlers, item, accepts_any);

    // Visual state
    let is_dragging = move || ctx.dnd.dragging_read.get() == Some(item);
    let is_drop_target = move || ctx.dnd.over_read.get() == Some(item) && !is_dragging();

    let column_class = move || {
        let mut c = String::from("board-column");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let edit = move |_| {
        if let Some(draft) = FormDraft::rename_board(&store_board_untracked(&store), id) {
            ctx.open_form(draft);
        }
    };
    let add_task = move |_| ctx.open_form(FormDraft::create_task(id));
    let delete = move |_| store_commit(&store, store_board_untracked(&store).delete_board(id));

    view! {
        <div class=column_class on:mouseover=on_mouseover>
            <div class="card">
                <div class="card-header" on:mousedown=on_mousedown>
                    <h5>{board.title}</h5>
                    <div class="board-actions">
                        <button class="btn btn-primary" type="button" on:click=edit>
                            "Edit"
                        </button>
                        <button class="btn btn-danger" type="button" on:click=delete>
                            "Delete"
                        </button>
                        <button class="btn btn-secondary" type="button" on:click=add_task>
                            "Add Task"
                        </button>
                    </div>
                </div>
                <div class="card-body">
                    <For
                        each=move || store_tasks_for_board(&store, id)
                        key=|task| (task.id, task.title.clone(), task.description.clone())
                        children=move |task| view! { <TaskCard task=task /> }
                    />
                </div>
            </div>
        </div>
    }
}
