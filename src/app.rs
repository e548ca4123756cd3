//! Kanban Frontend App
//!
//! Main application component: toolbar, board grid, form dialog and drag overlay.
//! Loads the snapshot once on mount and persists it after every change.

use leptos::prelude::*;
use leptos_dragdrop::*;
use log::{error, info};
use reactive_stores::Store;

use kanban_core::{
    DragEndEvent, DragItem, DragOverEvent, DragStartEvent, FormDraft, KanbanConfig, SnapshotStore,
};

use crate::components::{BoardColumn, DragOverlay, FormDialog, ModalHandle};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::{
    store_board, store_board_untracked, store_drag_untracked, store_replace_board, store_set_drag,
    AppState,
};

#[component]
pub fn App(config: KanbanConfig) -> impl IntoView {
    // Load once on mount
    let snapshots = SnapshotStore::new(LocalStorage, config.storage_key.clone());
    let initial = snapshots.load();
    info!("loaded {} board(s), {} task(s)", initial.boards.len(), initial.tasks.len());

    let store = Store::new(AppState::new(initial));
    provide_context(store);

    // Drag surface -> ordering engine
    let dnd = create_dnd_signals::<DragItem>(config.drag_activation_px);
    let handlers = DragHandlers {
        on_drag_start: Callback::new(move |active: DragItem| {
            let mut drag = store_drag_untracked(&store);
            drag.on_drag_start(DragStartEvent { active });
            store_set_drag(&store, drag);
        }),
        on_drag_over: Callback::new(move |(active, over): (DragItem, Option<DragItem>)| {
            let drag = store_drag_untracked(&store);
            let state = store_board_untracked(&store);
            if let Some(next) = drag.on_drag_over(&state, DragOverEvent { active, over }) {
                store_replace_board(&store, next);
            }
        }),
        on_drag_end: Callback::new(move |(active, over): (DragItem, Option<DragItem>)| {
            let mut drag = store_drag_untracked(&store);
            let state = store_board_untracked(&store);
            let next = drag.on_drag_end(&state, DragEndEvent { active, over });
            store_set_drag(&store, drag);
            if let Some(next) = next {
                store_replace_board(&store, next);
            }
        }),
    };
    bind_global_listeners(dnd, handlers);

    let ctx = AppContext::new(signal(None), ModalHandle::new(), dnd, handlers);
    provide_context(ctx);

    // Persist after every change
    Effect::new(move |_| {
        let state = store_board(&store);
        if let Err(e) = snapshots.save(&state) {
            error!("failed to persist boards: {}", e);
        }
    });

    let boards = move || store_board(&store).boards;
    let has_boards = move || !boards().is_empty();
    let delete_all = move |_| {
        store_replace_board(&store, store_board_untracked(&store).clear_boards());
    };

    view! {
        <FormDialog />
        <DragOverlay />

        <div class="container mt-4">
            <h2 class="text-center">"Kanban Board"</h2>
            <div class="toolbar">
                <button
                    class="btn btn-secondary btn-lg mb-3"
                    type="button"
                    on:click=move |_| ctx.open_form(FormDraft::create_board())
                >
                    "Add Board"
                </button>
                <Show when=has_boards>
                    <button class="btn btn-danger btn-lg mb-3" type="button" on:click=delete_all>
                        "Delete All"
                    </button>
                </Show>
            </div>

            <div class="board-grid">
                <For
                    each=boards
                    key=|board| (board.id, board.title.clone())
                    children=move |board| view! { <BoardColumn board=board /> }
                />
            </div>
        </div>
    }
}
