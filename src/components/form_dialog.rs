//! Form Dialog Component
//!
//! The one create/edit form, bound to the draft in context. Save commits the
//! draft and closes; blank titles keep the dialog open with a hint.

use leptos::prelude::*;
use log::{debug, warn};

use kanban_core::{cancel, submit, SystemClock};

use crate::components::Modal;
use crate::context::use_app_context;
use crate::store::{store_board_untracked, store_replace_board, use_app_store};

#[component]
pub fn FormDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (error, set_error) = signal(None::<String>);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = ctx.draft.get_untracked() else { return };
        let state = store_board_untracked(&store);

        match submit(&ctx.form_modal, &draft, &state, &SystemClock) {
            Ok(next) => store_replace_board(&store, next),
            Err(e) if e.is_validation() => set_error.set(Some("Title is required".to_string())),
            Err(e) => {
                // Not found: the target vanished while the form was open
                if e.is_not_found() {
                    debug!("form discarded: {}", e);
                } else {
                    warn!("form rejected: {}", e);
                }
                cancel(&ctx.form_modal);
            }
        }
    };

    let on_dismiss = move |_: ()| {
        ctx.clear_draft();
        set_error.set(None);
    };

    let heading = move || ctx.draft.get().map(|d| d.kind.heading()).unwrap_or("Title");
    let title = move || ctx.draft.get().map(|d| d.title).unwrap_or_default();
    let description = move || ctx.draft.get().map(|d| d.description).unwrap_or_default();
    let has_description = move || {
        ctx.draft.get().map(|d| d.kind.has_description()).unwrap_or(false)
    };

    view! {
        <Modal handle=ctx.form_modal on_dismiss=on_dismiss>
            <form class="form-dialog" on:submit=save>
                <div class="mb-3">
                    <label class="form-label">{heading}</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_draft(move |d| d.title = value);
                        }
                    />
                </div>
                <Show when=has_description>
                    <div class="mb-3">
                        <label class="form-label">"Enter Task Description"</label>
                        <input
                            type="text"
                            class="form-control"
                            prop:value=description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.update_draft(move |d| d.description = value);
                            }
                        />
                    </div>
                </Show>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="form-actions">
                    <button
                        class="btn btn-outline-danger"
                        type="button"
                        on:click=move |_| cancel(&ctx.form_modal)
                    >
                        "Cancel"
                    </button>
                    <button class="btn btn-success" type="submit">"Save"</button>
                </div>
            </form>
        </Modal>
    }
}
