//! Modal Component
//!
//! `<dialog>` wrapper. Open/close go through `ModalHandle`, which is the
//! `Dialog` capability handed to whoever drives the form.

use leptos::html;
use leptos::prelude::*;

use kanban_core::Dialog;

/// Show/hide handle for one `Modal`
#[derive(Clone, Copy)]
pub struct ModalHandle {
    node: NodeRef<html::Dialog>,
}

impl ModalHandle {
    pub fn new() -> Self {
        Self { node: NodeRef::new() }
    }
}

impl Default for ModalHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog for ModalHandle {
    fn open(&self) {
        if let Some(dialog) = self.node.get_untracked() {
            if dialog.open() {
                return;
            }
            if let Err(e) = dialog.show_modal() {
                log::warn!("showModal failed: {:?}", e);
            }
        }
    }

    fn close(&self) {
        if let Some(dialog) = self.node.get_untracked() {
            dialog.close();
        }
    }
}

/// Modal dialog; `on_dismiss` runs whenever it closes (save, cancel or Esc)
#[component]
pub fn Modal(
    handle: ModalHandle,
    #[prop(into)] on_dismiss: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <dialog class="modal-dialog" node_ref=handle.node on:close=move |_| on_dismiss.run(())>
            {children()}
        </dialog>
    }
}
