//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{DndSignals, DragHandlers};

use kanban_core::{Dialog, DragItem, FormDraft};

use crate::components::ModalHandle;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Draft being edited in the form dialog - read
    pub draft: ReadSignal<Option<FormDraft>>,
    /// Draft being edited in the form dialog - write
    set_draft: WriteSignal<Option<FormDraft>>,
    /// The form dialog
    pub form_modal: ModalHandle,
    /// Drag surface state
    pub dnd: DndSignals<DragItem>,
    /// Drag surface callbacks
    pub handlers: DragHandlers<DragItem>,
}

impl AppContext {
    pub fn new(
        draft: (ReadSignal<Option<FormDraft>>, WriteSignal<Option<FormDraft>>),
        form_modal: ModalHandle,
        dnd: DndSignals<DragItem>,
        handlers: DragHandlers<DragItem>,
    ) -> Self {
        Self {
            draft: draft.0,
            set_draft: draft.1,
            form_modal,
            dnd,
            handlers,
        }
    }

    /// Show the form dialog with a fresh draft
    pub fn open_form(&self, draft: FormDraft) {
        self.set_draft.set(Some(draft));
        self.form_modal.open();
    }

    /// Edit the current draft in place
    pub fn update_draft(&self, f: impl FnOnce(&mut FormDraft)) {
        self.set_draft.update(|draft| {
            if let Some(draft) = draft {
                f(draft);
            }
        });
    }

    pub fn clear_draft(&self) {
        self.set_draft.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
