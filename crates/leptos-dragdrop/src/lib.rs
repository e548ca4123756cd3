//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports
//! drag start / drag over / drag end to the caller as typed events.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals, generic over the dragged item type
#[derive(Clone, Copy)]
pub struct DndSignals<T: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    /// Target currently hovered by an active drag
    pub over_read: ReadSignal<Option<T>>,
    pub over_write: WriteSignal<Option<T>>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Last pointer position while dragging (for overlays)
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    pub activation_px: i32,
}

/// Callbacks fired as a drag progresses
#[derive(Clone, Copy)]
pub struct DragHandlers<T: 'static> {
    pub on_drag_start: Callback<T>,
    /// (active, hovered target) whenever the hovered target changes
    pub on_drag_over: Callback<(T, Option<T>)>,
    /// (active, final target) on release; `None` means dropped on nothing
    pub on_drag_end: Callback<(T, Option<T>)>,
}

pub fn create_dnd_signals<T>(activation_px: i32) -> DndSignals<T>
where
    T: Copy + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (over_read, over_write) = signal(None::<T>);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        pointer_read,
        pointer_write,
        activation_px,
    }
}

/// Whether the pointer moved far enough from `start` to begin a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32), activation_px: i32) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > activation_px || dy > activation_px
}

/// Whether a press on this event target may start a drag
fn is_drag_handle(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev.target() else { return true };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_none()
        && target.dyn_ref::<web_sys::HtmlButtonElement>().is_none()
        && target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_none()
}

/// End drag operation
pub fn end_drag<T>(dnd: &DndSignals<T>)
where
    T: Copy + Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.over_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<T>(
    dnd: DndSignals<T>,
    item: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    T: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || !is_drag_handle(&ev) {
            return;
        }
        // Innermost draggable wins
        ev.stop_propagation();
        dnd.pending_write.set(Some(item));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseover handler for a drop target.
/// `accepts(active, target)` decides whether the active drag may land here;
/// an accepting target stops propagation so enclosing targets don't override it.
pub fn make_on_target_mouseover<T>(
    dnd: DndSignals<T>,
    handlers: DragHandlers<T>,
    target: T,
    accepts: fn(T, T) -> bool,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(active) = dnd.dragging_read.get_untracked() else { return };
        if !accepts(active, target) {
            return;
        }
        ev.stop_propagation();
        if dnd.over_read.get_untracked() != Some(target) {
            dnd.over_write.set(Some(target));
            handlers.on_drag_over.run((active, Some(target)));
        }
    }
}

/// Drop the hovered target, reporting `None` to `on_drag_over`
fn clear_target<T>(dnd: DndSignals<T>, handlers: DragHandlers<T>)
where
    T: Copy + Send + Sync + 'static,
{
    let Some(active) = dnd.dragging_read.get_untracked() else { return };
    if dnd.over_read.get_untracked().is_some() {
        dnd.over_write.set(None);
        handlers.on_drag_over.run((active, None));
    }
}

/// Pointer released: finish an active drag or forget a pending one
fn release<T>(dnd: DndSignals<T>, handlers: DragHandlers<T>)
where
    T: Copy + Send + Sync + 'static,
{
    let over = dnd.over_read.get_untracked();
    match dnd.dragging_read.get_untracked() {
        // Clear state first so the handler sees an idle surface
        Some(active) => {
            end_drag(&dnd);
            handlers.on_drag_end.run((active, over));
        }
        // Not dragging: click event will fire naturally on the element
        None => dnd.pending_write.set(None),
    }
}

/// Pointer moved: start the drag once past the threshold, then track it
fn track_pointer<T>(dnd: DndSignals<T>, handlers: DragHandlers<T>, current: (i32, i32))
where
    T: Copy + Send + Sync + 'static,
{
    if dnd.dragging_read.get_untracked().is_some() {
        dnd.pointer_write.set(current);
        return;
    }

    // If we have a pending drag and haven't started dragging yet
    if let Some(pending) = dnd.pending_read.get_untracked() {
        if exceeds_threshold(dnd.start_read.get_untracked(), current, dnd.activation_px) {
            dnd.pointer_write.set(current);
            dnd.dragging_write.set(Some(pending));
            handlers.on_drag_start.run(pending);
        }
    }
}

fn listen_on_document(event: &str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind document-level listeners: activation and tracking (mousemove),
/// drop detection (mouseup), and target clearing. Drop targets stop
/// propagation of their mouseover, so any mouseover reaching the document
/// is outside every target; leaving the window clears the target as well.
pub fn bind_global_listeners<T>(dnd: DndSignals<T>, handlers: DragHandlers<T>)
where
    T: Copy + Send + Sync + 'static,
{
    listen_on_document("mousemove", move |ev| {
        track_pointer(dnd, handlers, (ev.client_x(), ev.client_y()));
    });
    listen_on_document("mouseup", move |_ev| release(dnd, handlers));
    listen_on_document("mouseover", move |_ev| clear_target(dnd, handlers));
    listen_on_document("mouseout", move |ev| {
        if ev.related_target().is_none() {
            clear_target(dnd, handlers);
        }
    });
}
