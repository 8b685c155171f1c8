//! Leptos DragDrop Utilities
//!
//! Sortable lists for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag. A drop always
//! lands on a slot: an insertion index 0..=n into the list as it was
//! before the drag started.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What is being dragged
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DragSource {
    /// Rows only drop into lists of the same group
    pub group: &'static str,
    pub id: String,
}

/// Where it would land
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DropTarget {
    pub group: &'static str,
    /// Owner of the list when a group has several lists (items per topic)
    pub list_id: Option<String>,
    pub slot: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Set briefly after a drop so the trailing click can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are swallowed after a drop
const CLICK_GUARD_MS: u32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

impl DndSignals {
    /// Whether this row is the one being dragged (reactive)
    pub fn is_dragging(&self, group: &'static str, id: &str) -> bool {
        self.dragging_read
            .with(|d| matches!(d, Some(s) if s.group == group && s.id == id))
    }

    /// Whether a slot is the current drop target (reactive)
    pub fn is_target(&self, group: &'static str, list_id: Option<&str>, slot: usize) -> bool {
        self.drop_target_read.with(|t| {
            matches!(t, Some(t) if t.group == group && t.list_id.as_deref() == list_id && t.slot == slot)
        })
    }

    fn dragging_group(&self) -> Option<&'static str> {
        self.dragging_read.with_untracked(|d| d.as_ref().map(|s| s.group))
    }
}

/// Slot for a pointer over row `index`: upper half before it, lower half after
pub fn slot_for(index: usize, offset_y: f64, height: f64) -> usize {
    if offset_y * 2.0 < height {
        index
    } else {
        index + 1
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(CLICK_GUARD_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, source: DragSource) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls and links keep their own mouse handling
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some()
            {
                return;
            }
        }
        // Nested rows: the innermost draggable wins
        ev.stop_propagation();
        dnd.pending_write.set(Some(source.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let (start_x, start_y) = dnd.start_read.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_write.set(Some(pending));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mousemove handler for a row: targets the slot before or after it
pub fn make_on_row_mousemove(
    dnd: DndSignals,
    group: &'static str,
    list_id: Option<String>,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_group() != Some(group) {
            return;
        }
        let Some(row) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        ev.stop_propagation();
        let rect = row.get_bounding_client_rect();
        let offset = f64::from(ev.client_y()) - rect.top();
        let target = DropTarget {
            group,
            list_id: list_id.clone(),
            slot: slot_for(index, offset, rect.height()),
        };
        if dnd.drop_target_read.get_untracked().as_ref() != Some(&target) {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseenter handler for an explicit zone (end of list, empty list)
pub fn make_on_zone_mouseenter(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_group() == Some(target.group) {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_group().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragSource, DropTarget) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        match (dragging, drop_target) {
            (Some(source), Some(target)) if source.group == target.group => {
                end_drag(&dnd);
                on_drop(source, target);
            }
            (Some(_), _) => end_drag(&dnd),
            // Not dragging - the click event fires naturally on the element
            (None, _) => {}
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_for_halves() {
        assert_eq!(slot_for(2, 3.0, 20.0), 2);
        assert_eq!(slot_for(2, 10.0, 20.0), 3);
        assert_eq!(slot_for(0, 19.0, 20.0), 1);
    }
}
