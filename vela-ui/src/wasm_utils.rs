//! Browser interop for outside-click dismissal
//!
//! A listener attached with a `Closure` must outlive its registration, and
//! `closure.forget()` would leave it attached forever. [`DocumentListener`]
//! owns the closure and removes the listener in `Drop`, so keeping it in a
//! `Signal<Option<DocumentListener>>` ties the registration to the
//! component: set the signal to `None` (or drop the component) and the
//! listener is gone.
//!
//! ```ignore
//! let listener = DocumentListener::new(document, "mousedown", callback);
//! drop(listener); // removed
//! ```

use vela_common::PressTarget;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// A document event listener that removes itself when dropped
pub struct DocumentListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys_x::Event)>,
}

impl DocumentListener {
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys_x::Event)> = Closure::wrap(Box::new(callback));

        if document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach document '{event_name}' listener");
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

pub fn document() -> Option<web_sys_x::Document> {
    web_sys_x::window()?.document()
}

/// Whether `event` was dispatched on the element with id `root_id` or on
/// one of its descendants.
///
/// Containment follows the DOM tree, not the root's rect, so absolutely
/// positioned menus that render outside the root's box still count as
/// inside. `None` when the root is not in the document or the event has
/// no node target.
pub fn press_target(
    document: &web_sys_x::Document,
    root_id: &str,
    event: &web_sys_x::Event,
) -> Option<PressTarget> {
    let root = document.get_element_by_id(root_id)?;
    let target = event.target()?.dyn_into::<web_sys_x::Node>().ok()?;
    Some(if root.contains(Some(&target)) {
        PressTarget::Inside
    } else {
        PressTarget::Outside
    })
}
