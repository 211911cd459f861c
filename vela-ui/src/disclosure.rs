//! Disclosure state owned by a component, dismissed by outside clicks
//!
//! [`use_disclosure`] keeps a [`DisclosureController`] in a signal and
//! attaches one document `mousedown` listener per component. The component
//! renders its root with `id: disclosure.root_id()`; a press on anything
//! that is not that element or one of its descendants closes every panel.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use vela_common::{DisclosureController, PanelId};

use crate::wasm_utils::{self, DocumentListener};

/// Counter for generating unique root element IDs
static ROOT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Handle returned by [`use_disclosure`]
#[derive(Clone, Copy, PartialEq)]
pub struct Disclosure {
    controller: Signal<DisclosureController>,
    root_id: Signal<String>,
}

impl Disclosure {
    /// ID to put on the element whose subtree counts as "inside"
    pub fn root_id(&self) -> String {
        self.root_id.peek().clone()
    }

    pub fn is_open(&self, id: impl Into<PanelId>) -> bool {
        self.controller.read().is_open(id)
    }

    pub fn toggle(&mut self, id: impl Into<PanelId>) {
        self.controller.write().toggle(id);
    }

    pub fn request_close(&mut self, id: impl Into<PanelId>) {
        self.controller.write().request_close(id);
    }

    pub fn dismiss_all(&mut self) {
        self.controller.write().dismiss_all();
    }
}

pub fn use_disclosure(init: impl FnOnce() -> DisclosureController) -> Disclosure {
    let mut controller = use_signal(init);
    let root_id = use_signal(|| {
        let id = ROOT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("vela-disclosure-{}", id)
    });
    let mut listener: Signal<Option<DocumentListener>> = use_signal(|| None);

    // Attach after the first render so the root element exists
    use_effect(move || {
        if listener.peek().is_some() {
            return;
        }
        let Some(document) = wasm_utils::document() else {
            return;
        };

        // The listener fires from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();
        let id = root_id.peek().clone();
        let lookup_document = document.clone();
        tracing::debug!("Attaching outside-click listener for #{id}");

        let mousedown = DocumentListener::new(document, "mousedown", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(target) = wasm_utils::press_target(&lookup_document, &id, &event) else {
                return;
            };
            // The signal may already be gone if the component is unmounting
            if let Ok(mut controller) = controller.try_write() {
                controller.press(target);
            }
        });

        listener.set(Some(mousedown));
    });

    use_drop(move || {
        // WORKAROUND: drop the listener outside the diff cycle; removing it
        // synchronously during scope teardown goes through the webview bridge.
        if let Some(mousedown) = listener.write().take() {
            spawn(async move {
                drop(mousedown);
            });
        }
    });

    Disclosure {
        controller,
        root_id,
    }
}
