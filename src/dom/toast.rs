use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::dom::TOAST_CONTAINER_ID;
use crate::debug::{self, cat};
use crate::toast::{Toast, ToastPhase, ToastTimings};

/// Appends toast nodes to `#toast-container` and removes them on a timer.
///
/// Each toast owns its own pair of timeouts; nothing is queued.
#[derive(Debug, Clone, Copy)]
pub struct ToastManager {
    timings: ToastTimings,
}

impl ToastManager {
    pub fn new(timings: ToastTimings) -> Self {
        Self { timings }
    }

    /// Show `toast` and schedule its removal. Returns the node, or `None`
    /// when the page has no toast container.
    pub fn show(&self, toast: &Toast) -> Option<Element> {
        let doc = super::document()?;
        let Some(container) = doc.get_element_by_id(TOAST_CONTAINER_ID) else {
            debug::log(cat::TOAST, format!("no #{TOAST_CONTAINER_ID}, dropped {:?}", toast.title));
            return None;
        };

        let node = match build_node(&doc, toast) {
            Ok(node) => node,
            Err(e) => {
                log::warn!("[toast] failed to build node: {e:?}");
                return None;
            }
        };
        if let Err(e) = container.append_child(&node) {
            log::warn!("[toast] failed to attach node: {e:?}");
            return None;
        }
        debug::log(cat::TOAST, format!("show {} {:?}", toast.kind, toast.title));

        let manager = *self;
        let pending = node.clone();
        Timeout::new(self.timings.timer_ms(ToastPhase::Leaving), move || {
            manager.remove(&pending)
        })
        .forget();

        Some(node)
    }

    /// Play the exit animation, then detach the node if it is still attached.
    pub fn remove(&self, node: &Element) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            super::set_style(el, "animation", &self.timings.exit_animation());
        }
        let node = node.clone();
        Timeout::new(self.timings.timer_ms(ToastPhase::Removed), move || {
            if node.parent_node().is_some() {
                node.remove();
                debug::log(cat::TOAST, "removed");
            }
        })
        .forget();
    }
}

// Title and description go in as text, never as markup.
fn build_node(doc: &Document, toast: &Toast) -> Result<Element, JsValue> {
    let node = doc.create_element("div")?;
    node.set_class_name(&toast.class_name());

    let title = doc.create_element("div")?;
    title.set_class_name("toast-title");
    title.set_text_content(Some(&toast.title));
    node.append_child(&title)?;

    if let Some(description) = &toast.description {
        let desc = doc.create_element("div")?;
        desc.set_class_name("toast-description");
        desc.set_text_content(Some(description));
        node.append_child(&desc)?;
    }

    Ok(node)
}
