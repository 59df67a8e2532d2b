//! Browser wiring for the landing page.
//!
//! Every initializer looks its elements up, attaches listeners or timers,
//! and returns. Missing elements make an initializer a no-op; DOM errors are
//! logged and swallowed.

use std::cell::OnceCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::config::LandingConfig;
use crate::constants::dom;
use crate::debug::{self, cat};

pub mod animate;
pub mod cta;
pub mod form;
pub mod hover;
pub mod images;
pub mod scroll;
pub mod toast;

pub use toast::ToastManager;

/// Shared page state: effective config and the toast manager.
pub struct Page {
    pub config: LandingConfig,
    pub toasts: ToastManager,
}

impl Page {
    fn load() -> Self {
        let inline = document()
            .and_then(|doc| doc.get_element_by_id(dom::CONFIG_SCRIPT_ID))
            .and_then(|el| el.text_content());
        let config = LandingConfig::from_override(inline.as_deref());
        let toasts = ToastManager::new(config.toast);
        Page { config, toasts }
    }
}

thread_local! {
    static PAGE: OnceCell<Rc<Page>> = const { OnceCell::new() };
}

/// The page singleton, loaded on first use.
pub fn page() -> Rc<Page> {
    PAGE.with(|cell| cell.get_or_init(|| Rc::new(Page::load())).clone())
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub(crate) fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub(crate) fn query(selector: &str) -> Option<HtmlElement> {
    match document()?.query_selector(selector) {
        Ok(found) => found?.dyn_into::<HtmlElement>().ok(),
        Err(e) => {
            log::warn!("[dom] bad selector {selector:?}: {e:?}");
            None
        }
    }
}

pub(crate) fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] bad selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("[dom] failed to set {property}: {e:?}");
    }
}

/// Attach a listener for the lifetime of the page.
pub(crate) fn listen<T, F>(target: &T, event: &str, handler: F)
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

pub(crate) fn smooth_scroll_to(el: &Element, block_start: bool) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    if block_start {
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
    }
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Run every initializer once the document is parsed.
pub fn boot() {
    debug::init_from_url_and_storage_once();

    if let Err(e) = crate::wasm_api::install_namespace() {
        log::warn!("[boot] failed to install window.StrutMaster: {e:?}");
    }

    let Some(doc) = document() else {
        log::warn!("[boot] no document; nothing to initialize");
        return;
    };

    if doc.ready_state() == "loading" {
        let mut started = false;
        listen(&doc, "DOMContentLoaded", move |_| {
            if !started {
                started = true;
                start();
            }
        });
    } else {
        start();
    }
}

fn start() {
    let page = page();

    form::init_airdrop_form(&page);
    scroll::init_smooth_scrolling();
    scroll::init_scroll_animations(&page);
    hover::init_button_effects(&page);
    scroll::init_parallax_effect(&page);
    cta::init_cta_buttons(&page);
    animate::init_typing_animation(&page);
    hover::init_mascot_animations(&page);
    images::init_loading_states(&page);
    hover::init_cursor_glow(&page);

    // Counters start late so the tokenomics section has painted.
    let delay = page.config.counter_start_delay_ms;
    let counters_page = page.clone();
    Timeout::new(delay, move || animate::init_counters(&counters_page)).forget();

    debug::log(cat::BOOT, format!("initializers attached, counters in {delay}ms"));
    log::info!("🎉 Strut Master Coin website loaded successfully!");
}
