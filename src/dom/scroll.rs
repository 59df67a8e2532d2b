use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use crate::constants::dom;
use crate::debug::{self, cat};
use crate::effects::motion::{self, reveal};
use crate::nav::anchor_selector;

/// Smooth-scroll in-page anchors to their targets.
pub fn init_smooth_scrolling() {
    for anchor in super::query_all(dom::ANCHOR_LINKS) {
        let link = anchor.clone();
        super::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            if let Some(target) = super::query(selector) {
                debug::log(cat::SCROLL, format!("anchor -> {selector}"));
                super::smooth_scroll_to(&target, true);
            }
        });
    }
}

/// Hide cards until they intersect the viewport, then fade them in.
pub fn init_scroll_animations(page: &Rc<Page>) {
    if !page.config.effects.reveal {
        return;
    }
    let targets = super::query_all(dom::REVEAL_TARGETS);
    if targets.is_empty() {
        return;
    }
    if let Err(e) = observe_reveal(page, &targets) {
        log::warn!("[scroll] reveal observer unavailable: {e:?}");
    }
}

fn observe_reveal(page: &Page, targets: &[HtmlElement]) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                    super::set_style(&el, "opacity", reveal::SHOWN_OPACITY);
                    super::set_style(&el, "transform", reveal::SHOWN_TRANSFORM);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.config.reveal_threshold));
    options.set_root_margin(&page.config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in targets {
        super::set_style(el, "opacity", reveal::HIDDEN_OPACITY);
        super::set_style(el, "transform", reveal::HIDDEN_TRANSFORM);
        super::set_style(el, "transition", reveal::TRANSITION);
        observer.observe(el);
    }
    debug::log(cat::SCROLL, format!("observing {} cards", targets.len()));
    Ok(())
}

/// Offset the hero background against the scroll position.
///
/// The listener is installed once; resizing re-applies the current offset.
pub fn init_parallax_effect(page: &Rc<Page>) {
    if !page.config.effects.parallax {
        return;
    }
    let (Some(_section), Some(bg)) = (super::query(dom::HERO_SECTION), super::query(dom::HERO_BG))
    else {
        return;
    };
    let Some(win) = web_sys::window() else {
        return;
    };

    let rate = page.config.parallax_rate;
    let apply = move || {
        let Some(win) = web_sys::window() else {
            return;
        };
        let scrolled = win.scroll_y().unwrap_or(0.0);
        super::set_style(&bg, "transform", &motion::translate_y(motion::parallax_offset(scrolled, rate)));
    };
    let on_resize = apply.clone();

    super::listen(&win, "scroll", move |_| apply());
    super::listen(&win, "resize", move |_| on_resize());
}
