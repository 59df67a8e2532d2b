use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::Page;
use crate::constants::dom;
use crate::debug::{self, cat};
use crate::effects::motion::{self, button, mascot, Bounds};

fn hover_transform(el: &HtmlElement, hover: &'static str, rest: &'static str) {
    let target = el.clone();
    super::listen(el, "mouseenter", move |_| super::set_style(&target, "transform", hover));
    let target = el.clone();
    super::listen(el, "mouseleave", move |_| super::set_style(&target, "transform", rest));
}

/// Lift hero buttons on hover.
pub fn init_button_effects(page: &Rc<Page>) {
    if !page.config.effects.hover {
        return;
    }
    for btn in super::query_all(dom::HERO_BUTTONS) {
        hover_transform(&btn, button::HOVER, button::REST);
    }
}

/// Stagger the float animation of mascot images and tilt them on hover.
pub fn init_mascot_animations(page: &Rc<Page>) {
    let images = super::query_all(dom::MASCOT_IMAGES);
    let stagger = page.config.mascot_stagger_secs;
    for (index, img) in images.iter().enumerate() {
        super::set_style(img, "animation-delay", &motion::stagger_delay(index, stagger));
        if page.config.effects.hover {
            hover_transform(img, mascot::HOVER, mascot::REST);
        }
    }
    debug::log(cat::HOVER, format!("{} mascot images", images.len()));
}

/// Expose the pointer position inside each hero button as CSS variables.
pub fn init_cursor_glow(page: &Rc<Page>) {
    if !page.config.effects.cursor_glow {
        return;
    }
    let Some(doc) = super::document() else {
        return;
    };
    super::listen(&doc, "mousemove", |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (cx, cy) = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        for btn in super::query_all(dom::HERO_BUTTONS) {
            let rect = btn.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            if let Some((x, y)) = bounds.local_point(cx, cy) {
                super::set_style(&btn, "--mouse-x", &motion::px(x));
                super::set_style(&btn, "--mouse-y", &motion::px(y));
            }
        }
    });
}
