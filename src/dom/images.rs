use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use super::Page;
use crate::constants::dom;
use crate::debug::{self, cat};
use crate::effects::motion::image::{self, ImageState};

/// Fade images in once loaded; dim and report the ones that fail.
pub fn init_loading_states(page: &Rc<Page>) {
    if !page.config.effects.image_fade {
        return;
    }
    let images: Vec<HtmlImageElement> = super::query_all(dom::IMAGES)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();

    for img in &images {
        let loaded = img.clone();
        super::listen(img, "load", move |_| {
            super::set_style(&loaded, "opacity", image::LOADED_OPACITY);
        });

        let failed = img.clone();
        super::listen(img, "error", move |_| {
            super::set_style(&failed, "opacity", image::FAILED_OPACITY);
            log::warn!("Failed to load image: {}", failed.src());
        });

        // Images settled before boot never fire `load` or `error` again.
        let src = img.src();
        let state = ImageState::at_boot(img.complete(), img.natural_width(), !src.is_empty());
        if state == ImageState::Failed {
            log::warn!("Failed to load image: {src}");
        }
        super::set_style(img, "opacity", state.opacity());
        super::set_style(img, "transition", image::TRANSITION);
    }
    debug::log(cat::IMAGE, format!("tracking {} images", images.len()));
}
