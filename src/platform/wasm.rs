use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    // Host-provided bridge (wallet webviews, extensions) if the page defines one.
    // `catch` prevents a panic when the function is missing.
    #[wasm_bindgen(js_namespace = window, js_name = __copy_text, catch)]
    fn __copy_text_js(s: &str) -> Result<Promise, JsValue>;
}

fn settle(promise: Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[clipboard] write rejected: {e:?}");
        }
    });
}

pub fn copy_to_clipboard(s: &str) -> bool {
    // 1) Preferred: bridge present.
    if let Ok(promise) = __copy_text_js(s) {
        settle(promise);
        return true;
    }

    // 2) Fallback: navigator.clipboard.writeText (secure contexts only).
    let Some(win) = web_sys::window() else { return false; };
    let navigator = JsValue::from(win.navigator());
    let Ok(clip) = Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clip.is_undefined() || clip.is_null() {
        // No path available (plain http, old WebViews).
        return false;
    }
    let Some(write_text) = Reflect::get(&clip, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return false;
    };
    match write_text.call1(&clip, &JsValue::from_str(s)) {
        Ok(p) => {
            if let Ok(promise) = p.dyn_into::<Promise>() {
                settle(promise);
            }
            true
        }
        Err(_) => false,
    }
}
