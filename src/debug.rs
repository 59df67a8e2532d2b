//! Filterable debug logging for the page effects
//!
//! Categories: TOAST, FORM, SCROLL, HOVER, TYPING, COUNTER, IMAGE, BOOT
//! Enable via: ?smdebug=all or localStorage.setItem('strutmaster.debug','toast,form')

use std::sync::atomic::{AtomicU32, Ordering};

pub mod cat {
    pub const TOAST: u32 = 1 << 0;
    pub const FORM: u32 = 1 << 1;
    pub const SCROLL: u32 = 1 << 2;
    pub const HOVER: u32 = 1 << 3;
    pub const TYPING: u32 = 1 << 4;
    pub const COUNTER: u32 = 1 << 5;
    pub const IMAGE: u32 = 1 << 6;
    pub const BOOT: u32 = 1 << 7;
    pub const ALL: u32 = 0xffff_ffff;
}

static MASK: AtomicU32 = AtomicU32::new(0);

#[inline]
pub fn set(mask: u32) {
    MASK.store(mask, Ordering::Relaxed)
}

#[inline]
pub fn is(cat: u32) -> bool {
    (MASK.load(Ordering::Relaxed) & cat) != 0
}

#[inline]
pub fn cat_name(cat: u32) -> &'static str {
    match cat {
        c if c == cat::TOAST => "toast",
        c if c == cat::FORM => "form",
        c if c == cat::SCROLL => "scroll",
        c if c == cat::HOVER => "hover",
        c if c == cat::TYPING => "typing",
        c if c == cat::COUNTER => "counter",
        c if c == cat::IMAGE => "image",
        c if c == cat::BOOT => "boot",
        _ => "misc",
    }
}

/// Parse a comma-separated category list into a mask.
/// `none` clears everything seen so far, unknown names are ignored.
pub fn parse_list(list: &str) -> u32 {
    let mut m: u32 = 0;
    for tok in list.split(',').map(|s| s.trim().to_ascii_lowercase()) {
        match tok.as_str() {
            "" => {}
            "none" => m = 0,
            "all" => m = cat::ALL,
            "toast" => m |= cat::TOAST,
            "form" => m |= cat::FORM,
            "scroll" => m |= cat::SCROLL,
            "hover" => m |= cat::HOVER,
            "typing" => m |= cat::TYPING,
            "counter" => m |= cat::COUNTER,
            "image" => m |= cat::IMAGE,
            "boot" => m |= cat::BOOT,
            _ => {}
        }
    }
    m
}

#[inline]
pub fn set_from_list(list: &str) {
    set(parse_list(list));
}

/// Value of the debug key in a `?a=b&c=d` query string, if present.
pub fn list_from_query(search: &str) -> Option<&str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|part| part.split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("smdebug") || key.eq_ignore_ascii_case("smdbg"))
        .map(|(_, val)| val)
}

#[cfg(target_arch = "wasm32")]
pub fn init_from_url_and_storage_once() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use web_sys::window;
        if let Some(win) = window() {
            // localStorage: strutmaster.debug = "toast,form"
            if let Ok(Some(storage)) = win.local_storage() {
                if let Ok(Some(v)) = storage.get_item("strutmaster.debug") {
                    set_from_list(&v);
                }
            }
            // URL query wins: ?smdebug=toast,counter  OR  ?smdbg=all
            if let Ok(search) = win.location().search() {
                if let Some(val) = list_from_query(&search) {
                    if let Ok(decoded_js) = js_sys::decode_uri_component(val) {
                        let decoded = decoded_js.as_string().unwrap_or_default();
                        set_from_list(&decoded);
                    }
                }
            }
        }
        log(cat::BOOT, "debug init (wasm) complete");
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_from_url_and_storage_once() {
    // No-op on native; tests drive the mask directly.
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn log(cat: u32, msg: impl AsRef<str>) {
    if !is(cat) {
        return;
    }
    let s = format!("[StrutMaster][{}] {}", cat_name(cat), msg.as_ref());
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&s));
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn log(cat: u32, msg: impl AsRef<str>) {
    if !is(cat) {
        return;
    }
    eprintln!("[StrutMaster][{}] {}", cat_name(cat), msg.as_ref());
}
