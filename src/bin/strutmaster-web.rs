#![cfg_attr(target_arch = "wasm32", no_main)]

// Browser entry point for the Strut Master landing page.
//
// Build with trunk (see web/index.html):
//   trunk build --features dom-web web/index.html
//
// Everything else lives in the library; this binary only installs the panic
// hook and logger, then boots the page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("[StrutMaster] wasm loaded, booting page");
    strutmaster::dom::boot();
}

// The page only exists in a browser; native targets get a main that says so.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("strutmaster-web runs in the browser: build it with `trunk build` for wasm32-unknown-unknown");
}
