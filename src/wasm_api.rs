//! JS-facing surface.
//!
//! Direct wasm-bindgen exports plus the `window.StrutMaster` namespace that
//! other page scripts use:
//!
//! ```javascript
//! StrutMaster.toast.show("Hello", "from another script", "success");
//! StrutMaster.isValidEmail("a@b.co"); // true
//! StrutMaster.initializeAirdropForm();
//! ```

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{self, form, scroll};
use crate::email;
use crate::toast::{Toast, ToastKind};

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    email::is_valid_email(email)
}

/// Show a toast; `kind` is `"success"` (default) or `"error"`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(title: String, description: Option<String>, kind: Option<String>) -> JsValue {
    let kind = kind.as_deref().map(ToastKind::from_name).unwrap_or_default();
    let toast = Toast::new(title, description.unwrap_or_default(), kind);
    dom::page()
        .toasts
        .show(&toast)
        .map(JsValue::from)
        .unwrap_or(JsValue::UNDEFINED)
}

fn export<T>(target: &Object, name: &str, closure: Closure<T>) -> Result<(), JsValue>
where
    T: ?Sized + WasmClosure,
{
    Reflect::set(target, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// Publish `window.StrutMaster`.
pub fn install_namespace() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let toast = Object::new();
    export(
        &toast,
        "show",
        Closure::<dyn Fn(JsValue, JsValue, JsValue) -> JsValue>::new(
            |title: JsValue, description: JsValue, kind: JsValue| {
                show_toast(
                    title.as_string().unwrap_or_default(),
                    description.as_string(),
                    kind.as_string(),
                )
            },
        ),
    )?;
    export(
        &toast,
        "remove",
        Closure::<dyn Fn(JsValue)>::new(|node: JsValue| {
            if let Ok(node) = node.dyn_into::<Element>() {
                dom::page().toasts.remove(&node);
            }
        }),
    )?;

    let ns = Object::new();
    Reflect::set(&ns, &JsValue::from_str("toast"), &toast)?;
    export(
        &ns,
        "isValidEmail",
        Closure::<dyn Fn(JsValue) -> bool>::new(|email: JsValue| {
            email.as_string().is_some_and(|e| is_valid_email(&e))
        }),
    )?;
    export(
        &ns,
        "initializeAirdropForm",
        Closure::<dyn Fn()>::new(|| form::init_airdrop_form(&dom::page())),
    )?;
    export(
        &ns,
        "initializeSmoothScrolling",
        Closure::<dyn Fn()>::new(scroll::init_smooth_scrolling),
    )?;
    export(
        &ns,
        "initializeScrollAnimations",
        Closure::<dyn Fn()>::new(|| scroll::init_scroll_animations(&dom::page())),
    )?;
    export(
        &ns,
        "configJson",
        Closure::<dyn Fn() -> String>::new(|| {
            serde_json::to_string(&dom::page().config).unwrap_or_else(|e| {
                log::error!("Failed to serialize LandingConfig: {e}");
                "{}".to_string()
            })
        }),
    )?;

    Reflect::set(&JsValue::from(win), &JsValue::from_str("StrutMaster"), &ns)?;
    Ok(())
}
