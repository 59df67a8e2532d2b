use std::rc::Rc;

use super::Page;
use crate::constants::dom;
use crate::debug::{self, cat};
use crate::nav::{contract_toast, is_airdrop_button};
use crate::platform::copy_to_clipboard;

/// Contract-address button and "Join Airdrop" shortcuts.
pub fn init_cta_buttons(page: &Rc<Page>) {
    if let Some(buy) = super::query(dom::CONTRACT_BUTTON) {
        let page = page.clone();
        super::listen(&buy, "click", move |_| {
            let address = &page.config.contract_address;
            let copied = copy_to_clipboard(address);
            debug::log(cat::TOAST, format!("contract address copied: {copied}"));
            page.toasts.show(&contract_toast(address));
        });
    }

    for btn in super::query_all(dom::SECONDARY_BUTTONS) {
        let label = btn.text_content().unwrap_or_default();
        if !is_airdrop_button(&label) {
            continue;
        }
        super::listen(&btn, "click", |_| {
            if let Some(section) = super::query(dom::AIRDROP_SECTION) {
                super::smooth_scroll_to(&section, false);
            }
        });
    }
}
