use std::rc::Rc;

use web_sys::{Element, HtmlInputElement};

use super::Page;
use crate::constants::dom::{AIRDROP_FORM_ID, EMAIL_INPUT_ID};
use crate::debug::{self, cat};
use crate::signup::Signup;

/// Validate the airdrop email on submit and answer with a toast.
pub fn init_airdrop_form(page: &Rc<Page>) {
    let (Some(form), Some(input)) = (
        super::by_id::<Element>(AIRDROP_FORM_ID),
        super::by_id::<HtmlInputElement>(EMAIL_INPUT_ID),
    ) else {
        debug::log(cat::FORM, "airdrop form not on page");
        return;
    };

    let page = page.clone();
    super::listen(&form, "submit", move |event| {
        event.prevent_default();

        let outcome = Signup::evaluate(&input.value());
        debug::log(cat::FORM, format!("submit -> {outcome:?}"));
        page.toasts.show(&outcome.toast());
        if outcome.clears_input() {
            input.set_value("");
        }
    });
}
