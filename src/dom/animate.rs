use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use super::Page;
use crate::constants::dom;
use crate::debug::{self, cat};
use crate::effects::counter::{percent_label, CountUp};
use crate::effects::Typewriter;

/// Clear the hero title and type it back in.
pub fn init_typing_animation(page: &Rc<Page>) {
    if !page.config.effects.typing {
        return;
    }
    let Some(title) = super::query(dom::HERO_TITLE) else {
        return;
    };
    let text = title.text_content().unwrap_or_default();
    title.set_text_content(Some(""));
    debug::log(cat::TYPING, format!("typing {} chars", text.chars().count()));

    let interval = page.config.typing_char_interval_ms;
    let writer = Typewriter::new(text);
    Timeout::new(page.config.typing_start_delay_ms, move || {
        type_next(title, writer, interval)
    })
    .forget();
}

fn type_next(el: HtmlElement, mut writer: Typewriter, interval: u32) {
    let Some(prefix) = writer.next() else {
        return;
    };
    el.set_text_content(Some(&prefix));
    if !writer.is_done() {
        Timeout::new(interval, move || type_next(el, writer, interval)).forget();
    }
}

/// Count every percentage label up from zero to the value it displays.
pub fn init_counters(page: &Rc<Page>) {
    if !page.config.effects.counters {
        return;
    }
    let tick = page.config.counter_tick_ms;
    for label in super::query_all(dom::PERCENTAGES) {
        let text = label.text_content().unwrap_or_default();
        let Some(count) = CountUp::from_label(&text, page.config.counter_steps) else {
            debug::log(cat::COUNTER, format!("skipping non-numeric label {text:?}"));
            continue;
        };
        debug::log(cat::COUNTER, format!("count to {}", count.target()));
        Timeout::new(tick, move || count_next(label, count, tick)).forget();
    }
}

fn count_next(el: HtmlElement, mut count: CountUp, tick: u32) {
    let Some(value) = count.next() else {
        return;
    };
    el.set_text_content(Some(&percent_label(value)));
    if !count.is_done() {
        Timeout::new(tick, move || count_next(el, count, tick)).forget();
    }
}
