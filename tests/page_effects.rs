//! Toast lifecycle and animation sequences as the page runs them

use std::time::Duration;

use strutmaster::effects::counter::{percent_label, CountUp};
use strutmaster::effects::Typewriter;
use strutmaster::{LandingConfig, Toast, ToastPhase};

#[test]
fn toast_is_removed_after_dismissal_delay() {
    let config = LandingConfig::default();
    let toast = Toast::success("CA", config.contract_address.as_str());
    let timings = config.toast;

    assert_eq!(toast.phase_at(Duration::from_secs(1), &timings), ToastPhase::Visible);
    assert_eq!(toast.phase_at(timings.display(), &timings), ToastPhase::Leaving);
    assert_eq!(toast.phase_at(timings.lifetime(), &timings), ToastPhase::Removed);
    assert_eq!(timings.lifetime(), Duration::from_millis(4300));
}

#[test]
fn scheduled_timeouts_detach_toast_exactly_at_removal() {
    let timings = LandingConfig::default().toast;
    let toast = Toast::success("Success! 🎉", "");

    let detach_after = timings.timer_ms(ToastPhase::Leaving) + timings.timer_ms(ToastPhase::Removed);
    let detach_after = Duration::from_millis(detach_after.into());

    assert_eq!(detach_after, timings.starts_at(ToastPhase::Removed));
    assert_eq!(toast.phase_at(detach_after, &timings), ToastPhase::Removed);
}

#[test]
fn custom_timings_shift_removal() {
    let config = LandingConfig::from_toml_str(
        r#"
        [toast]
        display_ms = 1000
        exit_ms = 0
        "#,
    )
    .expect("valid override");
    let toast = Toast::error("Error", "");

    assert_eq!(
        toast.phase_at(Duration::from_millis(999), &config.toast),
        ToastPhase::Visible
    );
    // No exit animation: straight from visible to removed
    assert_eq!(
        toast.phase_at(Duration::from_millis(1000), &config.toast),
        ToastPhase::Removed
    );
}

#[test]
fn percentage_label_counts_up_to_exact_value() {
    let config = LandingConfig::default();
    let count = CountUp::from_label("42%", config.counter_steps).expect("numeric label");

    let labels: Vec<String> = count.map(percent_label).collect();
    assert_eq!(labels.first().map(String::as_str), Some("0%"));
    assert_eq!(labels.last().map(String::as_str), Some("42%"));
}

#[test]
fn every_percentage_lands_on_target() {
    for target in [1, 5, 10, 25, 33, 42, 50, 99, 100] {
        let last = CountUp::new(target, 50).last();
        assert_eq!(last, Some(target), "count-up to {target} overshot or stopped early");
    }
}

#[test]
fn title_typing_reconstructs_text() {
    let title = "Strut Master Coin";
    let frames: Vec<String> = Typewriter::new(title).collect();

    assert_eq!(frames.len(), title.chars().count());
    assert_eq!(frames.last().map(String::as_str), Some(title));
}
