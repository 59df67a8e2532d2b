//! Airdrop form behavior: which toast is shown and whether the field clears

use strutmaster::{is_valid_email, Signup, ToastKind};

#[test]
fn validator_rejects_missing_at_or_domain_dot() {
    assert!(!is_valid_email("strut.master.example.com"));
    assert!(!is_valid_email("strut@example"));
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn empty_submission_shows_error_and_keeps_input() {
    let outcome = Signup::evaluate("   ");
    assert_eq!(outcome, Signup::Empty);

    let toast = outcome.toast();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title, "Error");
    assert_eq!(
        toast.description.as_deref(),
        Some("Please enter your email address")
    );
    assert!(!outcome.clears_input());
}

#[test]
fn invalid_submission_shows_error_and_keeps_input() {
    let outcome = Signup::evaluate("not-an-email");
    assert_eq!(outcome, Signup::Invalid);

    let toast = outcome.toast();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(
        toast.description.as_deref(),
        Some("Please enter a valid email address")
    );
    assert!(!outcome.clears_input());
}

#[test]
fn valid_submission_shows_success_and_clears_input() {
    let outcome = Signup::evaluate("holder@strut.coin");
    assert_eq!(
        outcome,
        Signup::Accepted {
            email: "holder@strut.coin".to_string()
        }
    );

    let toast = outcome.toast();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "Success! 🎉");
    assert_eq!(
        toast.description.as_deref(),
        Some("You're signed up for the STRUT airdrop!")
    );
    assert_eq!(toast.class_name(), "toast success");
    assert!(outcome.clears_input());
}
