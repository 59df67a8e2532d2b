//! Effect flags tests - per-effect toggles and their config plumbing

use strutmaster::flags::EffectFlags;
use strutmaster::LandingConfig;

#[test]
fn default_flags_enable_every_effect() {
    let flags = EffectFlags::default();

    assert!(flags.reveal, "reveal should be enabled by default");
    assert!(flags.parallax, "parallax should be enabled by default");
    assert!(flags.hover, "hover should be enabled by default");
    assert!(flags.cursor_glow, "cursor_glow should be enabled by default");
    assert!(flags.typing, "typing should be enabled by default");
    assert!(flags.counters, "counters should be enabled by default");
    assert!(flags.image_fade, "image_fade should be enabled by default");
}

#[test]
fn all_disabled_disables_everything() {
    let flags = EffectFlags::all_disabled();

    assert!(!flags.reveal);
    assert!(!flags.parallax);
    assert!(!flags.hover);
    assert!(!flags.cursor_glow);
    assert!(!flags.typing);
    assert!(!flags.counters);
    assert!(!flags.image_fade);
}

#[test]
fn reduced_motion_keeps_pointer_feedback_only() {
    let flags = EffectFlags::reduced_motion();

    // Pointer-driven feedback stays
    assert!(flags.hover);
    assert!(flags.cursor_glow);

    // Nothing animates on its own
    assert!(!flags.reveal);
    assert!(!flags.parallax);
    assert!(!flags.typing);
    assert!(!flags.counters);
    assert!(!flags.image_fade);
}

#[test]
fn flags_are_copyable() {
    let flags1 = EffectFlags::default();
    let flags2 = flags1; // Should be Copy

    assert_eq!(flags1, flags2);
}

#[test]
fn flags_load_from_page_config() {
    let config = LandingConfig::from_toml_str(
        r#"
        [effects]
        parallax = false
        counters = false
        "#,
    )
    .expect("valid override");

    assert!(!config.effects.parallax);
    assert!(!config.effects.counters);
    // Unmentioned flags keep their defaults
    assert!(config.effects.typing);
    assert!(config.effects.reveal);
}
