//! Effect toggles
//!
//! Every cosmetic effect on the page can be switched off independently.
//! All effects are on by default; turning one off leaves the markup in its
//! static, fully visible state.

use serde::{Deserialize, Serialize};

/// Per-effect on/off switches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectFlags {
    /// Fade and slide cards in when they scroll into view.
    pub reveal: bool,

    /// Offset the hero background against the scroll position.
    pub parallax: bool,

    /// Lift/scale hero buttons and tilt mascot images on hover.
    pub hover: bool,

    /// Track the pointer inside hero buttons via `--mouse-x` / `--mouse-y`.
    pub cursor_glow: bool,

    /// Retype the hero title character by character.
    pub typing: bool,

    /// Count percentage labels up from zero.
    pub counters: bool,

    /// Fade images in on load and dim broken ones.
    pub image_fade: bool,
}

impl Default for EffectFlags {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl EffectFlags {
    pub fn all_enabled() -> Self {
        EffectFlags {
            reveal: true,
            parallax: true,
            hover: true,
            cursor_glow: true,
            typing: true,
            counters: true,
            image_fade: true,
        }
    }

    /// Static page: no animation at all
    pub fn all_disabled() -> Self {
        EffectFlags {
            reveal: false,
            parallax: false,
            hover: false,
            cursor_glow: false,
            typing: false,
            counters: false,
            image_fade: false,
        }
    }

    /// Keep pointer feedback only; nothing moves on its own
    pub fn reduced_motion() -> Self {
        EffectFlags {
            hover: true,
            cursor_glow: true,
            ..Self::all_disabled()
        }
    }
}
