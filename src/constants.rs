//! Page constants
//!
//! Centralized element ids, selectors, style values and default timings used
//! throughout the page. Every default here mirrors what the markup and
//! stylesheet in `web/` expect.

/// Element ids and CSS selectors the page markup provides.
///
/// Every initializer silently does nothing when its elements are absent.
pub mod dom {
    /// Container that toast nodes are appended to
    pub const TOAST_CONTAINER_ID: &str = "toast-container";

    /// Airdrop signup form
    pub const AIRDROP_FORM_ID: &str = "airdrop-form";

    /// Email field inside the airdrop form
    pub const EMAIL_INPUT_ID: &str = "email-input";

    /// In-page anchor links that get smooth scrolling
    pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

    /// Elements that fade and slide in once scrolled into view
    pub const REVEAL_TARGETS: &str = ".card-meme, .roadmap-card, .gallery-card, .team-card";

    pub const HERO_SECTION: &str = ".hero-section";
    pub const HERO_BG: &str = ".hero-bg";
    pub const HERO_TITLE: &str = ".hero-title";

    /// All hero call-to-action buttons (hover lift + cursor glow)
    pub const HERO_BUTTONS: &str = ".btn-hero";

    /// "Buy" button that reveals the contract address
    pub const CONTRACT_BUTTON: &str = ".btn-hero.primary";

    /// Secondary hero buttons; only the airdrop one scrolls
    pub const SECONDARY_BUTTONS: &str = ".btn-hero.secondary";

    pub const AIRDROP_SECTION: &str = ".airdrop-section";

    /// Tokenomics percentage labels
    pub const PERCENTAGES: &str = ".breakdown-percentage";

    /// Floating mascot and gallery images
    pub const MASCOT_IMAGES: &str = ".mascot-image, .gallery-image";

    pub const IMAGES: &str = "img";

    /// Inline TOML block that may override `LandingConfig`
    pub const CONFIG_SCRIPT_ID: &str = "strutmaster-config";
}

/// Default timings (milliseconds)
pub mod timing {
    /// How long a toast stays fully visible before leaving
    pub const TOAST_DISPLAY_MS: u32 = 4000;

    /// Length of the toast exit animation
    pub const TOAST_EXIT_MS: u32 = 300;

    /// Delay before the hero title starts typing
    pub const TYPING_START_DELAY_MS: u32 = 500;

    /// Delay between typed characters
    pub const TYPING_CHAR_INTERVAL_MS: u32 = 100;

    /// Delay after boot before percentage labels count up
    pub const COUNTER_START_DELAY_MS: u32 = 1000;

    /// Delay between count-up frames
    pub const COUNTER_TICK_MS: u32 = 50;
}

/// Default effect parameters
pub mod effect {
    /// Number of increments a count-up takes to reach its target
    pub const COUNTER_STEPS: u32 = 50;

    /// Hero background offset per scrolled pixel
    pub const PARALLAX_RATE: f64 = -0.5;

    /// Fraction of a card that must be visible before it is revealed
    pub const REVEAL_THRESHOLD: f64 = 0.1;

    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

    /// Animation delay added per mascot image (seconds)
    pub const MASCOT_STAGGER_SECS: f64 = 0.5;
}

/// Token contract address shown by the "Buy" button
pub const CONTRACT_ADDRESS: &str = "5P1jUoxxdYyYieWEVko3UaYngwNoZyhCKe1bapFfrge";

/// Button label that marks a secondary button as the airdrop shortcut
pub const JOIN_AIRDROP_LABEL: &str = "Join Airdrop";
