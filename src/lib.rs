//! Strut Master - landing page behavior in Rust/WebAssembly
//!
//! Drives the Strut Master Coin marketing page: toast notifications, the
//! airdrop email form, scroll/hover/parallax effects, a typing hero title and
//! counting tokenomics labels.
//!
//! ## Architecture
//!
//! - **Headless core** (all targets): validation, toast content and timing,
//!   animation frame sequences, style values, configuration.
//! - **DOM layer** (`wasm32` only): `dom` and `wasm_api` attach listeners and
//!   timers and write the core's output into the page.
//!
//! ## Usage
//!
//! ```bash
//! cargo test
//! trunk build --features dom-web web/index.html
//! ```

// Core modules (available on all platforms)
pub mod config;
pub mod constants;
pub mod effects;
pub mod email;
pub mod nav;
pub mod signup;
pub mod toast;

// Effect toggles (available on all platforms)
pub mod flags;

// Debug logging system (available on all platforms)
pub mod debug;

// Platform abstraction layer
pub mod platform;

// Browser wiring and the JS-facing surface are only built on wasm32.
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

// Re-export commonly used types
pub use config::LandingConfig;
pub use email::is_valid_email;
pub use flags::EffectFlags;
pub use signup::Signup;
pub use toast::{Toast, ToastKind, ToastPhase, ToastTimings};
