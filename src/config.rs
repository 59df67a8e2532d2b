use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{effect, timing, CONTRACT_ADDRESS};
use crate::flags::EffectFlags;
use crate::toast::ToastTimings;

/// Page configuration.
///
/// Defaults reproduce the published page. A page may override any subset by
/// embedding TOML in `<script type="application/toml" id="strutmaster-config">`.
///
/// ```toml
/// contract_address = "..."
/// parallax_rate = -0.3
///
/// [toast]
/// display_ms = 6000
///
/// [effects]
/// typing = false
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub contract_address: String,
    pub toast: ToastTimings,
    pub typing_start_delay_ms: u32,
    pub typing_char_interval_ms: u32,
    pub counter_start_delay_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_steps: u32,
    pub parallax_rate: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub mascot_stagger_secs: f64,
    pub effects: EffectFlags,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            contract_address: CONTRACT_ADDRESS.to_string(),
            toast: ToastTimings::default(),
            typing_start_delay_ms: timing::TYPING_START_DELAY_MS,
            typing_char_interval_ms: timing::TYPING_CHAR_INTERVAL_MS,
            counter_start_delay_ms: timing::COUNTER_START_DELAY_MS,
            counter_tick_ms: timing::COUNTER_TICK_MS,
            counter_steps: effect::COUNTER_STEPS,
            parallax_rate: effect::PARALLAX_RATE,
            reveal_threshold: effect::REVEAL_THRESHOLD,
            reveal_root_margin: effect::REVEAL_ROOT_MARGIN.to_string(),
            mascot_stagger_secs: effect::MASCOT_STAGGER_SECS,
            effects: EffectFlags::default(),
        }
    }
}

impl LandingConfig {
    /// Parse a (possibly partial) TOML override and validate the result.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: LandingConfig =
            toml::from_str(src).context("Failed to parse page config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Config from an optional inline override; invalid overrides fall back
    /// to defaults with a warning.
    pub fn from_override(src: Option<&str>) -> Self {
        match src.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(src) => Self::from_toml_str(src).unwrap_or_else(|e| {
                log::warn!("[config] ignoring page config: {e:#}");
                Self::default()
            }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.contract_address.trim().is_empty() {
            return Err(anyhow!("contract_address must not be empty"));
        }

        if !(500..=60_000).contains(&self.toast.display_ms) {
            return Err(anyhow!(
                "toast.display_ms must be between 500 and 60000, got {}",
                self.toast.display_ms
            ));
        }

        if self.toast.exit_ms > 5_000 {
            return Err(anyhow!(
                "toast.exit_ms must be at most 5000, got {}",
                self.toast.exit_ms
            ));
        }

        if !(10..=2_000).contains(&self.typing_char_interval_ms) {
            return Err(anyhow!(
                "typing_char_interval_ms must be between 10 and 2000, got {}",
                self.typing_char_interval_ms
            ));
        }

        if !(10..=1_000).contains(&self.counter_tick_ms) {
            return Err(anyhow!(
                "counter_tick_ms must be between 10 and 1000, got {}",
                self.counter_tick_ms
            ));
        }

        if !(1..=1_000).contains(&self.counter_steps) {
            return Err(anyhow!(
                "counter_steps must be between 1 and 1000, got {}",
                self.counter_steps
            ));
        }

        if !self.parallax_rate.is_finite() || self.parallax_rate.abs() > 2.0 {
            return Err(anyhow!(
                "parallax_rate must be within -2.0..=2.0, got {}",
                self.parallax_rate
            ));
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(anyhow!(
                "reveal_threshold must be within 0.0..=1.0, got {}",
                self.reveal_threshold
            ));
        }

        if !self.mascot_stagger_secs.is_finite() || self.mascot_stagger_secs < 0.0 {
            return Err(anyhow!(
                "mascot_stagger_secs must be a non-negative number, got {}",
                self.mascot_stagger_secs
            ));
        }

        Ok(())
    }
}
