//! Toast notifications: content, styling and lifecycle timing.
//!
//! A toast is shown, stays visible for `ToastTimings::display`, plays an exit
//! animation for `ToastTimings::exit`, and is then removed from its
//! container. Every toast runs on its own timers; there is no queue.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::timing;

/// Visual style of a toast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// CSS class carried by the toast node
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Lenient parse used by the JS namespace (`toast.show(t, d, "error")`).
    /// Unknown names fall back to `Success`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => ToastKind::Error,
            _ => ToastKind::Success,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// One notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub kind: ToastKind,
}

impl Toast {
    /// Build a toast. An empty description is dropped.
    pub fn new(title: impl Into<String>, description: impl Into<String>, kind: ToastKind) -> Self {
        let description = description.into();
        Self {
            title: title.into(),
            description: (!description.is_empty()).then_some(description),
            kind,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastKind::Success)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastKind::Error)
    }

    /// Class attribute of the toast node, e.g. `"toast error"`
    pub fn class_name(&self) -> String {
        format!("toast {}", self.kind)
    }

    /// Lifecycle phase after `elapsed` time on screen
    pub fn phase_at(&self, elapsed: Duration, timings: &ToastTimings) -> ToastPhase {
        timings.phase_at(elapsed)
    }
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully shown
    Visible,
    /// Exit animation playing; node still attached
    Leaving,
    /// Detached from the container
    Removed,
}

/// Display and exit durations shared by all toasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Visible time before the exit animation starts (ms)
    pub display_ms: u32,
    /// Exit animation length (ms)
    pub exit_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            display_ms: timing::TOAST_DISPLAY_MS,
            exit_ms: timing::TOAST_EXIT_MS,
        }
    }
}

impl ToastTimings {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms.into())
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms.into())
    }

    /// Total time from `show` until the node is detached
    pub fn lifetime(&self) -> Duration {
        self.display() + self.exit()
    }

    /// Time after `show` at which `phase` begins
    pub fn starts_at(&self, phase: ToastPhase) -> Duration {
        match phase {
            ToastPhase::Visible => Duration::ZERO,
            ToastPhase::Leaving => self.display(),
            ToastPhase::Removed => self.lifetime(),
        }
    }

    /// Timer delay (ms) from entering the previous phase to entering `phase`.
    /// The DOM manager schedules its timeouts with these.
    pub fn timer_ms(&self, phase: ToastPhase) -> u32 {
        let previous = match phase {
            ToastPhase::Visible | ToastPhase::Leaving => ToastPhase::Visible,
            ToastPhase::Removed => ToastPhase::Leaving,
        };
        let delay = self.starts_at(phase) - self.starts_at(previous);
        u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
    }

    pub fn phase_at(&self, elapsed: Duration) -> ToastPhase {
        if elapsed >= self.starts_at(ToastPhase::Removed) {
            ToastPhase::Removed
        } else if elapsed >= self.starts_at(ToastPhase::Leaving) {
            ToastPhase::Leaving
        } else {
            ToastPhase::Visible
        }
    }

    /// Inline `animation` value applied when the toast starts leaving
    pub fn exit_animation(&self) -> String {
        format!("toast-slide-out {}s ease-out", self.exit_ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_is_dropped() {
        let t = Toast::success("Hi", "");
        assert_eq!(t.description, None);

        let t = Toast::error("Error", "details");
        assert_eq!(t.description.as_deref(), Some("details"));
    }

    #[test]
    fn class_name_carries_kind() {
        assert_eq!(Toast::success("a", "").class_name(), "toast success");
        assert_eq!(Toast::error("a", "").class_name(), "toast error");
    }

    #[test]
    fn kind_parsing_is_lenient() {
        assert_eq!(ToastKind::from_name("error"), ToastKind::Error);
        assert_eq!(ToastKind::from_name(" ERROR "), ToastKind::Error);
        assert_eq!(ToastKind::from_name("success"), ToastKind::Success);
        assert_eq!(ToastKind::from_name("warning"), ToastKind::Success);
        assert_eq!(ToastKind::default(), ToastKind::Success);
    }

    #[test]
    fn default_lifecycle() {
        let timings = ToastTimings::default();
        let t = Toast::success("Hi", "");

        assert_eq!(t.phase_at(Duration::ZERO, &timings), ToastPhase::Visible);
        assert_eq!(
            t.phase_at(Duration::from_millis(3999), &timings),
            ToastPhase::Visible
        );
        assert_eq!(
            t.phase_at(Duration::from_millis(4000), &timings),
            ToastPhase::Leaving
        );
        assert_eq!(
            t.phase_at(Duration::from_millis(4299), &timings),
            ToastPhase::Leaving
        );
        assert_eq!(
            t.phase_at(Duration::from_millis(4300), &timings),
            ToastPhase::Removed
        );
    }

    #[test]
    fn timers_land_on_phase_boundaries() {
        let timings = ToastTimings::default();
        assert_eq!(timings.timer_ms(ToastPhase::Leaving), 4000);
        assert_eq!(timings.timer_ms(ToastPhase::Removed), 300);

        // Chained timeouts: show -> remove -> detach
        let leave = Duration::from_millis(timings.timer_ms(ToastPhase::Leaving).into());
        let detach = leave + Duration::from_millis(timings.timer_ms(ToastPhase::Removed).into());
        assert_eq!(timings.phase_at(leave), ToastPhase::Leaving);
        assert_eq!(timings.phase_at(detach), ToastPhase::Removed);
        assert_eq!(
            timings.phase_at(detach - Duration::from_millis(1)),
            ToastPhase::Leaving
        );
    }

    #[test]
    fn exit_animation_matches_stylesheet() {
        assert_eq!(
            ToastTimings::default().exit_animation(),
            "toast-slide-out 0.3s ease-out"
        );
    }
}
