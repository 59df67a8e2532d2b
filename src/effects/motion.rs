//! Style values for parallax, hover, reveal and image-loading effects.
//!
//! Pure functions and constants; the DOM layer writes these strings into
//! inline styles.

/// Hero button hover transforms
pub mod button {
    pub const HOVER: &str = "translateY(-2px) scale(1.05)";
    pub const REST: &str = "translateY(0) scale(1)";
}

/// Mascot and gallery image hover transforms
pub mod mascot {
    pub const HOVER: &str = "scale(1.1) rotate(5deg)";
    pub const REST: &str = "scale(1) rotate(0deg)";
}

/// Scroll-reveal inline styles
pub mod reveal {
    pub const HIDDEN_OPACITY: &str = "0";
    pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
    pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
    pub const SHOWN_OPACITY: &str = "1";
    pub const SHOWN_TRANSFORM: &str = "translateY(0)";
}

/// Image fade-in inline styles
pub mod image {
    pub const PENDING_OPACITY: &str = "0";
    pub const LOADED_OPACITY: &str = "1";
    /// Broken images stay visible but dimmed
    pub const FAILED_OPACITY: &str = "0.5";
    pub const TRANSITION: &str = "opacity 0.3s ease";

    /// Load state of an image observed at boot
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ImageState {
        /// Still loading, or no source yet; wait for `load` / `error`
        Pending,
        Loaded,
        /// Finished without pixels: `error` already fired before boot
        Failed,
    }

    impl ImageState {
        /// Classify from `complete`, `naturalWidth` and whether `src` is set.
        pub fn at_boot(complete: bool, natural_width: u32, has_src: bool) -> Self {
            match (complete, natural_width) {
                (false, _) => ImageState::Pending,
                (true, w) if w > 0 => ImageState::Loaded,
                (true, _) if has_src => ImageState::Failed,
                (true, _) => ImageState::Pending,
            }
        }

        pub fn opacity(&self) -> &'static str {
            match self {
                ImageState::Pending => PENDING_OPACITY,
                ImageState::Loaded => LOADED_OPACITY,
                ImageState::Failed => FAILED_OPACITY,
            }
        }
    }
}

/// Background offset for a scroll position
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

/// `animation-delay` for the `index`-th mascot image
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{}s", index as f64 * step_secs)
}

/// Axis-aligned box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Pointer offset inside the box, bounds inclusive; `None` when outside.
    pub fn local_point(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        let x = client_x - self.left;
        let y = client_y - self.top;
        (x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height).then_some((x, y))
    }
}

/// CSS length in pixels, e.g. `"12px"`
pub fn px(value: f64) -> String {
    format!("{value}px")
}
