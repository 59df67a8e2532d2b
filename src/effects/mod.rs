//! Cosmetic page effects.
//!
//! Each effect is independent and fire-and-forget; the headless parts here
//! compute frame sequences and style values, `crate::dom` applies them.

pub mod counter;
pub mod motion;
pub mod typing;

pub use counter::CountUp;
pub use typing::Typewriter;
