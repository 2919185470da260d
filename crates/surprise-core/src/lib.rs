//! Core types shared by the space-surprise crates.
//!
//! The scene mode, viewport geometry, animation speed, easing curves and the
//! one-shot timer used by the transition controller all live here so the
//! simulation crates never depend on each other.

mod easing;
mod geometry;
mod mode;
mod speed;
mod timer;

pub use easing::{CubicBezier, Easing};
pub use geometry::{Point, Viewport};
pub use mode::Mode;
pub use speed::AnimationSpeed;
pub use timer::OneShotTimer;
