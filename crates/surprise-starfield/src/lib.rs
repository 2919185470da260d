//! Starfield simulation for the space-surprise scene.
//!
//! A fixed batch of point particles either twinkles in place or, while the
//! black hole is collapsing, streams toward the center of the surface and
//! trickles away. The field is repainted from scratch every frame.

mod chars;
mod particle;
mod state;

pub use particle::{Particle, advance, initialize};
pub use state::Starfield;
