//! Floating space objects and the black hole they fall into.
//!
//! [`generate`] scatters a batch of sprites around an exclusion zone at the
//! center of the surface. Each sprite is wrapped in an [`AnimatedObject`]
//! whose explicit animation state is sampled every frame, both for the idle
//! float-and-spin loop and for the synchronized collapse into the center.

mod animation;
mod black_hole;
mod catalog;
mod color;
mod object;
mod render;

pub use animation::{AnimatedObject, ObjectAnimation, Transform, Tween};
pub use black_hole::{BLACK_HOLE_RADIUS, BlackHole};
pub use catalog::{CATALOG, Sprite, SpriteKind};
pub use object::{FieldParams, SpaceObject, generate, sample_position};
pub use render::render_objects;
