//! Particle state and per-frame simulation.

use rand::Rng;
use surprise_core::{Mode, Point, Viewport};

/// Largest radius a star can be created with (exclusive).
pub const MAX_RADIUS: f32 = 1.5;

/// Opacity bounds of the twinkle oscillation.
pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 1.0;

/// Twinkle speed range, `[MIN_TWINKLE_SPEED, MIN_TWINKLE_SPEED + TWINKLE_SPEED_SPREAD)`.
pub const MIN_TWINKLE_SPEED: f32 = 0.05;
pub const TWINKLE_SPEED_SPREAD: f32 = 0.1;

/// Distance at which stars start shrinking on their way in.
pub const SHRINK_DISTANCE: f32 = 200.0;
/// Distance at which stars are swallowed.
pub const CAPTURE_DISTANCE: f32 = 50.0;
/// Radius lost per frame inside [`SHRINK_DISTANCE`].
pub const SHRINK_STEP: f32 = 0.05;
/// Smallest radius reached by shrinking alone.
pub const MIN_SHRUNK_RADIUS: f32 = 0.1;
/// Chance that a swallowed star reappears somewhere else instead of vanishing.
pub const RESPAWN_CHANCE: f64 = 0.1;

/// Slowest and fastest pull toward the center, per frame.
const MIN_PULL: f32 = 0.5;
const MAX_PULL: f32 = 15.0;
/// Pull lost per unit of distance.
const PULL_FALLOFF: f32 = 100.0;

/// A single point of light in the background field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
    /// Signed opacity change per frame.
    pub speed: f32,
}

impl Particle {
    /// Random star somewhere on a `width x height` surface.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.random::<f32>() * width.max(0.0),
            y: rng.random::<f32>() * height.max(0.0),
            radius: rng.random::<f32>() * MAX_RADIUS,
            opacity: rng.random::<f32>(),
            speed: MIN_TWINKLE_SPEED + rng.random::<f32>() * TWINKLE_SPEED_SPREAD,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounce the opacity between [`MIN_OPACITY`] and [`MAX_OPACITY`].
    fn twinkle(&mut self, scale: f32) {
        self.opacity += self.speed * scale;
        if self.opacity > MAX_OPACITY {
            self.opacity = MAX_OPACITY;
            self.speed = -self.speed.abs();
        } else if self.opacity < MIN_OPACITY {
            self.opacity = MIN_OPACITY;
            self.speed = self.speed.abs();
        }
    }

    /// Move one frame toward `center`, shrinking and eventually being swallowed.
    fn fall<R: Rng + ?Sized>(&mut self, rng: &mut R, center: Point, bounds: &Viewport) {
        let dx = center.x - self.x;
        let dy = center.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > 0.0 {
            let pull = (MAX_PULL - distance / PULL_FALLOFF).max(MIN_PULL);
            self.x += dx / distance * pull;
            self.y += dy / distance * pull;
        }

        if distance < SHRINK_DISTANCE {
            self.radius = (self.radius - SHRINK_STEP).max(MIN_SHRUNK_RADIUS);
        }

        if distance < CAPTURE_DISTANCE {
            if rng.random_bool(RESPAWN_CHANCE) {
                self.x = rng.random::<f32>() * bounds.width.max(0.0);
                self.y = rng.random::<f32>() * bounds.height.max(0.0);
                self.radius = rng.random::<f32>() * MAX_RADIUS;
            } else {
                self.radius = 0.0;
            }
        }
    }
}

/// Create `count` stars spread uniformly over a `width x height` surface.
pub fn initialize<R: Rng + ?Sized>(
    rng: &mut R,
    width: f32,
    height: f32,
    count: usize,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::random(rng, width, height))
        .collect()
}

/// Run one display refresh over every particle.
///
/// Collapsing stars fall toward `center` and respawn inside `bounds`.
/// `twinkle_scale` multiplies the opacity step in idle mode; 1.0 keeps each
/// star's own speed.
pub fn advance<R: Rng + ?Sized>(
    rng: &mut R,
    particles: &mut [Particle],
    mode: Mode,
    center: Point,
    bounds: &Viewport,
    twinkle_scale: f32,
) {
    for particle in particles {
        match mode {
            Mode::Idle => particle.twinkle(twinkle_scale),
            Mode::Collapsing => particle.fall(rng, center, bounds),
        }
    }
}
