//! Space object generation.

use rand::Rng;
use surprise_core::{Point, Viewport};

use crate::catalog::{CATALOG, Sprite, SpriteKind};

/// Float animation period range in seconds.
const ANIMATION_SECS: (f32, f32) = (15.0, 40.0);

/// Float distance range in surface units.
const FLOAT_DISTANCE: (f32, f32) = (10.0, 30.0);

/// Angular step used when walking the exclusion ring for a free spot.
const RING_STEP_DEGREES: f32 = 0.5;

/// Knobs for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Number of objects per batch.
    pub count: usize,
    /// No object may spawn closer than this to the center.
    pub exclusion_radius: f32,
    /// Footprint subtracted from the viewport so objects stay on screen.
    pub margin: f32,
    /// Rejection-sampling budget per object.
    pub max_attempts: u32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 30,
            exclusion_radius: 200.0,
            margin: 100.0,
            max_attempts: 1000,
        }
    }
}

/// A decorative sprite instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceObject {
    pub id: usize,
    /// Top-left corner of the footprint box.
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Resting rotation in degrees.
    pub rotation: f32,
    /// Float period in seconds. Rotation takes twice as long.
    pub animation_duration: f32,
    pub float_distance: f32,
    pub sprite: &'static Sprite,
}

impl SpaceObject {
    pub fn kind(&self) -> SpriteKind {
        self.sprite.kind
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center of the footprint box.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// Generate a batch of `params.count` objects around the exclusion zone.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: &Viewport,
    params: &FieldParams,
) -> Vec<SpaceObject> {
    (0..params.count)
        .map(|id| {
            let position = sample_position(rng, viewport, params);
            let sprite = &CATALOG[rng.random_range(0..CATALOG.len())];
            let (min, max) = sprite.kind.size_range();

            SpaceObject {
                id,
                x: position.x,
                y: position.y,
                size: sample_below(rng, min, max),
                rotation: sample_below(rng, 0.0, 360.0),
                animation_duration: sample_below(rng, ANIMATION_SECS.0, ANIMATION_SECS.1),
                float_distance: sample_below(rng, FLOAT_DISTANCE.0, FLOAT_DISTANCE.1),
                sprite,
            }
        })
        .collect()
}

/// Uniform sample in `[min, max)`.
///
/// Float rounding can land a draw exactly on `max`; those are redrawn.
fn sample_below<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    loop {
        let value = rng.random_range(min..max);
        if value < max {
            return value;
        }
    }
}

/// Rejection-sample a position outside the exclusion zone.
///
/// After `max_attempts` misses the last sample is moved onto the exclusion
/// ring, so this always terminates. The result stays outside the zone
/// whenever any part of the ring lies inside the sampling span.
pub fn sample_position<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: &Viewport,
    params: &FieldParams,
) -> Point {
    let center = viewport.center();
    let span_x = (viewport.width - params.margin).max(0.0);
    let span_y = (viewport.height - params.margin).max(0.0);

    let mut last = center;
    for _ in 0..params.max_attempts.max(1) {
        let candidate = Point::new(rng.random::<f32>() * span_x, rng.random::<f32>() * span_y);
        if candidate.distance(center) >= params.exclusion_radius {
            return candidate;
        }
        last = candidate;
    }

    log::debug!(
        "no free spot after {} attempts in {}x{}, using exclusion ring",
        params.max_attempts,
        viewport.width,
        viewport.height
    );
    project_onto_ring(rng, last, center, params.exclusion_radius, span_x, span_y)
}

/// Nearest ring point to `point`'s direction that lies inside the sampling
/// span `[0, span_x] x [0, span_y]`.
///
/// Walks the ring both ways from the starting angle. Falls back to the span
/// corner farthest from the center when no ring point fits.
fn project_onto_ring<R: Rng + ?Sized>(
    rng: &mut R,
    point: Point,
    center: Point,
    radius: f32,
    span_x: f32,
    span_y: f32,
) -> Point {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let start = if dx.abs() > f32::EPSILON || dy.abs() > f32::EPSILON {
        dy.atan2(dx)
    } else {
        rng.random::<f32>() * std::f32::consts::TAU
    };

    let fits = |p: Point| {
        (0.0..=span_x).contains(&p.x)
            && (0.0..=span_y).contains(&p.y)
            && p.distance(center) >= radius
    };

    let step = RING_STEP_DEGREES.to_radians();
    let steps = (180.0 / RING_STEP_DEGREES) as u32;
    for i in 0..=steps {
        for sign in [1.0, -1.0] {
            let angle = start + sign * i as f32 * step;
            let candidate = Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );
            if fits(candidate) {
                return candidate;
            }
        }
    }

    [
        Point::new(0.0, 0.0),
        Point::new(span_x, 0.0),
        Point::new(0.0, span_y),
        Point::new(span_x, span_y),
    ]
    .into_iter()
    .fold(Point::new(0.0, 0.0), |best, corner| {
        if corner.distance(center) > best.distance(center) {
            corner
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_generate_count_and_exclusion() {
        let mut rng = rng();
        let viewport = Viewport::new(1920.0, 1080.0);
        let params = FieldParams::default();
        let objects = generate(&mut rng, &viewport, &params);

        assert_eq!(objects.len(), 30);
        let center = viewport.center();
        for obj in &objects {
            assert!(obj.position().distance(center) >= params.exclusion_radius);
            assert!(obj.x >= 0.0 && obj.x < 1820.0);
            assert!(obj.y >= 0.0 && obj.y < 980.0);
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = rng();
        let objects = generate(&mut rng, &Viewport::new(1280.0, 720.0), &FieldParams::default());
        for (i, obj) in objects.iter().enumerate() {
            assert_eq!(obj.id, i);
        }
    }

    #[test]
    fn test_sizes_match_kind() {
        let mut rng = rng();
        let params = FieldParams {
            count: 500,
            ..FieldParams::default()
        };
        let objects = generate(&mut rng, &Viewport::new(1920.0, 1080.0), &params);
        for obj in &objects {
            let (min, max) = obj.kind().size_range();
            assert!(
                obj.size >= min && obj.size < max,
                "{} size {} outside [{min}, {max})",
                obj.sprite.name,
                obj.size
            );
        }
    }

    #[test]
    fn test_animation_parameters() {
        let mut rng = rng();
        let params = FieldParams {
            count: 200,
            ..FieldParams::default()
        };
        for obj in generate(&mut rng, &Viewport::new(1920.0, 1080.0), &params) {
            assert!((0.0..360.0).contains(&obj.rotation));
            assert!((15.0..40.0).contains(&obj.animation_duration));
            assert!((10.0..30.0).contains(&obj.float_distance));
        }
    }

    #[test]
    fn test_every_sprite_eventually_used() {
        let mut rng = rng();
        let params = FieldParams {
            count: 2000,
            ..FieldParams::default()
        };
        let objects = generate(&mut rng, &Viewport::new(1920.0, 1080.0), &params);
        for sprite in &CATALOG {
            assert!(
                objects.iter().any(|o| std::ptr::eq(o.sprite, sprite)),
                "{} never picked",
                sprite.name
            );
        }
    }

    #[test]
    fn test_tiny_viewport_terminates() {
        let mut rng = rng();
        let viewport = Viewport::new(120.0, 80.0);
        let params = FieldParams {
            max_attempts: 50,
            ..FieldParams::default()
        };
        let objects = generate(&mut rng, &viewport, &params);
        assert_eq!(objects.len(), 30);
        for obj in &objects {
            // Ring does not fit: every object takes the farthest corner.
            assert_eq!(obj.position(), Point::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_ring_fallback_keeps_exclusion_when_ring_fits() {
        let mut rng = StdRng::seed_from_u64(5);
        let viewport = Viewport::new(1000.0, 500.0);
        let params = FieldParams {
            count: 500,
            max_attempts: 1,
            ..FieldParams::default()
        };
        let center = viewport.center();
        for obj in generate(&mut rng, &viewport, &params) {
            let distance = obj.position().distance(center);
            assert!(distance >= 200.0, "object {} at distance {distance}", obj.id);
            assert!(obj.x >= 0.0 && obj.x <= 900.0);
            assert!(obj.y >= 0.0 && obj.y <= 400.0);
        }
    }

    #[test]
    fn test_ring_fallback_walks_into_span() {
        let mut rng = rng();
        // Straight down from the center leaves the span; the walk turns back in.
        let center = Point::new(500.0, 250.0);
        let p = project_onto_ring(&mut rng, Point::new(500.0, 300.0), center, 200.0, 900.0, 400.0);
        assert!(p.distance(center) >= 200.0);
        assert!(p.y <= 400.0);
        assert!((p.distance(center) - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_sample_below_excludes_max() {
        let mut rng = rng();
        for _ in 0..10_000 {
            let v = sample_below(&mut rng, 15.0, 15.000_002);
            assert!((15.0..15.000_002).contains(&v));
        }
        assert_eq!(sample_below(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_ring_fallback_lands_on_ring() {
        let mut rng = rng();
        let center = Point::new(500.0, 500.0);
        let p = project_onto_ring(&mut rng, Point::new(510.0, 500.0), center, 200.0, 900.0, 900.0);
        assert!((p.x - 700.0).abs() < 1e-3);
        assert!((p.y - 500.0).abs() < 1e-3);

        // Exactly on the center picks a random direction.
        let p = project_onto_ring(&mut rng, center, center, 200.0, 900.0, 900.0);
        assert!((p.distance(center) - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_zero_exclusion_accepts_first_sample() {
        let mut rng = rng();
        let params = FieldParams {
            exclusion_radius: 0.0,
            max_attempts: 1,
            ..FieldParams::default()
        };
        let viewport = Viewport::new(400.0, 400.0);
        let p = sample_position(&mut rng, &viewport, &params);
        assert!(p.x < 300.0 && p.y < 300.0);
    }
}
