//! Per-object animation state.
//!
//! Every object carries an explicit animation that is sampled once per frame.
//! While idle it fades in and then floats and spins forever. When the black
//! hole collapses it tweens from wherever it currently is into the center.

use rand::Rng;
use surprise_core::{CubicBezier, Easing, Point};

use crate::object::SpaceObject;

/// Fade/scale-in time for freshly spawned objects.
pub const ENTRANCE_MS: u64 = 500;

/// Shortest collapse tween; each object adds up to a second on top.
pub const MIN_COLLAPSE_MS: f32 = 1500.0;
pub const COLLAPSE_JITTER_MS: f32 = 1000.0;

/// Extra spin gained while being sucked in, in degrees.
const COLLAPSE_SPIN: f32 = 720.0;

/// Offset of an object from its resting place, plus its appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
    /// Absolute rotation in degrees.
    pub rotation: f32,
    pub opacity: f32,
}

impl Transform {
    fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Interpolate towards `to` by eased progress `t`.
    pub fn interpolate(&self, to: &Transform, t: f32) -> Transform {
        Transform {
            dx: Self::lerp(self.dx, to.dx, t),
            dy: Self::lerp(self.dy, to.dy, t),
            scale: Self::lerp(self.scale, to.scale, t),
            rotation: Self::lerp(self.rotation, to.rotation, t),
            opacity: Self::lerp(self.opacity, to.opacity, t),
        }
    }

    /// Whether nothing of the object would show.
    pub fn is_invisible(&self) -> bool {
        self.opacity <= 0.01 || self.scale <= 0.01
    }
}

/// A single-shot interpolation between two transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Transform,
    pub to: Transform,
    pub started_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    /// Linear progress in [0, 1].
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn sample(&self, now_ms: u64) -> Transform {
        let t = self.easing.apply(self.progress(now_ms));
        self.from.interpolate(&self.to, t)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.started_ms.saturating_add(self.duration_ms)
    }
}

/// Animation currently driving an object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectAnimation {
    /// Fade in, then float up and down while turning, forever.
    Idle {
        started_ms: u64,
        base_rotation: f32,
        float_distance: f32,
        /// One float cycle. A full turn takes twice as long.
        period_ms: u64,
    },
    /// Being pulled into the black hole.
    Collapse(Tween),
}

impl ObjectAnimation {
    /// Idle animation for an object spawned at `now_ms`.
    pub fn idle(object: &SpaceObject, now_ms: u64) -> Self {
        ObjectAnimation::Idle {
            started_ms: now_ms,
            base_rotation: object.rotation,
            float_distance: object.float_distance,
            period_ms: (object.animation_duration * 1000.0).max(1.0) as u64,
        }
    }

    /// Sample the transform at `now_ms`.
    pub fn transform_at(&self, now_ms: u64) -> Transform {
        match self {
            ObjectAnimation::Idle {
                started_ms,
                base_rotation,
                float_distance,
                period_ms,
            } => {
                let elapsed = now_ms.saturating_sub(*started_ms);
                let entrance = (elapsed as f32 / ENTRANCE_MS as f32).min(1.0);

                // Keyframes 0 -> -float -> 0, eased per segment.
                let phase = (elapsed % period_ms) as f32 / *period_ms as f32;
                let lift = if phase < 0.5 {
                    Easing::EaseInOut.apply(phase * 2.0)
                } else {
                    1.0 - Easing::EaseInOut.apply((phase - 0.5) * 2.0)
                };

                let spin_period = period_ms * 2;
                let spin = (elapsed % spin_period) as f32 / spin_period as f32;

                Transform {
                    dx: 0.0,
                    dy: -float_distance * lift,
                    scale: entrance,
                    rotation: base_rotation + 360.0 * spin,
                    opacity: entrance,
                }
            }
            ObjectAnimation::Collapse(tween) => tween.sample(now_ms),
        }
    }

    pub fn is_collapsing(&self) -> bool {
        matches!(self, ObjectAnimation::Collapse(_))
    }

    /// Whether a collapse has run to completion.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        match self {
            ObjectAnimation::Idle { .. } => false,
            ObjectAnimation::Collapse(tween) => tween.is_finished(now_ms),
        }
    }
}

/// A space object together with the animation driving it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedObject {
    pub object: SpaceObject,
    pub animation: ObjectAnimation,
}

impl AnimatedObject {
    /// Wrap a freshly generated object, entering at `now_ms`.
    pub fn new(object: SpaceObject, now_ms: u64) -> Self {
        let animation = ObjectAnimation::idle(&object, now_ms);
        Self { object, animation }
    }

    /// Start sucking the object into `center`, picking up from its current
    /// transform. Calling it twice keeps the running collapse.
    pub fn collapse<R: Rng + ?Sized>(&mut self, rng: &mut R, center: Point, now_ms: u64) {
        if self.animation.is_collapsing() {
            return;
        }
        let from = self.animation.transform_at(now_ms);
        let origin = self.object.center();
        let to = Transform {
            dx: center.x - origin.x,
            dy: center.y - origin.y,
            scale: 0.0,
            rotation: self.object.rotation + COLLAPSE_SPIN,
            opacity: 0.0,
        };
        let duration_ms = (MIN_COLLAPSE_MS + rng.random::<f32>() * COLLAPSE_JITTER_MS) as u64;

        self.animation = ObjectAnimation::Collapse(Tween {
            from,
            to,
            started_ms: now_ms,
            duration_ms,
            easing: Easing::Bezier(CubicBezier::EASE),
        });
    }

    pub fn transform_at(&self, now_ms: u64) -> Transform {
        self.animation.transform_at(now_ms)
    }

    /// Where the object's center is drawn at `now_ms`.
    pub fn position_at(&self, now_ms: u64) -> Point {
        let t = self.transform_at(now_ms);
        let c = self.object.center();
        Point::new(c.x + t.dx, c.y + t.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn object() -> SpaceObject {
        SpaceObject {
            id: 0,
            x: 100.0,
            y: 100.0,
            size: 40.0,
            rotation: 30.0,
            animation_duration: 20.0,
            float_distance: 20.0,
            sprite: &CATALOG[4],
        }
    }

    #[test]
    fn test_entrance_fades_in() {
        let anim = AnimatedObject::new(object(), 1_000);
        let start = anim.transform_at(1_000);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.scale, 0.0);

        let half = anim.transform_at(1_250);
        assert!((half.opacity - 0.5).abs() < 1e-6);

        let done = anim.transform_at(2_000);
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.scale, 1.0);
    }

    #[test]
    fn test_float_peaks_mid_cycle() {
        let anim = AnimatedObject::new(object(), 0);
        assert!(anim.transform_at(0).dy.abs() < 1e-6);
        assert!((anim.transform_at(10_000).dy + 20.0).abs() < 1e-3);
        assert!(anim.transform_at(20_000).dy.abs() < 1e-3);
        // Never floats further than its distance.
        for ms in (0..40_000).step_by(250) {
            let dy = anim.transform_at(ms).dy;
            assert!((-20.001..=0.001).contains(&dy));
        }
    }

    #[test]
    fn test_spin_takes_twice_the_float_period() {
        let anim = AnimatedObject::new(object(), 0);
        assert!((anim.transform_at(0).rotation - 30.0).abs() < 1e-4);
        assert!((anim.transform_at(20_000).rotation - 210.0).abs() < 1e-3);
    }

    #[test]
    fn test_collapse_ends_in_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut anim = AnimatedObject::new(object(), 0);
        let center = Point::new(500.0, 300.0);
        anim.collapse(&mut rng, center, 5_000);

        assert!(anim.animation.is_collapsing());
        assert!(!anim.animation.is_finished(5_000));

        let ObjectAnimation::Collapse(tween) = &anim.animation else {
            panic!("expected collapse");
        };
        assert!((1_500..2_500).contains(&tween.duration_ms));

        let end = 5_000 + tween.duration_ms;
        assert!(anim.animation.is_finished(end));
        let t = anim.transform_at(end);
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.scale, 0.0);
        assert!((t.rotation - 750.0).abs() < 1e-3);
        let p = anim.position_at(end);
        assert!((p.x - 500.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!(t.is_invisible());
    }

    #[test]
    fn test_collapse_starts_from_current_transform() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut anim = AnimatedObject::new(object(), 0);
        let before = anim.transform_at(10_000);
        anim.collapse(&mut rng, Point::new(0.0, 0.0), 10_000);
        assert_eq!(anim.transform_at(10_000), before);
    }

    #[test]
    fn test_second_collapse_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut anim = AnimatedObject::new(object(), 0);
        anim.collapse(&mut rng, Point::new(0.0, 0.0), 1_000);
        let first = anim.animation.clone();
        anim.collapse(&mut rng, Point::new(50.0, 50.0), 1_500);
        assert_eq!(anim.animation, first);
    }

    #[test]
    fn test_zero_length_tween_is_complete() {
        let t = Transform {
            dx: 0.0,
            dy: 0.0,
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
        };
        let tween = Tween {
            from: t,
            to: Transform { opacity: 0.0, ..t },
            started_ms: 10,
            duration_ms: 0,
            easing: Easing::Linear,
        };
        assert_eq!(tween.sample(10).opacity, 0.0);
    }
}
