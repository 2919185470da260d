//! Easing curves for tweened animations.

/// A CSS-style cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Standard `ease` curve, used for the collapse.
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

    /// Standard `ease-in-out` curve.
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    fn component(p1: f32, p2: f32, u: f32) -> f32 {
        // Bernstein form with p0 = 0 and p3 = 1.
        let inv = 1.0 - u;
        3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
    }

    fn component_slope(p1: f32, p2: f32, u: f32) -> f32 {
        let inv = 1.0 - u;
        3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
    }

    /// Eased progress for a linear progress `t` in [0, 1].
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // Newton first, it converges in a handful of steps for sane curves.
        let mut u = t;
        for _ in 0..8 {
            let err = Self::component(self.x1, self.x2, u) - t;
            if err.abs() < 1e-5 {
                return Self::component(self.y1, self.y2, u);
            }
            let slope = Self::component_slope(self.x1, self.x2, u);
            if slope.abs() < 1e-6 {
                break;
            }
            u -= err / slope;
        }

        // Bisection fallback.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        u = t;
        for _ in 0..32 {
            let x = Self::component(self.x1, self.x2, u);
            if (x - t).abs() < 1e-5 {
                break;
            }
            if x < t {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) / 2.0;
        }
        Self::component(self.y1, self.y2, u)
    }
}

/// Easing applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
    Bezier(CubicBezier),
}

impl Easing {
    /// Map linear progress in [0, 1] onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => CubicBezier::EASE_IN_OUT.sample(t),
            Easing::Bezier(curve) => curve.sample(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseInOut,
            Easing::Bezier(CubicBezier::EASE),
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3);
        let a = Easing::EaseInOut.apply(0.2);
        let b = Easing::EaseInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-3);
        assert!(a < 0.2);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = CubicBezier::EASE.sample(i as f32 / 100.0);
            assert!(v >= prev - 1e-4, "curve went backwards at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_ease_front_loads_progress() {
        // The `ease` curve is fast early and settles late.
        assert!(CubicBezier::EASE.sample(0.5) > 0.7);
    }
}
