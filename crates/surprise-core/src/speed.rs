//! Global animation speed.

use serde::{Deserialize, Serialize};

/// Animation speed preset, cycled from the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier applied to each star's per-frame opacity step.
    pub fn twinkle_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Time for one full turn of the idle black hole.
    pub fn black_hole_rotation_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 12_000,
            AnimationSpeed::Medium => 8_000,
            AnimationSpeed::Fast => 4_000,
        }
    }

    /// Label shown in the help bar.
    pub fn name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let start = AnimationSpeed::Slow;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_medium_keeps_twinkle_rate() {
        assert_eq!(AnimationSpeed::Medium.twinkle_scale(), 1.0);
        assert!(AnimationSpeed::Fast.twinkle_scale() > AnimationSpeed::Slow.twinkle_scale());
    }
}
