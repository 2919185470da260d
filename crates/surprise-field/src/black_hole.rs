//! The black hole at the center of the scene.

use ratatui::{Frame, layout::Rect, style::Color};
use surprise_core::{AnimationSpeed, Easing, Mode, Point, Viewport};

use crate::color::{fade, hsl_to_rgb};
use crate::render::put_cell;

/// Radius of the disc at scale 1, in surface units.
pub const BLACK_HOLE_RADIUS: f32 = 125.0;

/// One pulse while collapsing.
const COLLAPSE_PULSE_MS: u64 = 2000;
/// The collapse pulse plays this many times, then holds.
const COLLAPSE_PULSES: u64 = 2;

/// Idle pulse length.
const IDLE_PULSE_MS: u64 = 8000;

const IDLE_SCALE: [f32; 3] = [1.0, 1.1, 1.0];
const COLLAPSE_SCALE: [f32; 3] = [1.0, 1.5, 1.2];

/// Sample evenly spaced keyframes at progress `t`, easing each segment.
fn keyframes(values: &[f32; 3], t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let (a, b, local) = if t < 0.5 {
        (values[0], values[1], t * 2.0)
    } else {
        (values[1], values[2], (t - 0.5) * 2.0)
    };
    a + (b - a) * easing.apply(local)
}

/// Pulsing, spinning accretion disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHole {
    mode: Mode,
    /// When the current mode began.
    since_ms: u64,
}

impl BlackHole {
    pub fn new(now_ms: u64) -> Self {
        Self {
            mode: Mode::Idle,
            since_ms: now_ms,
        }
    }

    /// Follow a scene mode change.
    pub fn set_mode(&mut self, mode: Mode, now_ms: u64) {
        if self.mode != mode {
            self.mode = mode;
            self.since_ms = now_ms;
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Disc scale at `now_ms`.
    pub fn scale_at(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.since_ms);
        match self.mode {
            Mode::Idle => {
                let t = (elapsed % IDLE_PULSE_MS) as f32 / IDLE_PULSE_MS as f32;
                keyframes(&IDLE_SCALE, t, Easing::Linear)
            }
            Mode::Collapsing => {
                if elapsed >= COLLAPSE_PULSE_MS * COLLAPSE_PULSES {
                    return COLLAPSE_SCALE[2];
                }
                let t = (elapsed % COLLAPSE_PULSE_MS) as f32 / COLLAPSE_PULSE_MS as f32;
                keyframes(&COLLAPSE_SCALE, t, Easing::EaseInOut)
            }
        }
    }

    /// Disc rotation in degrees at `now_ms`.
    pub fn rotation_at(&self, now_ms: u64, speed: AnimationSpeed) -> f32 {
        let elapsed = now_ms.saturating_sub(self.since_ms);
        match self.mode {
            Mode::Idle => {
                let period = speed.black_hole_rotation_period_ms();
                360.0 * (elapsed % period) as f32 / period as f32
            }
            Mode::Collapsing => {
                if elapsed >= COLLAPSE_PULSE_MS * COLLAPSE_PULSES {
                    return 0.0;
                }
                let t = (elapsed % COLLAPSE_PULSE_MS) as f32 / COLLAPSE_PULSE_MS as f32;
                360.0 * Easing::EaseInOut.apply(t)
            }
        }
    }

    /// Brightness multiplier for the disc colors.
    fn glow(&self) -> f32 {
        match self.mode {
            Mode::Idle => 0.6,
            Mode::Collapsing => 0.9,
        }
    }

    /// Draw the disc centered on the viewport.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        viewport: &Viewport,
        now_ms: u64,
        speed: AnimationSpeed,
    ) {
        if area.width == 0 || area.height == 0 || viewport.is_empty() {
            return;
        }

        let center = viewport.center();
        let radius = BLACK_HOLE_RADIUS * self.scale_at(now_ms);
        let halo = if self.mode.is_collapsing() { 1.25 } else { 1.0 };
        let reach = radius * halo;
        let spin = self.rotation_at(now_ms, speed).to_radians();
        let glow = self.glow();

        let first_col = ((center.x - reach) / viewport.cell_width).floor().max(0.0) as u16;
        let last_col = ((center.x + reach) / viewport.cell_width).ceil() as u16;
        let first_row = ((center.y - reach) / viewport.cell_height).floor().max(0.0) as u16;
        let last_row = ((center.y + reach) / viewport.cell_height).ceil() as u16;

        for row in first_row..=last_row.min(area.height.saturating_sub(1)) {
            for col in first_col..=last_col.min(area.width.saturating_sub(1)) {
                let cell_center = Point::new(
                    (col as f32 + 0.5) * viewport.cell_width,
                    (row as f32 + 0.5) * viewport.cell_height,
                );
                let dx = cell_center.x - center.x;
                let dy = cell_center.y - center.y;
                let r = (dx * dx + dy * dy).sqrt() / radius;
                if r >= halo {
                    continue;
                }

                // Spiral arms turning with the disc.
                let angle = dy.atan2(dx) + spin;
                let swirl = (angle * 3.0 + r * 6.0).sin() * 0.5 + 0.5;

                if let Some((ch, color)) = disc_cell(r, swirl, glow) {
                    put_cell(frame, area, col, row, ch, color);
                }
            }
        }
    }
}

/// Glyph and color for a point at normalized radius `r` of the disc.
fn disc_cell(r: f32, swirl: f32, glow: f32) -> Option<(char, Color)> {
    let shimmer = 0.75 + swirl * 0.25;
    if r < 0.2 {
        // Event horizon: paint it empty so stars behind it disappear.
        Some((' ', Color::Rgb(0, 0, 0)))
    } else if r < 0.3 {
        Some(('░', fade(Color::Rgb(34, 34, 34), glow + 0.1)))
    } else if r < 0.5 {
        let ch = if swirl > 0.5 { '▓' } else { '▒' };
        Some((ch, fade(hsl_to_rgb(261.0 + swirl * 10.0, 1.0, 0.5), glow * shimmer)))
    } else if r < 0.7 {
        let ch = if swirl > 0.6 { '▒' } else { '░' };
        Some((ch, fade(hsl_to_rgb(39.0 - swirl * 8.0, 1.0, 0.5), glow * shimmer)))
    } else if r < 0.9 {
        let ch = if swirl > 0.5 { '·' } else { ' ' };
        if ch == ' ' {
            return None;
        }
        Some((ch, fade(Color::Rgb(255, 255, 255), (glow - 0.3) * shimmer)))
    } else if swirl > 0.7 {
        // Outer glow, only visible while collapsing.
        Some(('·', fade(Color::Rgb(255, 165, 0), glow * shimmer)))
    } else {
        None
    }
}
