//! Starfield state management and rendering.

use rand::Rng;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use surprise_core::{AnimationSpeed, Mode, Viewport};

use crate::chars::star_char;
use crate::particle::{self, Particle};

/// The background field of stars.
#[derive(Debug, Clone)]
pub struct Starfield {
    /// Current particle batch.
    particles: Vec<Particle>,
    /// Surface the batch was created for.
    viewport: Viewport,
}

impl Starfield {
    /// Create a field of `count` stars covering `viewport`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, count: usize) -> Self {
        Self {
            particles: particle::initialize(rng, viewport.width, viewport.height, count),
            viewport,
        }
    }

    /// Replace the batch with a fresh one for new dimensions.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, count: usize) {
        log::debug!(
            "reinitializing {count} stars for {}x{}",
            viewport.width,
            viewport.height
        );
        self.particles = particle::initialize(rng, viewport.width, viewport.height, count);
        self.viewport = viewport;
    }

    /// Step every star by one frame.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, mode: Mode, speed: AnimationSpeed) {
        particle::advance(
            rng,
            &mut self.particles,
            mode,
            self.viewport.center(),
            &self.viewport,
            speed.twinkle_scale(),
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Clear `area` and redraw every visible star.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let height = area.height as usize;

        // Brightest star per cell wins.
        let mut cells: Vec<Option<(char, f32)>> = vec![None; width * height];
        for p in &self.particles {
            let Some(ch) = star_char(p.radius) else {
                continue;
            };
            let Some((col, row)) = self.viewport.cell_at(p.position()) else {
                continue;
            };
            let (col, row) = (col as usize, row as usize);
            if col >= width || row >= height {
                continue;
            }
            let slot = &mut cells[row * width + col];
            let brighter = match *slot {
                Some((_, opacity)) => p.opacity > opacity,
                None => true,
            };
            if brighter {
                *slot = Some((ch, p.opacity));
            }
        }

        let lines: Vec<Line> = cells
            .chunks(width)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some((ch, opacity)) => {
                            Span::styled(ch.to_string(), Style::new().fg(star_color(*opacity)))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Full-brightness star color, a cool white-blue.
const STAR_TINT: (f32, f32, f32) = (220.0, 232.0, 255.0);

/// Star tint faded against a black sky.
fn star_color(opacity: f32) -> Color {
    let a = opacity.clamp(0.0, 1.0);
    let (r, g, b) = STAR_TINT;
    Color::Rgb((r * a) as u8, (g * a) as u8, (b * a) as u8)
}
