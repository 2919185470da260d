//! Sprite catalog.

use ratatui::style::Color;

/// Broad category of a sprite. Only used to pick a size range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Asteroid,
    Planet,
    Stars,
    Sun,
    Satellite,
    Ufo,
}

impl SpriteKind {
    /// Size range `[min, max)` in surface units.
    pub fn size_range(self) -> (f32, f32) {
        match self {
            SpriteKind::Asteroid => (15.0, 30.0),
            SpriteKind::Stars => (20.0, 50.0),
            SpriteKind::Planet => (40.0, 60.0),
            SpriteKind::Sun => (60.0, 90.0),
            SpriteKind::Satellite | SpriteKind::Ufo => (30.0, 50.0),
        }
    }
}

/// A decorative sprite.
#[derive(Debug, PartialEq)]
pub struct Sprite {
    pub name: &'static str,
    pub kind: SpriteKind,
    /// Glyphs cycled through as the sprite rotates.
    pub frames: &'static [char],
    /// Optional 3-row art for large sprites; `@` marks the rotating glyph.
    pub art: Option<[&'static str; 3]>,
    pub color: Color,
}

impl Sprite {
    /// Glyph to show at a rotation in degrees.
    pub fn glyph(&self, rotation: f32) -> char {
        let turns = (rotation / 360.0).rem_euclid(1.0);
        let idx = ((turns * self.frames.len() as f32) as usize).min(self.frames.len() - 1);
        self.frames[idx]
    }
}

const ROUND_ART: [&str; 3] = [" .-. ", "( @ )", " '-' "];
const RINGED_ART: [&str; 3] = ["  _  ", "=(@)=", "  ‾  "];
const SUN_ART: [&str; 3] = [" \\|/ ", "--@--", " /|\\ "];

/// Every sprite the field can spawn.
pub static CATALOG: [Sprite; 16] = [
    Sprite {
        name: "Asteroid-1",
        kind: SpriteKind::Asteroid,
        frames: &['◆', '◇'],
        art: None,
        color: Color::Rgb(150, 130, 110),
    },
    Sprite {
        name: "Asteroid-2",
        kind: SpriteKind::Asteroid,
        frames: &['▲', '▶', '▼', '◀'],
        art: None,
        color: Color::Rgb(130, 115, 100),
    },
    Sprite {
        name: "Asteroid-3",
        kind: SpriteKind::Asteroid,
        frames: &['◈'],
        art: None,
        color: Color::Rgb(170, 150, 125),
    },
    Sprite {
        name: "Asteroid",
        kind: SpriteKind::Asteroid,
        frames: &['■', '◆'],
        art: None,
        color: Color::Rgb(120, 110, 105),
    },
    Sprite {
        name: "Earth",
        kind: SpriteKind::Planet,
        frames: &['◉'],
        art: Some(ROUND_ART),
        color: Color::Rgb(60, 140, 220),
    },
    Sprite {
        name: "Mars",
        kind: SpriteKind::Planet,
        frames: &['●'],
        art: Some(ROUND_ART),
        color: Color::Rgb(205, 85, 50),
    },
    Sprite {
        name: "Moon",
        kind: SpriteKind::Planet,
        frames: &['◐', '◓', '◑', '◒'],
        art: Some(ROUND_ART),
        color: Color::Rgb(205, 205, 195),
    },
    Sprite {
        name: "Satellite",
        kind: SpriteKind::Satellite,
        frames: &['╪', '╬', '╫', '┼'],
        art: None,
        color: Color::Rgb(185, 185, 205),
    },
    Sprite {
        name: "Saturn",
        kind: SpriteKind::Planet,
        frames: &['ø', 'Ø'],
        art: Some(RINGED_ART),
        color: Color::Rgb(225, 195, 125),
    },
    Sprite {
        name: "Stars-1",
        kind: SpriteKind::Stars,
        frames: &['✦', '✧'],
        art: None,
        color: Color::Rgb(255, 240, 160),
    },
    Sprite {
        name: "Stars-2",
        kind: SpriteKind::Stars,
        frames: &['✶', '✷'],
        art: None,
        color: Color::Rgb(255, 225, 130),
    },
    Sprite {
        name: "Stars-3",
        kind: SpriteKind::Stars,
        frames: &['✸', '✹'],
        art: None,
        color: Color::Rgb(255, 210, 110),
    },
    Sprite {
        name: "Stars",
        kind: SpriteKind::Stars,
        frames: &['★', '☆'],
        art: None,
        color: Color::Rgb(255, 235, 150),
    },
    Sprite {
        name: "Sun",
        kind: SpriteKind::Sun,
        frames: &['☼', '✺'],
        art: Some(SUN_ART),
        color: Color::Rgb(255, 200, 50),
    },
    Sprite {
        name: "Ufo-1",
        kind: SpriteKind::Ufo,
        frames: &['⊖', '⊕'],
        art: None,
        color: Color::Rgb(120, 255, 120),
    },
    Sprite {
        name: "Ufo",
        kind: SpriteKind::Ufo,
        frames: &['⊜', '⊝'],
        art: None,
        color: Color::Rgb(150, 255, 200),
    },
];
