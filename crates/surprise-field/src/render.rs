//! Drawing space objects on top of the starfield.

use ratatui::{Frame, layout::Rect, style::Color};
use surprise_core::Viewport;

use crate::animation::AnimatedObject;
use crate::color::fade;

/// Objects scaled below this draw as a single dot.
const DOT_SCALE: f32 = 0.35;

/// Scaled size from which sprites with art draw their full 3-row art.
const ART_SIZE: f32 = 40.0;

/// Overwrite one cell relative to `area`, ignoring anything off-screen.
pub(crate) fn put_cell(frame: &mut Frame, area: Rect, col: u16, row: u16, ch: char, color: Color) {
    if col >= area.width || row >= area.height {
        return;
    }
    let x = area.x.saturating_add(col);
    let y = area.y.saturating_add(row);
    if let Some(cell) = frame.buffer_mut().cell_mut((x, y)) {
        cell.set_char(ch).set_fg(color);
    }
}

/// Draw every object at its animated position for `now_ms`.
pub fn render_objects(
    frame: &mut Frame,
    area: Rect,
    viewport: &Viewport,
    objects: &[AnimatedObject],
    now_ms: u64,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    for animated in objects {
        let transform = animated.transform_at(now_ms);
        if transform.is_invisible() {
            continue;
        }
        let Some((col, row)) = viewport.cell_at(animated.position_at(now_ms)) else {
            continue;
        };

        let sprite = animated.object.sprite;
        let color = fade(sprite.color, transform.opacity);

        if transform.scale < DOT_SCALE {
            put_cell(frame, area, col, row, '·', color);
            continue;
        }

        let glyph = sprite.glyph(transform.rotation);
        match sprite.art {
            Some(art) if animated.object.size * transform.scale >= ART_SIZE => {
                for (dy, line) in art.iter().enumerate() {
                    let half = line.chars().count() as i32 / 2;
                    for (dx, ch) in line.chars().enumerate() {
                        if ch == ' ' {
                            continue;
                        }
                        let ch = if ch == '@' { glyph } else { ch };
                        let c = col as i32 + dx as i32 - half;
                        let r = row as i32 + dy as i32 - 1;
                        if c >= 0 && r >= 0 {
                            put_cell(frame, area, c as u16, r as u16, ch, color);
                        }
                    }
                }
            }
            _ => put_cell(frame, area, col, row, glyph, color),
        }
    }
}
