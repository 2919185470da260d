//! Character constants for the starfield.

/// Star glyphs, smallest to largest.
pub const STAR_CHARS: &[char] = &['·', '+', '*', '✦'];

/// Radius at which each glyph in [`STAR_CHARS`] stops being used.
const RADIUS_STEPS: &[f32] = &[0.5, 0.9, 1.25];

/// Pick the glyph for a star radius. Zero-radius stars are invisible.
pub fn star_char(radius: f32) -> Option<char> {
    if radius <= 0.0 {
        return None;
    }
    let idx = RADIUS_STEPS
        .iter()
        .position(|&step| radius < step)
        .unwrap_or(STAR_CHARS.len() - 1);
    Some(STAR_CHARS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_char() {
        assert_eq!(star_char(0.0), None);
        assert_eq!(star_char(0.1), Some('·'));
        assert_eq!(star_char(0.7), Some('+'));
        assert_eq!(star_char(1.0), Some('*'));
        assert_eq!(star_char(1.49), Some('✦'));
    }
}
