//! # Text scramble
//!
//! Reveals a string left to right on a fixed tick, showing random glyphs in
//! the positions not yet resolved. Whitespace never scrambles.

use rand::Rng;

/// Glyph pool for unresolved positions.
pub const GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '@', '#', '$', '%', '&',
];

/// Interval between ticks.
pub const TICK_MS: u32 = 30;

/// Default time to resolve the whole string.
pub const DEFAULT_DURATION_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    target: Vec<char>,
    total_steps: usize,
}

impl Scramble {
    pub fn new(text: &str, duration_ms: u32) -> Self {
        let target: Vec<char> = text.chars().collect();
        let len = target.len();
        let total_steps = if len == 0 {
            0
        } else {
            let ticks = (duration_ms as f64 / TICK_MS as f64 / len as f64).ceil();
            let steps_per_char = (ticks as usize).max(1);
            len * steps_per_char
        };
        Self { target, total_steps }
    }

    /// Ticks until the string is fully resolved.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_done(&self, step: usize) -> bool {
        step >= self.total_steps
    }

    pub fn final_text(&self) -> String {
        self.target.iter().collect()
    }

    /// Number of leading positions showing their real character at `step`.
    pub fn resolved(&self, step: usize) -> usize {
        if self.is_done(step) {
            return self.target.len();
        }
        step * self.target.len() / self.total_steps
    }

    /// Whether any tick would show glyphs. False under reduced motion and for
    /// blank text.
    pub fn animates(&self, reduced_motion: bool) -> bool {
        !reduced_motion && self.target.iter().any(|c| !c.is_whitespace())
    }

    /// Text to show at `step`; from [`Self::total_steps`] on, and at every
    /// step under reduced motion, it is the target.
    pub fn frame<R: Rng + ?Sized>(
        &self,
        step: usize,
        reduced_motion: bool,
        rng: &mut R,
    ) -> String {
        if reduced_motion || self.is_done(step) {
            return self.final_text();
        }
        let resolved = self.resolved(step);
        self.target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c.is_whitespace() || i < resolved {
                    c
                } else {
                    GLYPHS[rng.gen_range(0..GLYPHS.len())]
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_step_count() {
        // 800ms / 30ms / 7 chars = 3.8 -> 4 ticks per char.
        let scramble = Scramble::new("Join Us", 800);
        assert_eq!(scramble.total_steps(), 28);

        // Never fewer than one tick per char.
        assert_eq!(Scramble::new("Infrastructure", 30).total_steps(), 14);
    }

    #[test]
    fn test_whitespace_is_preserved_every_tick() {
        let text = "Join Us\tNow  ok";
        let scramble = Scramble::new(text, 800);
        let mut rng = StdRng::seed_from_u64(42);
        for step in 0..=scramble.total_steps() {
            let frame: Vec<char> = scramble.frame(step, false, &mut rng).chars().collect();
            assert_eq!(frame.len(), text.chars().count());
            for (shown, original) in frame.iter().zip(text.chars()) {
                assert_eq!(shown.is_whitespace(), original.is_whitespace());
                if original.is_whitespace() {
                    assert_eq!(*shown, original);
                }
            }
        }
    }

    #[test]
    fn test_resolves_left_to_right() {
        let scramble = Scramble::new("Mission", 800);
        let mut rng = StdRng::seed_from_u64(1);
        let mut last = 0;
        for step in 0..scramble.total_steps() {
            let resolved = scramble.resolved(step);
            assert!(resolved >= last);
            last = resolved;
            let frame: Vec<char> = scramble.frame(step, false, &mut rng).chars().collect();
            for (i, c) in "Mission".chars().enumerate().take(resolved) {
                assert_eq!(frame[i], c);
            }
            for c in frame.iter().skip(resolved) {
                assert!(GLYPHS.contains(c));
            }
        }
    }

    #[test]
    fn test_ends_on_target() {
        let scramble = Scramble::new("Divisions", 800);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble.frame(scramble.total_steps(), false, &mut rng), "Divisions");
        assert_eq!(scramble.frame(usize::MAX, false, &mut rng), "Divisions");
    }

    #[test]
    fn test_empty_text() {
        let scramble = Scramble::new("", 800);
        assert!(scramble.is_done(0));
        assert_eq!(scramble.frame(0, false, &mut StdRng::seed_from_u64(0)), "");
    }

    #[test]
    fn test_reduced_motion_never_shows_glyphs() {
        let scramble = Scramble::new("Join Us", 800);
        assert!(scramble.animates(false));
        assert!(!scramble.animates(true));
        let mut rng = StdRng::seed_from_u64(9);
        for step in 0..=scramble.total_steps() {
            assert_eq!(scramble.frame(step, true, &mut rng), "Join Us");
        }
    }

    #[test]
    fn test_blank_text_does_not_animate() {
        assert!(!Scramble::new("   ", 800).animates(false));
        assert!(!Scramble::new("", 800).animates(false));
    }
}
