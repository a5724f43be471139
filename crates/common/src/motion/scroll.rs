//! Scroll- and pointer-driven helpers: navbar auto-hide, the mission
//! statement's word-by-word fade, and the interest-group row tilt.

/// Scroll delta that counts as intentional movement.
const SCROLL_JITTER: f64 = 5.0;

/// Above this offset the navbar is always shown.
const TOP_ZONE: f64 = 80.0;

/// Tracks scroll direction to hide the navbar on the way down and bring it
/// back on the way up.
///
/// Each event is compared with the previous one only, so slow scrolling in
/// steps below the jitter threshold never changes the state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavScroll {
    last_y: f64,
    hidden: bool,
}

impl NavScroll {
    /// Feeds the new scroll offset and returns whether the navbar is hidden.
    pub fn update(&mut self, y: f64) -> bool {
        let diff = y - self.last_y;
        if y < TOP_ZONE || diff < -SCROLL_JITTER {
            self.hidden = false;
        } else if diff > SCROLL_JITTER {
            self.hidden = true;
        }
        self.last_y = y;
        self.hidden
    }
}

/// Progress through a section's scroll range, `0.0..=1.0`.
///
/// Zero when the section top reaches `start` (fraction of viewport height),
/// one when its bottom reaches `end`.
pub fn section_progress(top: f64, height: f64, viewport: f64, start: f64, end: f64) -> f64 {
    let start_line = viewport * start;
    let span = height + start_line - viewport * end;
    if span <= 0.0 {
        return if top <= start_line { 1.0 } else { 0.0 };
    }
    ((start_line - top) / span).clamp(0.0, 1.0)
}

/// Opacity of word `index` of `total` for the given section progress.
///
/// Each word fades from 0.15 to 1 over a window of `1.5 / total` starting at
/// `index / total`.
pub fn word_opacity(index: usize, total: usize, progress: f64, reduced_motion: bool) -> f64 {
    if reduced_motion || total == 0 {
        return 1.0;
    }
    let total = total as f64;
    let start = index as f64 / total;
    let end = (start + 1.5 / total).min(1.0);
    let t = if end > start {
        ((progress - start) / (end - start)).clamp(0.0, 1.0)
    } else if progress >= start {
        1.0
    } else {
        0.0
    };
    0.15 + t * 0.85
}

/// `transform` tilting a row toward the pointer.
pub fn tilt_transform(pointer: (f64, f64), rect: (f64, f64, f64, f64)) -> String {
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return rest_transform().to_string();
    }
    let normal_x = (pointer.0 - (left + width / 2.0)) / (width / 2.0);
    let normal_y = (pointer.1 - (top + height / 2.0)) / (height / 2.0);
    format!(
        "rotateY({}deg) rotateX({}deg)",
        normal_x * 2.0,
        0.0 - normal_y * 1.5
    )
}

pub fn rest_transform() -> &'static str {
    "rotateY(0deg) rotateX(0deg)"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_hides_on_scroll_down() {
        let mut nav = NavScroll::default();
        assert!(!nav.update(40.0));
        assert!(nav.update(200.0));
        // Tiny jitter keeps the current state.
        assert!(nav.update(203.0));
        assert!(!nav.update(150.0));
        assert!(nav.update(400.0));
        // Near the top it always shows.
        assert!(!nav.update(60.0));
    }

    #[test]
    fn test_slow_scroll_keeps_state() {
        let mut nav = NavScroll::default();
        assert!(nav.update(300.0));
        assert!(!nav.update(200.0));
        let mut y = 200.0;
        for _ in 0..10 {
            y += 3.0;
            assert!(!nav.update(y), "hidden at {}", y);
        }

        // The same holds on the way up while hidden.
        let mut y = 400.0;
        assert!(nav.update(y));
        for _ in 0..10 {
            y -= 3.0;
            assert!(nav.update(y), "shown at {}", y);
        }
    }

    #[test]
    fn test_section_progress() {
        // 1000px viewport, 600px section: starts at top=350, ends at top=-150.
        assert_eq!(section_progress(800.0, 600.0, 1000.0, 0.35, 0.45), 0.0);
        assert_eq!(section_progress(350.0, 600.0, 1000.0, 0.35, 0.45), 0.0);
        assert!((section_progress(100.0, 600.0, 1000.0, 0.35, 0.45) - 0.5).abs() < 1e-12);
        assert_eq!(section_progress(-400.0, 600.0, 1000.0, 0.35, 0.45), 1.0);
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_word_opacity() {
        assert!(approx(word_opacity(0, 10, 0.0, false), 0.15));
        assert!(approx(word_opacity(0, 10, 1.0, false), 1.0));
        assert!(approx(word_opacity(9, 10, 0.5, false), 0.15));
        assert!(approx(word_opacity(9, 10, 1.0, false), 1.0));
        assert_eq!(word_opacity(3, 10, 0.0, true), 1.0);
    }

    #[test]
    fn test_tilt() {
        let centre = tilt_transform((50.0, 25.0), (0.0, 0.0, 100.0, 50.0));
        assert_eq!(centre, "rotateY(0deg) rotateX(0deg)");
        let corner = tilt_transform((100.0, 0.0), (0.0, 0.0, 100.0, 50.0));
        assert_eq!(corner, "rotateY(2deg) rotateX(1.5deg)");
    }
}
