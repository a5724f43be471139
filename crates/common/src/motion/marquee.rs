//! # Marquee track
//!
//! A CSS keyframe animation slides the track by one loop width (the content
//! is rendered twice) over a fixed duration. Hover and touch pause it in
//! place; dragging takes over the position entirely. On release the
//! animation is restarted with a negative delay chosen so that its first
//! frame lands exactly where the drag left the track.

/// Which way the content travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeDirection {
    /// Content moves to the left (`translateX` 0 to -loop).
    #[default]
    Forward,
    /// Content moves to the right (`translateX` -loop to 0).
    Reverse,
}

impl MarqueeDirection {
    /// CSS `animation-direction` value.
    pub fn css(self) -> &'static str {
        match self {
            MarqueeDirection::Forward => "normal",
            MarqueeDirection::Reverse => "reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin_x: f64,
    origin_offset: f64,
    offset: f64,
}

/// Position bookkeeping for one marquee track.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeTrack {
    loop_width: f64,
    duration_s: f64,
    direction: MarqueeDirection,
    drag_factor: f64,
    hovered: bool,
    touched: bool,
    drag: Option<Drag>,
}

impl MarqueeTrack {
    pub fn new(duration_s: f64, direction: MarqueeDirection) -> Self {
        Self {
            loop_width: 0.0,
            duration_s,
            direction,
            drag_factor: 1.0,
            hovered: false,
            touched: false,
            drag: None,
        }
    }

    /// Pixels the track moves per pixel of pointer movement.
    pub fn with_drag_factor(mut self, factor: f64) -> Self {
        self.drag_factor = factor;
        self
    }

    /// Width of one copy of the content, measured after layout.
    pub fn set_loop_width(&mut self, width: f64) {
        self.loop_width = width.max(0.0);
    }

    pub fn loop_width(&self) -> f64 {
        self.loop_width
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_touched(&mut self, touched: bool) {
        self.touched = touched;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the automatic animation should be held in place.
    pub fn is_paused(&self) -> bool {
        self.hovered || self.touched || self.is_dragging()
    }

    /// CSS `animation-play-state` value.
    pub fn play_state(&self) -> &'static str {
        if self.is_paused() {
            "paused"
        } else {
            "running"
        }
    }

    /// Takes manual control. `visual_offset` is the track's current
    /// `translateX`, read back from the running animation.
    pub fn begin_drag(&mut self, pointer_x: f64, visual_offset: f64) {
        self.drag = Some(Drag {
            origin_x: pointer_x,
            origin_offset: visual_offset,
            offset: visual_offset,
        });
    }

    /// Moves the track with the pointer and returns the `translateX` to
    /// apply, or `None` when no drag is in progress.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<f64> {
        let factor = self.drag_factor;
        let drag = self.drag.as_mut()?;
        drag.offset = drag.origin_offset + (pointer_x - drag.origin_x) * factor;
        Some(drag.offset)
    }

    /// Ends a drag and returns the `animation-delay` (seconds, to be negated
    /// in CSS) that resumes the loop at the dragged position.
    pub fn release(&mut self) -> Option<f64> {
        let drag = self.drag.take()?;
        let delay = self.resume_delay(drag.offset);
        tracing::debug!(
            offset = drag.offset,
            delay,
            "marquee released, resuming from phase"
        );
        Some(delay)
    }

    /// Distance travelled along the loop for a `translateX`, in `[0, loop)`.
    pub fn travelled(&self, offset: f64) -> f64 {
        if self.loop_width <= 0.0 {
            return 0.0;
        }
        let travelled = (-offset).rem_euclid(self.loop_width);
        // rem_euclid can round up to the modulus itself.
        if travelled >= self.loop_width {
            0.0
        } else {
            travelled
        }
    }

    /// Seconds into the animation at which the track sits at `offset`.
    pub fn resume_delay(&self, offset: f64) -> f64 {
        if self.loop_width <= 0.0 || self.duration_s <= 0.0 {
            return 0.0;
        }
        let fraction = self.travelled(offset) / self.loop_width;
        let phase = match self.direction {
            MarqueeDirection::Forward => fraction,
            MarqueeDirection::Reverse => (1.0 - fraction).rem_euclid(1.0),
        };
        phase * self.duration_s
    }

    /// `translateX` the keyframes produce `elapsed_s` into the animation.
    pub fn position_at(&self, elapsed_s: f64) -> f64 {
        if self.duration_s <= 0.0 {
            return 0.0;
        }
        let fraction = elapsed_s.rem_euclid(self.duration_s) / self.duration_s;
        match self.direction {
            MarqueeDirection::Forward => -self.loop_width * fraction,
            MarqueeDirection::Reverse => -self.loop_width * (1.0 - fraction),
        }
    }
}

/// Words of the divider band between home page sections.
pub const DIVIDER_WORDS: &[&str] = &["Research", "Develop", "Ship", "Repeat"];

/// Upper-cased words joined by a middle dot, repeated `repeats` times.
pub fn divider_text(words: &[&str], repeats: usize) -> String {
    let segment: String = words
        .iter()
        .map(|w| format!("{} \u{b7} ", w.to_uppercase()))
        .collect();
    segment.repeat(repeats)
}

/// Inline style of the divider band. The divider always travels in reverse
/// and only runs while visible.
pub fn divider_style(duration_s: f64, running: bool) -> String {
    format!(
        "--marquee-duration: {}s; animation-direction: {}; animation-play-state: {};",
        duration_s,
        MarqueeDirection::Reverse.css(),
        if running { "running" } else { "paused" }
    )
}

/// Horizontal translation encoded in a computed `transform` value.
///
/// Understands `none`, `matrix(a, b, c, d, tx, ty)` and the 16-value
/// `matrix3d(...)` form browsers report for 3-D transforms.
pub fn parse_translate_x(transform: &str) -> Option<f64> {
    let value = transform.trim();
    if value.is_empty() || value == "none" {
        return Some(0.0);
    }

    let (inner, index) = if let Some(rest) = value.strip_prefix("matrix3d(") {
        (rest, 12)
    } else if let Some(rest) = value.strip_prefix("matrix(") {
        (rest, 4)
    } else {
        return None;
    };

    inner
        .trim_end_matches(')')
        .split(',')
        .nth(index)?
        .trim()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_phase(track: &MarqueeTrack, a: f64, b: f64) -> bool {
        let w = track.loop_width();
        let d = (track.travelled(a) - track.travelled(b)).abs();
        d < 1e-6 || (w - d).abs() < 1e-6
    }

    #[test]
    fn test_resume_matches_dragged_position() {
        for direction in [MarqueeDirection::Forward, MarqueeDirection::Reverse] {
            let mut track = MarqueeTrack::new(25.0, direction);
            track.set_loop_width(1200.0);

            for (start, drag) in [(-300.0, -150.0), (-10.0, 480.0), (-1150.0, -900.0), (0.0, 3000.0)] {
                track.begin_drag(500.0, start);
                let offset = track.drag_to(500.0 + drag).unwrap();
                let delay = track.release().unwrap();
                assert!((0.0..25.0).contains(&delay));
                let resumed = track.position_at(delay);
                assert!(
                    same_phase(&track, resumed, offset),
                    "{:?}: resumed at {} but dragged to {}",
                    direction,
                    resumed,
                    offset
                );
            }
        }
    }

    #[test]
    fn test_drag_factor() {
        let mut track = MarqueeTrack::new(20.0, MarqueeDirection::Forward).with_drag_factor(2.0);
        track.set_loop_width(800.0);
        track.begin_drag(100.0, -40.0);
        assert_eq!(track.drag_to(130.0), Some(20.0));
        assert_eq!(track.drag_to(70.0), Some(-100.0));
    }

    #[test]
    fn test_drag_to_without_drag() {
        let mut track = MarqueeTrack::new(20.0, MarqueeDirection::Forward);
        assert_eq!(track.drag_to(10.0), None);
        assert_eq!(track.release(), None);
    }

    #[test]
    fn test_pause_sources() {
        let mut track = MarqueeTrack::new(20.0, MarqueeDirection::Forward);
        assert_eq!(track.play_state(), "running");
        track.set_hovered(true);
        assert!(track.is_paused());
        track.set_hovered(false);
        track.set_touched(true);
        assert_eq!(track.play_state(), "paused");
        track.set_touched(false);
        track.begin_drag(0.0, 0.0);
        assert!(track.is_paused());
        track.release();
        assert!(!track.is_paused());
    }

    #[test]
    fn test_zero_width_is_harmless() {
        let mut track = MarqueeTrack::new(20.0, MarqueeDirection::Forward);
        track.begin_drag(0.0, 0.0);
        track.drag_to(50.0);
        assert_eq!(track.release(), Some(0.0));
    }

    #[test]
    fn test_divider_text() {
        assert_eq!(divider_text(&["a", "b"], 2), "A \u{b7} B \u{b7} A \u{b7} B \u{b7} ");
        assert!(divider_text(&[], 8).is_empty());
        assert!(divider_text(DIVIDER_WORDS, 8).starts_with("RESEARCH \u{b7} DEVELOP"));
    }

    #[test]
    fn test_divider_style_runs_reverse() {
        assert_eq!(
            divider_style(25.0, true),
            "--marquee-duration: 25s; animation-direction: reverse; animation-play-state: running;"
        );
        let paused = divider_style(40.0, false);
        assert!(paused.contains("animation-direction: reverse;"));
        assert!(paused.ends_with("animation-play-state: paused;"));
    }

    #[test]
    fn test_parse_translate_x() {
        assert_eq!(parse_translate_x("none"), Some(0.0));
        assert_eq!(parse_translate_x("matrix(1, 0, 0, 1, -245.5, 0)"), Some(-245.5));
        assert_eq!(
            parse_translate_x("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, -12, 3, 0, 1)"),
            Some(-12.0)
        );
        assert_eq!(parse_translate_x("rotate(4deg)"), None);
    }
}
