//! # Viewport reveal
//!
//! [`InView`] is the state machine behind every "appear when scrolled into
//! view" effect. [`RevealOptions`] turns its boolean into inline styles.

use super::easing::EASE_OUT;

// ============================================================================
// Visibility latch
// ============================================================================

/// Visibility of one observed element.
///
/// With `once`, the first intersection latches `visible` to true and asks the
/// caller to detach its observer; nothing after that can flip it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InView {
    once: bool,
    visible: bool,
    detached: bool,
}

/// Outcome of feeding an intersection entry to [`InView::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    /// The visibility flag changed and consumers should re-render.
    pub changed: bool,
    /// The caller should disconnect its observer now.
    pub detach: bool,
}

impl InView {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
            detached: false,
        }
    }

    /// Starts visible, for reduced motion or when observers are unavailable.
    pub fn settled() -> Self {
        Self {
            once: true,
            visible: true,
            detached: true,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, intersecting: bool) -> Observation {
        if self.detached {
            return Observation { changed: false, detach: false };
        }

        let before = self.visible;
        if intersecting {
            self.visible = true;
            if self.once {
                self.detached = true;
            }
        } else if !self.once {
            self.visible = false;
        }

        Observation {
            changed: before != self.visible,
            detach: self.detached,
        }
    }
}

// ============================================================================
// Reveal styles
// ============================================================================

/// Direction the content travels in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
    /// Fade only.
    None,
}

impl RevealDirection {
    /// Hidden offset as `(x, y)` pixels.
    pub fn offset(self, distance: f64) -> (f64, f64) {
        match self {
            RevealDirection::Up => (0.0, distance),
            RevealDirection::Down => (0.0, -distance),
            RevealDirection::Left => (distance, 0.0),
            RevealDirection::Right => (-distance, 0.0),
            RevealDirection::None => (0.0, 0.0),
        }
    }

    /// Hidden `clip-path` for the clip variant.
    pub fn clip_inset(self) -> &'static str {
        match self {
            RevealDirection::Up => "inset(100% 0 0 0)",
            RevealDirection::Down => "inset(0 0 100% 0)",
            RevealDirection::Left => "inset(0 100% 0 0)",
            RevealDirection::Right => "inset(0 0 0 100%)",
            RevealDirection::None => "inset(0 0 0 0)",
        }
    }
}

/// Author-facing knobs of a reveal. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub direction: RevealDirection,
    pub delay: f64,
    pub duration: f64,
    pub distance: f64,
    pub threshold: f64,
    pub once: bool,
    pub clip: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            delay: 0.0,
            duration: 0.6,
            distance: 30.0,
            threshold: 0.15,
            once: true,
            clip: false,
        }
    }
}

impl RevealOptions {
    /// Options for one child of a staggered list.
    pub fn stagger_item(index: usize, stagger: f64) -> Self {
        Self {
            delay: index as f64 * stagger,
            duration: 0.5,
            distance: 24.0,
            ..Self::default()
        }
    }

    /// Inline style for the current visibility.
    pub fn style(&self, visible: bool, reduced_motion: bool) -> String {
        if reduced_motion {
            return String::from("opacity: 1; transform: none; transition: none;");
        }

        let ease = EASE_OUT.css();
        let mut transition = format!(
            "opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s",
            d = self.duration,
            delay = self.delay,
        );
        if self.clip {
            transition.push_str(&format!(
                ", clip-path {}s {} {}s",
                self.duration, ease, self.delay
            ));
        }

        let (opacity, transform, clip) = if visible {
            (1.0, String::from("none"), "inset(0 0 0 0)")
        } else {
            let (x, y) = self.direction.offset(self.distance);
            (
                0.0,
                format!("translate3d({}px, {}px, 0)", x, y),
                self.direction.clip_inset(),
            )
        };

        let mut style = format!(
            "opacity: {}; transform: {}; transition: {};",
            opacity, transform, transition
        );
        if self.clip {
            style.push_str(&format!(" clip-path: {};", clip));
        }
        style
    }
}

/// Inline style for a horizontal rule that grows from the left.
pub fn line_style(visible: bool, reduced_motion: bool, delay: f64) -> String {
    const DURATION: f64 = 0.8;
    if reduced_motion {
        return String::from("transform: scaleX(1); transform-origin: left; transition: none;");
    }
    format!(
        "transform: scaleX({}); transform-origin: left; transition: transform {}s {} {}s;",
        if visible { 1 } else { 0 },
        DURATION,
        EASE_OUT.css(),
        delay
    )
}

/// Stroke settings for an SVG rectangle that draws its own outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderDraw {
    pub perimeter: f64,
}

impl BorderDraw {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            perimeter: 2.0 * (width + height),
        }
    }

    /// Inline style for the `<rect>`; an empty perimeter draws nothing.
    pub fn style(&self, drawn: bool, reduced_motion: bool, duration: f64, delay: f64) -> String {
        let offset = if drawn || reduced_motion { 0.0 } else { self.perimeter };
        let transition = if reduced_motion {
            String::from("none")
        } else {
            format!(
                "stroke-dashoffset {}s {} {}s",
                duration,
                EASE_OUT.css(),
                if drawn { delay } else { 0.0 }
            )
        };
        format!(
            "stroke-dasharray: {p}; stroke-dashoffset: {o}; transition: {t};",
            p = self.perimeter,
            o = offset,
            t = transition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_never_hides_again() {
        let mut state = InView::new(true);
        assert!(!state.visible());

        let first = state.observe(true);
        assert!(first.changed && first.detach);

        for intersecting in [false, true, false, false] {
            let obs = state.observe(intersecting);
            assert!(!obs.changed);
            assert!(state.visible());
        }
    }

    #[test]
    fn test_continuous_tracking() {
        let mut state = InView::new(false);
        assert!(state.observe(true).changed);
        let leave = state.observe(false);
        assert!(leave.changed);
        assert!(!leave.detach);
        assert!(!state.visible());
        assert!(state.observe(true).changed);
    }

    #[test]
    fn test_not_intersecting_initially_is_noop() {
        let mut state = InView::new(true);
        let obs = state.observe(false);
        assert!(!obs.changed && !obs.detach);
        assert!(!state.visible());
    }

    #[test]
    fn test_settled() {
        let mut state = InView::settled();
        assert!(state.visible());
        state.observe(false);
        assert!(state.visible());
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(RevealDirection::Up.offset(30.0), (0.0, 30.0));
        assert_eq!(RevealDirection::Down.offset(30.0), (0.0, -30.0));
        assert_eq!(RevealDirection::Left.offset(10.0), (10.0, 0.0));
        assert_eq!(RevealDirection::Right.offset(10.0), (-10.0, 0.0));
    }

    #[test]
    fn test_hidden_and_visible_styles() {
        let options = RevealOptions::default();
        let hidden = options.style(false, false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 30px, 0)"));
        assert!(hidden.contains("cubic-bezier(0.22, 1, 0.36, 1)"));

        let shown = options.style(true, false);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("transform: none;"));
    }

    #[test]
    fn test_clip_variant() {
        let options = RevealOptions {
            clip: true,
            direction: RevealDirection::Left,
            ..RevealOptions::default()
        };
        assert!(options.style(false, false).contains("clip-path: inset(0 100% 0 0);"));
        assert!(options.style(true, false).contains("clip-path: inset(0 0 0 0);"));
    }

    #[test]
    fn test_reduced_motion_is_resting_state() {
        let options = RevealOptions {
            delay: 2.0,
            ..RevealOptions::default()
        };
        let style = options.style(false, true);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transition: none;"));
        assert!(line_style(false, true, 1.0).contains("scaleX(1)"));
    }

    #[test]
    fn test_stagger_item_delay() {
        let third = RevealOptions::stagger_item(2, 0.1);
        assert!((third.delay - 0.2).abs() < 1e-12);
        assert_eq!(third.distance, 24.0);
    }

    #[test]
    fn test_border_draw() {
        let border = BorderDraw::new(100.0, 40.0);
        assert_eq!(border.perimeter, 280.0);
        assert!(border.style(false, false, 0.8, 0.3).contains("stroke-dashoffset: 280;"));
        assert!(border.style(true, false, 0.8, 0.3).contains("stroke-dashoffset: 0;"));
        assert!(border.style(false, true, 0.8, 0.3).contains("stroke-dashoffset: 0;"));
    }
}
