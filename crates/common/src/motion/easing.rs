//! Easing curves.

/// Ease-out cubic: fast start, gentle landing. Exact at both ends.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// CSS cubic Bézier timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The site-wide transition curve.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

/// Curve used by the about page's heading lines.
pub const EASE_OUT_SOFT: CubicBezier = CubicBezier::new(0.33, 1.0, 0.68, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// `cubic-bezier(...)` for use in CSS transitions and Web Animations.
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_ease_out_cubic_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_out_cubic(i as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_bezier_css() {
        assert_eq!(EASE_OUT.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(EASE_OUT_SOFT.css(), "cubic-bezier(0.33, 1, 0.68, 1)");
    }
}
