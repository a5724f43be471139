//! # Theme preference
//!
//! Light/dark resolution. An explicit choice stored under [`STORAGE_KEY`]
//! wins; otherwise the OS color scheme decides, and OS changes are followed
//! only while nothing is stored.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseThemeError;

/// Local-storage key holding the explicit choice.
pub const STORAGE_KEY: &str = "theme";

/// Media query reporting the OS color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Duration of the circular reveal when switching themes.
pub const TRANSITION_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Theme {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// What the visitor chose plus what the OS reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    stored: Option<Theme>,
    system: Theme,
}

impl ThemePreference {
    pub fn new(stored: Option<Theme>, system: Theme) -> Self {
        Self { stored, system }
    }

    /// Build from the raw storage value; anything unparseable counts as unset.
    pub fn from_storage(raw: Option<&str>, system_dark: bool) -> Self {
        let stored = raw.and_then(|value| match value.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::warn!("ignoring stored theme: {}", err);
                None
            }
        });
        Self::new(stored, Theme::from_dark(system_dark))
    }

    /// Theme currently in effect.
    pub fn resolved(&self) -> Theme {
        self.stored.unwrap_or(self.system)
    }

    /// Whether an explicit choice has been made.
    pub fn is_explicit(&self) -> bool {
        self.stored.is_some()
    }

    /// Records the OS scheme. Returns the theme to apply when it changed the
    /// resolved theme, which only happens without an explicit choice.
    pub fn system_changed(&mut self, system: Theme) -> Option<Theme> {
        let before = self.resolved();
        self.system = system;
        let after = self.resolved();
        (!self.is_explicit() && before != after).then_some(after)
    }

    /// Flips the resolved theme and stores it as an explicit choice.
    pub fn toggle(&mut self) -> Theme {
        let next = self.resolved().toggled();
        self.stored = Some(next);
        tracing::debug!("theme toggled to {}", next);
        next
    }
}

// ============================================================================
// Circular reveal geometry
// ============================================================================

/// Origin and radius of the clip-path circle used when switching themes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl RevealCircle {
    /// Circle centred on the pointer (or top centre when there is none) that
    /// grows until it covers the farthest viewport corner.
    pub fn new(pointer: Option<(f64, f64)>, width: f64, height: f64) -> Self {
        let (x, y) = pointer.unwrap_or((width / 2.0, 0.0));
        let dx = x.max(width - x);
        let dy = y.max(height - y);
        Self {
            x,
            y,
            radius: dx.hypot(dy),
        }
    }

    /// `[from, to]` clip-path keyframes.
    pub fn clip_paths(&self) -> [String; 2] {
        [
            format!("circle(0px at {}px {}px)", self.x, self.y),
            format!("circle({}px at {}px {}px)", self.radius, self.x, self.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_os_dark_without_stored_choice() {
        let pref = ThemePreference::from_storage(None, true);
        assert_eq!(pref.resolved(), Theme::Dark);
        assert!(!pref.is_explicit());
    }

    #[test]
    fn test_invalid_stored_value_is_ignored() {
        let pref = ThemePreference::from_storage(Some("purple"), false);
        assert!(!pref.is_explicit());
        assert_eq!(pref.resolved(), Theme::Light);
    }

    #[test]
    fn test_follows_os_until_explicit() {
        let mut pref = ThemePreference::from_storage(None, true);
        assert_eq!(pref.system_changed(Theme::Light), Some(Theme::Light));

        // Explicit toggle from light -> dark, then back to light.
        assert_eq!(pref.toggle(), Theme::Dark);
        assert_eq!(pref.toggle(), Theme::Light);

        assert_eq!(pref.system_changed(Theme::Dark), None);
        assert_eq!(pref.resolved(), Theme::Light);
        assert_eq!(pref.system_changed(Theme::Light), None);
        assert_eq!(pref.resolved(), Theme::Light);
    }

    #[test]
    fn test_stored_choice_wins() {
        let pref = ThemePreference::from_storage(Some("light"), true);
        assert_eq!(pref.resolved(), Theme::Light);
    }

    #[test]
    fn test_stored_value_is_bare_name() {
        for theme in [Theme::Light, Theme::Dark] {
            let pref = ThemePreference::from_storage(Some(theme.as_str()), !theme.is_dark());
            assert!(pref.is_explicit());
            assert_eq!(pref.resolved(), theme);
        }
        // A JSON-quoted value is not a theme name.
        let quoted = ThemePreference::from_storage(Some("\"dark\""), false);
        assert!(!quoted.is_explicit());
        assert_eq!(quoted.resolved(), Theme::Light);
    }

    #[test]
    fn test_reveal_radius_reaches_far_corner() {
        let circle = RevealCircle::new(Some((100.0, 50.0)), 1000.0, 800.0);
        let expected = (900.0f64).hypot(750.0);
        assert!((circle.radius - expected).abs() < 1e-9);

        let centred = RevealCircle::new(None, 1000.0, 800.0);
        assert_eq!(centred.x, 500.0);
        assert_eq!(centred.y, 0.0);
        assert!((centred.radius - (500.0f64).hypot(800.0)).abs() < 1e-9);
    }

    #[test]
    fn test_clip_paths() {
        let circle = RevealCircle { x: 10.0, y: 20.0, radius: 30.0 };
        let [from, to] = circle.clip_paths();
        assert_eq!(from, "circle(0px at 10px 20px)");
        assert_eq!(to, "circle(30px at 10px 20px)");
    }
}
