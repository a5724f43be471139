//! # Animated counter
//!
//! Maps elapsed time to the text a counting-up number should show.

use super::easing::ease_out_cubic;

/// Counter parameters. Times are in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub suffix: String,
    pub pad_digits: usize,
}

impl Default for CounterSpec {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
            duration_ms: 1500.0,
            delay_ms: 0.0,
            suffix: String::new(),
            pad_digits: 0,
        }
    }
}

/// What to show on a given animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterFrame {
    /// Still inside the start delay; keep showing the initial text.
    Waiting,
    /// Intermediate value.
    Running(String),
    /// Final value; stop requesting frames.
    Done(String),
}

impl CounterFrame {
    pub fn is_done(&self) -> bool {
        matches!(self, CounterFrame::Done(_))
    }
}

/// Rounds half up, matching how browsers round for display.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl CounterSpec {
    pub fn to(end: f64) -> Self {
        Self {
            end,
            ..Self::default()
        }
    }

    /// Rounds, zero-pads the magnitude to `pad_digits` and appends the suffix.
    pub fn format(&self, value: f64) -> String {
        let rounded = round_half_up(value);
        let digits = format!("{:0width$}", rounded.unsigned_abs(), width = self.pad_digits);
        let sign = if rounded < 0 { "-" } else { "" };
        format!("{}{}{}", sign, digits, self.suffix)
    }

    /// Text shown before the counter starts.
    pub fn initial_text(&self) -> String {
        self.format(self.start)
    }

    /// Text shown once the counter has finished, and under reduced motion.
    pub fn final_text(&self) -> String {
        self.format(self.end)
    }

    /// Text rendered before the counter is triggered.
    pub fn resting_text(&self, reduced_motion: bool) -> String {
        if reduced_motion {
            self.final_text()
        } else {
            self.initial_text()
        }
    }

    /// Frame for `elapsed_ms` since the counter was triggered. Under reduced
    /// motion every frame is the final one.
    pub fn frame(&self, elapsed_ms: f64, reduced_motion: bool) -> CounterFrame {
        if reduced_motion {
            return CounterFrame::Done(self.final_text());
        }
        let running = elapsed_ms - self.delay_ms;
        if running < 0.0 {
            return CounterFrame::Waiting;
        }

        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (running / self.duration_ms).min(1.0)
        };

        if progress >= 1.0 {
            return CounterFrame::Done(self.final_text());
        }

        let value = self.start + (self.end - self.start) * ease_out_cubic(progress);
        CounterFrame::Running(self.format(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str, suffix: &str) -> i64 {
        text.trim_end_matches(suffix).parse().unwrap()
    }

    #[test]
    fn test_terminal_value_is_exact() {
        let spec = CounterSpec::to(2023.0);
        assert_eq!(spec.frame(1500.0, false), CounterFrame::Done("2023".into()));
        assert_eq!(spec.frame(10_000.0, false), CounterFrame::Done("2023".into()));
        assert_eq!(spec.final_text(), "2023");
    }

    #[test]
    fn test_progresses_monotonically() {
        let spec = CounterSpec {
            end: 100.0,
            suffix: "+".into(),
            ..CounterSpec::default()
        };
        let mut last = number(&spec.initial_text(), "+");
        let mut t = 0.0;
        while t <= 1600.0 {
            let shown = match spec.frame(t, false) {
                CounterFrame::Running(s) | CounterFrame::Done(s) => s,
                CounterFrame::Waiting => unreachable!(),
            };
            let n = number(&shown, "+");
            assert!(n >= last, "{} went back to {} at {}ms", last, n, t);
            last = n;
            t += 16.0;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_delay_waits() {
        let spec = CounterSpec {
            end: 50.0,
            delay_ms: 300.0,
            ..CounterSpec::default()
        };
        assert_eq!(spec.frame(0.0, false), CounterFrame::Waiting);
        assert_eq!(spec.frame(299.0, false), CounterFrame::Waiting);
        assert_eq!(spec.frame(300.0, false), CounterFrame::Running("0".into()));
        assert!(spec.frame(1800.0, false).is_done());
    }

    #[test]
    fn test_ease_out_front_loads() {
        let spec = CounterSpec::to(100.0);
        // Half the time covers 87.5% of the distance.
        assert_eq!(spec.frame(750.0, false), CounterFrame::Running("88".into()));
    }

    #[test]
    fn test_padding_and_suffix() {
        let spec = CounterSpec {
            end: 6.0,
            pad_digits: 2,
            suffix: "+".into(),
            ..CounterSpec::default()
        };
        assert_eq!(spec.initial_text(), "00+");
        assert_eq!(spec.final_text(), "06+");
        assert_eq!(spec.format(-3.0), "-03+");
    }

    #[test]
    fn test_rounds_half_up() {
        let spec = CounterSpec::default();
        assert_eq!(spec.format(2.5), "3");
        assert_eq!(spec.format(-2.5), "-2");
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let spec = CounterSpec {
            end: 26.0,
            duration_ms: 0.0,
            ..CounterSpec::default()
        };
        assert_eq!(spec.frame(0.0, false), CounterFrame::Done("26".into()));
    }

    #[test]
    fn test_reduced_motion_skips_to_final() {
        let spec = CounterSpec {
            start: 2013.0,
            end: 2023.0,
            delay_ms: 200.0,
            ..CounterSpec::default()
        };
        assert_eq!(spec.resting_text(true), "2023");
        assert_eq!(spec.resting_text(false), "2013");
        let mut t = 0.0;
        while t <= 2000.0 {
            assert_eq!(spec.frame(t, true), CounterFrame::Done("2023".into()));
            t += 16.0;
        }
    }
}
