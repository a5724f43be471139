//! # Motion
//!
//! Frame-by-frame math behind the site's animation primitives. The web crate
//! owns the timers, observers and animation frames; these types decide what
//! each frame shows.
//!
//! Every primitive honours a reduced-motion flag by skipping straight to its
//! resting state.

pub mod counter;
pub mod easing;
pub mod marquee;
pub mod reveal;
pub mod scramble;
pub mod scroll;

pub use counter::{CounterFrame, CounterSpec};
pub use easing::{ease_out_cubic, CubicBezier, EASE_OUT};
pub use marquee::{MarqueeDirection, MarqueeTrack};
pub use reveal::{InView, RevealDirection, RevealOptions};
pub use scramble::Scramble;

/// Media query reporting the OS reduced-motion setting.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
