// =============================================================================
// Syntesa Web - Reactive Hooks
// =============================================================================
// Table of Contents:
// 1. Viewport visibility
// 2. Animated counter
// 3. Text scramble
// =============================================================================

pub mod counter;
pub mod in_view;
pub mod scramble;

pub use counter::use_animated_counter;
pub use in_view::{use_in_view, InViewOptions};
pub use scramble::use_text_scramble;
