//! Slide transition state machine, independent of any UI toolkit.
//!
//! [`SlideController`] decides which slide is active and when autoplay fires.
//! Time comes in through a [`Scheduler`], so the same controller runs on
//! browser timers in the page and on virtual time in tests.

pub mod animation;
pub mod controller;
pub mod scheduler;

pub use animation::{classify_swipe, format_counter, AnimationKind, Direction, Phase};
pub use controller::{SlideController, SlideState, SliderCallbacks, SliderConfig, Suspension};
pub use scheduler::{GlooScheduler, Scheduler};
