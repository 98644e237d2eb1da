//! Platform abstraction layer
//!
//! Host-side pieces the simulation stays ignorant of:
//! - Time (wall clock or fixed-step)
//! - Input events (keyboard/gamepad to tick input)

pub mod input;
pub mod time;

pub use input::{Key, KeyState};
pub use time::{Clock, MonotonicClock, SteppedClock};
