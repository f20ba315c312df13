//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (fixed-step accumulator over host timestamps)
//! - Input events (key identifiers to logical actions)

pub mod input;
pub mod time;

pub use input::action_for_key;
pub use time::FrameClock;
