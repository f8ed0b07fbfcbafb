#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`SignalController`**: Polling state machine; call `tick()` from the main loop
//! - **`SignalState`**: Current state of the cycle, with RED split into `RedStage`s
//! - **`Phase`**: Authoritative vehicle signal (`Red`, `Yellow`, `Green`)
//! - **`LampSet`**: The lamps lit in a state, derived purely from the state
//! - **`SignalTiming`**: Compile-time durations and blink count
//! - **`SignalOutputs`**: Trait to implement for your signal lamps
//! - **`CrossingButton`**: Trait to implement for your crossing request button
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! `GpioSignalHead`, `RgbPedestrianHead` and `GpioButton` adapt `embedded-hal`
//! pins to the hardware traits.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod controller;
pub mod hardware;
pub mod lamps;
pub mod signal;
pub mod time;
pub mod timing;

pub use controller::{AdvanceCause, SignalController, TickOutcome};
pub use hardware::{
    CrossingButton, GpioButton, GpioSignalHead, PedestrianLed, RgbPedestrianHead, SignalOutputs,
};
pub use lamps::{Lamp, LampSet};
pub use signal::{Phase, RedStage, SignalState};
pub use time::{Millis, MillisInstant, TimeDuration, TimeInstant, TimeSource};
pub use timing::{Interval, SignalTiming, TimingError};

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
