//! Signal states, their lamp sets and timed successors.
//!
//! The whole cycle is described here as pure functions of [`SignalState`];
//! the controller only decides *when* to move to the next state.

use crate::lamps::{Lamp, LampSet};
use crate::timing::SignalTiming;

/// Which vehicle signal is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Red,
    Yellow,
    Green,
}

/// Sub-state of the RED phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RedStage {
    /// Power-on state. All lamps dark, zero budget.
    PowerOn,
    /// Steady pedestrian walk.
    Walk,
    /// Pedestrian stop blinking.
    Blink {
        /// Current level of the pedestrian-stop lamp.
        stop_lit: bool,
        /// Completed on→off blink pairs.
        blinks: u8,
    },
}

/// Complete state of the signal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalState {
    Red(RedStage),
    Yellow,
    Green,
}

impl SignalState {
    /// State the controller starts in.
    pub const INITIAL: SignalState = SignalState::Red(RedStage::PowerOn);

    /// Returns the vehicle phase this state belongs to.
    pub const fn phase(&self) -> Phase {
        match self {
            SignalState::Red(_) => Phase::Red,
            SignalState::Yellow => Phase::Yellow,
            SignalState::Green => Phase::Green,
        }
    }

    /// Returns the lamps lit while in this state.
    pub const fn lamps(&self) -> LampSet {
        match self {
            SignalState::Red(RedStage::PowerOn) => LampSet::EMPTY,
            SignalState::Red(RedStage::Walk) => LampSet::EMPTY
                .with(Lamp::VehicleRed)
                .with(Lamp::PedestrianWalk),
            SignalState::Red(RedStage::Blink { stop_lit: true, .. }) => LampSet::EMPTY
                .with(Lamp::VehicleRed)
                .with(Lamp::PedestrianStop),
            SignalState::Red(RedStage::Blink { stop_lit: false, .. }) => {
                LampSet::EMPTY.with(Lamp::VehicleRed)
            }
            SignalState::Yellow => LampSet::EMPTY
                .with(Lamp::VehicleYellow)
                .with(Lamp::PedestrianStop),
            SignalState::Green => LampSet::EMPTY
                .with(Lamp::VehicleGreen)
                .with(Lamp::PedestrianStop),
        }
    }

    /// Returns how long this state lasts before [`SignalState::next`] is due, in milliseconds.
    pub const fn budget_ms(&self, timing: &SignalTiming) -> u64 {
        match self {
            SignalState::Red(RedStage::PowerOn) => 0,
            SignalState::Red(RedStage::Walk) => timing.red_walk_ms(),
            SignalState::Red(RedStage::Blink { .. }) => timing.blink_interval_ms(),
            SignalState::Yellow => timing.yellow_ms(),
            SignalState::Green => timing.green_ms(),
        }
    }

    /// Completed blink pairs in the current RED phase, zero outside blinking.
    pub const fn blink_count(&self) -> u8 {
        match self {
            SignalState::Red(RedStage::Blink { blinks, .. }) => *blinks,
            _ => 0,
        }
    }

    /// Returns the state that follows once this state's budget has elapsed.
    ///
    /// `after_green` tells YELLOW which way to go: set when the YELLOW in
    /// progress was entered from GREEN, in which case RED follows.
    pub const fn next(&self, after_green: bool, timing: &SignalTiming) -> SignalState {
        match *self {
            SignalState::Red(RedStage::PowerOn) => SignalState::Red(RedStage::Walk),
            SignalState::Red(RedStage::Walk) => SignalState::Red(RedStage::Blink {
                stop_lit: true,
                blinks: 0,
            }),
            SignalState::Red(RedStage::Blink {
                stop_lit: true,
                blinks,
            }) => {
                if blinks + 1 >= timing.blinks() {
                    // Stop stays lit: YELLOW's lamp set includes it.
                    SignalState::Yellow
                } else {
                    SignalState::Red(RedStage::Blink {
                        stop_lit: false,
                        blinks: blinks + 1,
                    })
                }
            }
            SignalState::Red(RedStage::Blink {
                stop_lit: false,
                blinks,
            }) => SignalState::Red(RedStage::Blink {
                stop_lit: true,
                blinks,
            }),
            SignalState::Yellow => {
                if after_green {
                    SignalState::Red(RedStage::Walk)
                } else {
                    SignalState::Green
                }
            }
            SignalState::Green => SignalState::Yellow,
        }
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self::INITIAL
    }
}
