//! Traffic-light controller with a pedestrian crossing request button.
//!
//! Provides [`SignalController`], a polling state machine that advances the
//! signal cycle on elapsed time and truncates GREEN when a crossing is
//! requested.

use crate::hardware::{CrossingButton, SignalOutputs};
use crate::lamps::LampSet;
use crate::signal::{Phase, SignalState};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::timing::SignalTiming;

/// Why the controller moved to a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvanceCause {
    /// The budget of the previous state elapsed.
    Elapsed,
    /// The crossing button was pressed during GREEN.
    CrossingRequest,
}

/// Result of a single [`SignalController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome<D> {
    /// Nothing changed. The current state has this much budget left.
    ///
    /// Outputs were not touched; polling again before then is harmless.
    Wait(D),

    /// The controller entered a new state and updated the outputs.
    Advanced {
        from: SignalState,
        to: SignalState,
        cause: AdvanceCause,
    },
}

impl<D> TickOutcome<D> {
    /// Returns true if the tick changed state.
    pub fn is_advance(&self) -> bool {
        matches!(self, TickOutcome::Advanced { .. })
    }
}

/// Drives a vehicle signal and a pedestrian signal through a fixed cycle.
///
/// The cycle is RED (steady walk, then blinking stop) → YELLOW → GREEN →
/// YELLOW → RED. Pressing the crossing button during GREEN cuts GREEN short
/// and starts a full YELLOW at once; presses during RED or YELLOW are
/// ignored and not remembered.
///
/// Call [`tick`](Self::tick) from the main loop as often as convenient. The
/// button is sampled on every call, so the polling rate bounds how short a
/// press can be and still be seen.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `O` - Signal output implementation type
/// * `B` - Crossing button implementation type
/// * `T` - Time source implementation type
pub struct SignalController<'t, I, O, B, T>
where
    I: TimeInstant,
    O: SignalOutputs,
    B: CrossingButton,
    T: TimeSource<I>,
{
    outputs: O,
    button: B,
    time_source: &'t T,
    timing: SignalTiming,
    state: SignalState,
    after_green: bool,
    budget: I::Duration,
    boundary: I,
}

impl<'t, I, O, B, T> SignalController<'t, I, O, B, T>
where
    I: TimeInstant,
    O: SignalOutputs,
    B: CrossingButton,
    T: TimeSource<I>,
{
    /// Creates a controller in power-on RED with every lamp off.
    ///
    /// The power-on state has zero budget, so the first call to `tick`
    /// enters the steady walk interval immediately.
    pub fn new(mut outputs: O, button: B, time_source: &'t T, timing: SignalTiming) -> Self {
        outputs.show(LampSet::EMPTY);

        Self {
            outputs,
            button,
            time_source,
            timing,
            state: SignalState::INITIAL,
            // Power-on RED stands in for a RED reached from GREEN.
            after_green: true,
            budget: I::Duration::ZERO,
            boundary: time_source.now(),
        }
    }

    /// Runs one iteration of the control loop.
    ///
    /// Samples the clock and the button, then either leaves everything as is
    /// or moves to the next state, lighting its lamps and restarting the
    /// budget from now.
    pub fn tick(&mut self) -> TickOutcome<I::Duration> {
        let now = self.time_source.now();
        let crossing_requested = self.button.is_pressed();

        if crossing_requested && self.state == SignalState::Green {
            #[cfg(feature = "defmt")]
            defmt::info!("crossing request, cutting green short");

            return self.enter(SignalState::Yellow, now, AdvanceCause::CrossingRequest);
        }

        let elapsed = now.duration_since(self.boundary);
        if elapsed < self.budget {
            return TickOutcome::Wait(self.budget.saturating_sub(elapsed));
        }

        let next = self.state.next(self.after_green, &self.timing);
        self.enter(next, now, AdvanceCause::Elapsed)
    }

    fn enter(&mut self, next: SignalState, now: I, cause: AdvanceCause) -> TickOutcome<I::Duration> {
        let from = self.state;

        if next == SignalState::Yellow {
            self.after_green = !self.after_green;
        }

        self.state = next;
        self.budget = I::Duration::from_millis(next.budget_ms(&self.timing));
        self.outputs.show(next.lamps());
        self.boundary = now;

        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {} ({})", from, next, cause);

        TickOutcome::Advanced {
            from,
            to: next,
            cause,
        }
    }

    /// Returns the current vehicle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the full current state, including the RED sub-stage.
    pub fn state(&self) -> SignalState {
        self.state
    }

    /// Returns the lamps currently lit.
    pub fn lamps(&self) -> LampSet {
        self.state.lamps()
    }

    /// Completed blink pairs in the current RED phase.
    pub fn blink_count(&self) -> u8 {
        self.state.blink_count()
    }

    /// Returns true if the YELLOW in progress (or most recently run) followed GREEN.
    pub fn after_green(&self) -> bool {
        self.after_green
    }

    /// Returns the full budget of the current state.
    pub fn budget(&self) -> I::Duration {
        self.budget
    }

    /// Returns the budget left before the next timed transition.
    pub fn remaining(&self) -> I::Duration {
        let elapsed = self.time_source.now().duration_since(self.boundary);
        self.budget.saturating_sub(elapsed)
    }

    /// Returns the timing this controller runs with.
    pub fn timing(&self) -> &SignalTiming {
        &self.timing
    }

    /// Consumes the controller and returns the outputs and button.
    pub fn into_parts(self) -> (O, B) {
        (self.outputs, self.button)
    }
}
