//! Shared test infrastructure for crossing-signal integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use crossing_signal::{
    CrossingButton, LampSet, PedestrianLed, SignalOutputs, Srgb, TimeDuration, TimeInstant,
    TimeSource,
};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use std::rc::Rc;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// Mock signal outputs that record every lamp set shown
pub struct MockOutputs {
    current: LampSet,
    history: heapless::Vec<LampSet, 64>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            current: LampSet::EMPTY,
            history: heapless::Vec::new(),
        }
    }

    pub fn current(&self) -> LampSet {
        self.current
    }

    pub fn history(&self) -> &[LampSet] {
        &self.history
    }
}

impl SignalOutputs for MockOutputs {
    fn show(&mut self, lamps: LampSet) {
        self.current = lamps;
        let _ = self.history.push(lamps);
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Crossing button whose level is controlled from the test through a shared handle
#[derive(Clone)]
pub struct MockButton {
    pressed: Rc<Cell<bool>>,
    reads: Rc<Cell<u32>>,
}

impl MockButton {
    pub fn new() -> Self {
        Self {
            pressed: Rc::new(Cell::new(false)),
            reads: Rc::new(Cell::new(0)),
        }
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
    }

    /// Number of times the controller sampled the button
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl CrossingButton for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.reads.set(self.reads.get() + 1);
        self.pressed.get()
    }
}

// ============================================================================
// Mock GPIO
// ============================================================================

/// GPIO pin sharing its level with the test through a handle
#[derive(Clone)]
pub struct MockPin {
    high: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl MockPin {
    /// Creates a pin that starts high so initialisation writes are observable
    pub fn new() -> Self {
        Self {
            high: Rc::new(Cell::new(true)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_set_high(&self) -> bool {
        self.high.get()
    }

    pub fn drive(&self, high: bool) {
        self.high.set(high);
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// RGB pedestrian LED recording the last color
#[derive(Clone)]
pub struct MockRgbLed {
    color: Rc<Cell<Srgb>>,
}

impl MockRgbLed {
    pub fn new() -> Self {
        Self {
            color: Rc::new(Cell::new(Srgb::new(0.5, 0.5, 0.5))),
        }
    }

    pub fn color(&self) -> Srgb {
        self.color.get()
    }
}

impl PedestrianLed for MockRgbLed {
    fn set_color(&mut self, color: Srgb) {
        self.color.set(color);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
