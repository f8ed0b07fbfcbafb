//! Time abstraction traits for platform-agnostic timing.
//!
//! Also provides [`Millis`] and [`MillisInstant`], a ready-made pair for
//! targets that count milliseconds in a wrapping 32-bit counter.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u64);

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        Millis(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        Millis(self.0.saturating_sub(other.0))
    }
}

/// Reading of a free-running 32-bit millisecond counter.
///
/// The counter wraps after ~49.7 days. Elapsed time is computed with wrapping
/// subtraction, so any interval shorter than the wrap period is measured
/// correctly even when the counter overflows in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisInstant(pub u32);

impl MillisInstant {
    /// Returns the raw counter value.
    pub fn as_millis(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for MillisInstant {
    type Duration = Millis;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Millis(self.0.wrapping_sub(earlier.0) as u64)
    }
}
