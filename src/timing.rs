//! Phase timing constants and their validation.

/// Names one of the timed intervals in [`SignalTiming`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interval {
    /// Steady pedestrian-walk part of RED.
    RedWalk,
    /// Time between pedestrian-stop toggles while blinking.
    Blink,
    /// Vehicle yellow.
    Yellow,
    /// Vehicle green.
    Green,
}

/// Durations (in milliseconds) and blink count that drive the signal cycle.
///
/// Values are fixed at compile time. Use [`SignalTiming::DEFAULT`] or build a
/// checked value in a `const` with [`SignalTiming::new`]:
///
/// ```
/// use crossing_signal::SignalTiming;
///
/// const FAST: SignalTiming = match SignalTiming::new(1000, 250, 2, 500, 1500) {
///     Ok(timing) => timing,
///     Err(_) => panic!("invalid timing"),
/// };
/// assert_eq!(FAST.cycle_ms(), 1000 + 3 * 250 + 2 * 500 + 1500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalTiming {
    red_walk_ms: u64,
    blink_interval_ms: u64,
    blinks: u8,
    yellow_ms: u64,
    green_ms: u64,
}

impl SignalTiming {
    /// 3.5 s walk, three 500 ms blinks, 2 s yellow, 4 s green.
    pub const DEFAULT: SignalTiming = SignalTiming {
        red_walk_ms: 3500,
        blink_interval_ms: 500,
        blinks: 3,
        yellow_ms: 2000,
        green_ms: 4000,
    };

    /// Creates a validated timing set.
    ///
    /// Every interval must be non-zero and at least one blink is required.
    pub const fn new(
        red_walk_ms: u64,
        blink_interval_ms: u64,
        blinks: u8,
        yellow_ms: u64,
        green_ms: u64,
    ) -> Result<Self, TimingError> {
        if red_walk_ms == 0 {
            return Err(TimingError::ZeroDuration(Interval::RedWalk));
        }
        if blink_interval_ms == 0 {
            return Err(TimingError::ZeroDuration(Interval::Blink));
        }
        if yellow_ms == 0 {
            return Err(TimingError::ZeroDuration(Interval::Yellow));
        }
        if green_ms == 0 {
            return Err(TimingError::ZeroDuration(Interval::Green));
        }
        if blinks == 0 {
            return Err(TimingError::ZeroBlinks);
        }

        Ok(Self {
            red_walk_ms,
            blink_interval_ms,
            blinks,
            yellow_ms,
            green_ms,
        })
    }

    pub const fn red_walk_ms(&self) -> u64 {
        self.red_walk_ms
    }

    pub const fn blink_interval_ms(&self) -> u64 {
        self.blink_interval_ms
    }

    /// Number of on/off blink pairs before RED hands over to YELLOW.
    pub const fn blinks(&self) -> u8 {
        self.blinks
    }

    pub const fn yellow_ms(&self) -> u64 {
        self.yellow_ms
    }

    pub const fn green_ms(&self) -> u64 {
        self.green_ms
    }

    /// Full RED → YELLOW → GREEN → YELLOW cycle length without crossing requests.
    ///
    /// The blink sub-sequence lasts `2 * blinks - 1` intervals: the last "off"
    /// toggle coincides with the start of YELLOW.
    pub const fn cycle_ms(&self) -> u64 {
        self.red_walk_ms
            + (2 * self.blinks as u64 - 1) * self.blink_interval_ms
            + 2 * self.yellow_ms
            + self.green_ms
    }
}

impl Default for SignalTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timing validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// An interval was zero.
    ZeroDuration(Interval),

    /// Blink count was zero.
    ZeroBlinks,
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroDuration(interval) => {
                write!(f, "{:?} interval must be non-zero", interval)
            }
            TimingError::ZeroBlinks => {
                write!(f, "pedestrian stop must blink at least once")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        assert_eq!(
            SignalTiming::new(3500, 500, 3, 2000, 4000),
            Ok(SignalTiming::DEFAULT)
        );
    }

    #[test]
    fn rejects_zero_intervals() {
        assert_eq!(
            SignalTiming::new(0, 500, 3, 2000, 4000),
            Err(TimingError::ZeroDuration(Interval::RedWalk))
        );
        assert_eq!(
            SignalTiming::new(3500, 0, 3, 2000, 4000),
            Err(TimingError::ZeroDuration(Interval::Blink))
        );
        assert_eq!(
            SignalTiming::new(3500, 500, 3, 0, 4000),
            Err(TimingError::ZeroDuration(Interval::Yellow))
        );
        assert_eq!(
            SignalTiming::new(3500, 500, 3, 2000, 0),
            Err(TimingError::ZeroDuration(Interval::Green))
        );
    }

    #[test]
    fn rejects_zero_blinks() {
        assert_eq!(
            SignalTiming::new(3500, 500, 0, 2000, 4000),
            Err(TimingError::ZeroBlinks)
        );
    }

    #[test]
    fn default_cycle_length() {
        // 3500 walk + 2500 blink + 2000 yellow + 4000 green + 2000 yellow
        assert_eq!(SignalTiming::DEFAULT.cycle_ms(), 14_000);
    }
}
