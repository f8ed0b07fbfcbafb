//! Signal lamps and the set of lamps lit at any moment.

use crate::colors::{STOP_COLOR, WALK_COLOR};
use crate::COLOR_OFF;
use palette::Srgb;

/// One of the five binary signal outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Lamp {
    /// Vehicle red.
    VehicleRed = 0,
    /// Vehicle yellow.
    VehicleYellow = 1,
    /// Vehicle green.
    VehicleGreen = 2,
    /// Pedestrian walk.
    PedestrianWalk = 3,
    /// Pedestrian stop ("don't walk").
    PedestrianStop = 4,
}

impl Lamp {
    /// All lamps, in output order.
    pub const ALL: [Lamp; 5] = [
        Lamp::VehicleRed,
        Lamp::VehicleYellow,
        Lamp::VehicleGreen,
        Lamp::PedestrianWalk,
        Lamp::PedestrianStop,
    ];

    /// Returns true for the three vehicle lamps.
    pub const fn is_vehicle(self) -> bool {
        matches!(
            self,
            Lamp::VehicleRed | Lamp::VehicleYellow | Lamp::VehicleGreen
        )
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The set of lamps that are lit.
///
/// Anything not in the set is dark. Output drivers receive a complete
/// `LampSet` on every transition rather than individual on/off writes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampSet(u8);

impl LampSet {
    /// No lamps lit.
    pub const EMPTY: LampSet = LampSet(0);

    /// Returns a copy of this set with `lamp` added.
    pub const fn with(self, lamp: Lamp) -> Self {
        LampSet(self.0 | lamp.bit())
    }

    /// Returns true if `lamp` is lit.
    pub const fn contains(&self, lamp: Lamp) -> bool {
        self.0 & lamp.bit() != 0
    }

    /// Returns true if every lamp is dark.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of lit lamps.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Number of lit vehicle lamps. Never more than one for sets produced by the controller.
    pub fn vehicle_lamp_count(&self) -> usize {
        self.iter().filter(|lamp| lamp.is_vehicle()).count()
    }

    /// Iterates over the lit lamps in output order.
    pub fn iter(&self) -> impl Iterator<Item = Lamp> + '_ {
        Lamp::ALL
            .into_iter()
            .filter(move |lamp| self.contains(*lamp))
    }

    /// Color for a single RGB pedestrian head.
    ///
    /// Walk drives the green channel and stop the red channel, so a set with
    /// neither lit maps to [`COLOR_OFF`].
    pub fn pedestrian_color(&self) -> Srgb {
        match (
            self.contains(Lamp::PedestrianWalk),
            self.contains(Lamp::PedestrianStop),
        ) {
            (true, true) => Srgb::new(STOP_COLOR.red, WALK_COLOR.green, 0.0),
            (true, false) => WALK_COLOR,
            (false, true) => STOP_COLOR,
            (false, false) => COLOR_OFF,
        }
    }
}

impl FromIterator<Lamp> for LampSet {
    fn from_iter<T: IntoIterator<Item = Lamp>>(iter: T) -> Self {
        iter.into_iter().fold(LampSet::EMPTY, LampSet::with)
    }
}

impl core::fmt::Debug for LampSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
