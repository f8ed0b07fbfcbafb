//! Hardware abstraction for signal outputs and the crossing button.
//!
//! The controller talks to [`SignalOutputs`] and [`CrossingButton`] only.
//! Adapters for `embedded-hal` GPIO pins and RGB pedestrian heads are
//! provided; implement the traits directly for anything else.

use crate::lamps::{Lamp, LampSet};
use embedded_hal::digital::{InputPin, OutputPin};
use palette::Srgb;

/// Trait for abstracting the five signal outputs.
pub trait SignalOutputs {
    /// Lights exactly the lamps in `lamps` and darkens every other lamp.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn show(&mut self, lamps: LampSet);
}

/// Trait for abstracting the pedestrian crossing request button.
pub trait CrossingButton {
    /// Returns true while the button is asserted.
    fn is_pressed(&mut self) -> bool;
}

/// Trait for an RGB LED used as the pedestrian head.
pub trait PedestrianLed {
    /// Sets the LED to the specified RGB color (components in 0.0-1.0).
    fn set_color(&mut self, color: Srgb);
}

/// Five push-pull GPIO outputs, one per lamp, active high.
pub struct GpioSignalHead<R, Y, G, W, S>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
    W: OutputPin,
    S: OutputPin,
{
    red: R,
    yellow: Y,
    green: G,
    walk: W,
    stop: S,
}

impl<R, Y, G, W, S> GpioSignalHead<R, Y, G, W, S>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
    W: OutputPin,
    S: OutputPin,
{
    /// Takes ownership of the five output pins and drives them all low.
    pub fn new(red: R, yellow: Y, green: G, walk: W, stop: S) -> Self {
        let mut head = Self {
            red,
            yellow,
            green,
            walk,
            stop,
        };
        head.clear();
        head
    }

    /// Releases the pins.
    pub fn release(self) -> (R, Y, G, W, S) {
        (self.red, self.yellow, self.green, self.walk, self.stop)
    }

    fn clear(&mut self) {
        let _ = self.red.set_low();
        let _ = self.yellow.set_low();
        let _ = self.green.set_low();
        let _ = self.walk.set_low();
        let _ = self.stop.set_low();
    }

    fn light(&mut self, lamp: Lamp) {
        match lamp {
            Lamp::VehicleRed => {
                let _ = self.red.set_high();
            }
            Lamp::VehicleYellow => {
                let _ = self.yellow.set_high();
            }
            Lamp::VehicleGreen => {
                let _ = self.green.set_high();
            }
            Lamp::PedestrianWalk => {
                let _ = self.walk.set_high();
            }
            Lamp::PedestrianStop => {
                let _ = self.stop.set_high();
            }
        }
    }
}

impl<R, Y, G, W, S> SignalOutputs for GpioSignalHead<R, Y, G, W, S>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
    W: OutputPin,
    S: OutputPin,
{
    fn show(&mut self, lamps: LampSet) {
        // Everything goes dark first so two vehicle lamps are never lit together.
        self.clear();
        for lamp in lamps.iter() {
            self.light(lamp);
        }
    }
}

/// Three vehicle GPIO outputs plus an RGB LED as the pedestrian head.
pub struct RgbPedestrianHead<R, Y, G, P>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
    P: PedestrianLed,
{
    red: R,
    yellow: Y,
    green: G,
    pedestrian: P,
}

impl<R, Y, G, P> RgbPedestrianHead<R, Y, G, P>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
    P: PedestrianLed,
{
    /// Takes ownership of the outputs and turns every lamp off.
    pub fn new(red: R, yellow: Y, green: G, pedestrian: P) -> Self {
        let mut head = Self {
            red,
            yellow,
            green,
            pedestrian,
        };
        head.show(LampSet::EMPTY);
        head
    }

    /// Releases the outputs.
    pub fn release(self) -> (R, Y, G, P) {
        (self.red, self.yellow, self.green, self.pedestrian)
    }
}

impl<R, Y, G, P> SignalOutputs for RgbPedestrianHead<R, Y, G, P>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
    P: PedestrianLed,
{
    fn show(&mut self, lamps: LampSet) {
        let _ = self.red.set_low();
        let _ = self.yellow.set_low();
        let _ = self.green.set_low();

        if lamps.contains(Lamp::VehicleRed) {
            let _ = self.red.set_high();
        }
        if lamps.contains(Lamp::VehicleYellow) {
            let _ = self.yellow.set_high();
        }
        if lamps.contains(Lamp::VehicleGreen) {
            let _ = self.green.set_high();
        }
        self.pedestrian.set_color(lamps.pedestrian_color());
    }
}

/// Crossing request button on a GPIO input.
pub struct GpioButton<P: InputPin> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> GpioButton<P> {
    /// Button that reads high when pressed (pull-down wiring).
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Button that reads low when pressed (pull-up wiring).
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Releases the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> CrossingButton for GpioButton<P> {
    fn is_pressed(&mut self) -> bool {
        // A failed read counts as "not pressed".
        let level = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        level.unwrap_or(false)
    }
}
