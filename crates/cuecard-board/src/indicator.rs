//! Status LED command surface.

use embedded_hal::digital::OutputPin;

/// Single status LED. The presenter only drives it off at boot; the
/// on/off surface stays for board bring-up.
#[derive(Debug)]
pub struct StatusLed<P> {
    pin: P,
    active_low: bool,
}

impl<P> StatusLed<P>
where
    P: OutputPin,
{
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        if self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        if self.active_low {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        }
    }
}
