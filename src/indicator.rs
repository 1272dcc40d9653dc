//! Caps lock LED on a GPIO pin

use embedded_hal::digital::v2::OutputPin;

pub struct CapsLockLed<P> {
    pin: P,
    /// Pin level that lights the LED
    on_level: bool,
}

impl<P, E> CapsLockLed<P>
where
    P: OutputPin<Error = E>,
{
    pub fn new(pin: P, on_level: bool) -> Self {
        CapsLockLed { pin, on_level }
    }

    /// The Kyria rev3 wires its LED to ground through the pin
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Follow the host's caps lock report
    pub fn update(&mut self, caps_lock: bool) -> Result<(), E> {
        self.pin.set_state((caps_lock == self.on_level).into())?;
        Ok(())
    }

    pub fn release(self) -> P {
        self.pin
    }
}
