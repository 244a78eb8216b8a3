use super::traits::{Led, OutputPort};
use crate::error::Result;
use embedded_hal::digital::{PinState, StatefulOutputPin};

/// Electrical level that lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    /// Lit when the pin is driven low, like the PC13 LED on the Blue Pill.
    ActiveLow,
}

pub struct GpioLed<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: StatefulOutputPin> GpioLed<P> {
    /// Takes a pin already configured as a push-pull output and turns the
    /// LED off.
    pub fn new(pin: P, polarity: Polarity) -> Result<Self> {
        let mut led = Self { pin, polarity };
        led.off()?;
        Ok(led)
    }

    pub fn is_on(&mut self) -> Result<bool> {
        let high = self.pin.is_set_high()?;
        Ok(match self.polarity {
            Polarity::ActiveHigh => high,
            Polarity::ActiveLow => !high,
        })
    }

    fn drive(&mut self, lit: bool) -> Result<()> {
        let level = match self.polarity {
            Polarity::ActiveHigh => PinState::from(lit),
            Polarity::ActiveLow => PinState::from(!lit),
        };
        self.pin.set_state(level)?;
        Ok(())
    }
}

impl<P: StatefulOutputPin> Led for GpioLed<P> {
    fn on(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn off(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn toggle(&mut self) -> Result<()> {
        self.pin.toggle()?;
        Ok(())
    }
}

impl<P: StatefulOutputPin> OutputPort for GpioLed<P> {
    const WIDTH: u8 = 1;

    fn write(&mut self, value: u8) -> Result<u8> {
        self.drive(value & Self::MASK != 0)?;
        self.state()
    }

    fn state(&mut self) -> Result<u8> {
        Ok(self.is_on()? as u8)
    }
}
