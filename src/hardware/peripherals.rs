use embedded_hal::digital::{InputPin, StatefulOutputPin};

use super::gpio_button::{ButtonStatus, Buttons};
use super::gpio_led::GpioLed;
use super::pmod_8ld::Pmod8Ld;
use super::pmod_swt::{PmodSwt, SwitchStatus};
use super::rgb_led::{Color, RgbLed};
use super::traits::{Led, OutputPort};
use crate::error::Result;

/// Sole owner of every pin the firmware touches.
///
/// `O` is the output pin type and `I` the input pin type. With the embassy
/// HAL these are the type-erased `Output` and `Input`, so one set covers the
/// whole board.
pub struct PeripheralSet<O, I> {
    pub led: GpioLed<O>,
    pub rgb: RgbLed<O>,
    pub buttons: Buttons<I>,
    pub leds: Pmod8Ld<O>,
    pub switches: PmodSwt<I>,
}

impl<O, I> PeripheralSet<O, I>
where
    O: StatefulOutputPin,
    I: InputPin,
{
    pub fn new(
        led: GpioLed<O>,
        rgb: RgbLed<O>,
        buttons: Buttons<I>,
        leds: Pmod8Ld<O>,
        switches: PmodSwt<I>,
    ) -> Self {
        Self {
            led,
            rgb,
            buttons,
            leds,
            switches,
        }
    }

    /// Reads the buttons, then the switches.
    pub fn sample(&mut self) -> Result<(ButtonStatus, SwitchStatus)> {
        let buttons = self.buttons.status()?;
        let switches = self.switches.status()?;
        Ok((buttons, switches))
    }

    /// Sets the user LED, the RGB LED and the PMOD 8LD in that order.
    pub fn show(&mut self, led: bool, color: Color, leds: u8) -> Result<()> {
        if led {
            self.led.on()?;
        } else {
            self.led.off()?;
        }
        self.rgb.set_color(color)?;
        self.leds.write(leds)?;
        Ok(())
    }

    pub fn all_off(&mut self) -> Result<()> {
        self.show(false, Color::Off, 0)
    }
}
