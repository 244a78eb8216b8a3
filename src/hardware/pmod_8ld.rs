//! Digilent PMOD 8LD: eight LEDs, LED`n` on bit `n`.

use embedded_hal::digital::StatefulOutputPin;

use super::pin_bank::OutputBank;
use super::traits::OutputPort;
use crate::error::Result;

pub const ALL_OFF: u8 = 0x00;
pub const ALL_ON: u8 = 0xFF;
pub const LOW_NIBBLE: u8 = 0x0F;
pub const HIGH_NIBBLE: u8 = 0xF0;
/// LEDs 0, 2, 4 and 6.
pub const EVEN: u8 = 0x55;
/// LEDs 1, 3, 5 and 7.
pub const ODD: u8 = 0xAA;

pub struct Pmod8Ld<P> {
    bank: OutputBank<P, 8>,
}

impl<P: StatefulOutputPin> Pmod8Ld<P> {
    /// Pins are taken in LED0..LED7 order. All LEDs start off.
    pub fn new(pins: [P; 8]) -> Result<Self> {
        let mut leds = Self {
            bank: OutputBank::new(pins),
        };
        leds.write(ALL_OFF)?;
        Ok(leds)
    }
}

impl<P: StatefulOutputPin> OutputPort for Pmod8Ld<P> {
    const WIDTH: u8 = 8;

    fn write(&mut self, value: u8) -> Result<u8> {
        self.bank.write(value)
    }

    fn state(&mut self) -> Result<u8> {
        self.bank.state()
    }
}
