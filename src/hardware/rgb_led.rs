//! Three-colour LED, one line per channel.
//!
//! | Color    | Lines | Value |
//! |----------|-------|-------|
//! | Off      | ---   | 0x00  |
//! | Red      | R--   | 0x01  |
//! | Green    | -G-   | 0x02  |
//! | Yellow   | RG-   | 0x03  |
//! | Blue     | --B   | 0x04  |
//! | Pink     | R-B   | 0x05  |
//! | SkyBlue  | -GB   | 0x06  |
//! | White    | RGB   | 0x07  |

use embedded_hal::digital::StatefulOutputPin;

use super::pin_bank::OutputBank;
use super::traits::OutputPort;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Off = 0x00,
    Red = 0x01,
    Green = 0x02,
    Yellow = 0x03,
    Blue = 0x04,
    Pink = 0x05,
    SkyBlue = 0x06,
    White = 0x07,
}

impl Color {
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Every 3-bit value names a color; higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0x00 => Color::Off,
            0x01 => Color::Red,
            0x02 => Color::Green,
            0x03 => Color::Yellow,
            0x04 => Color::Blue,
            0x05 => Color::Pink,
            0x06 => Color::SkyBlue,
            _ => Color::White,
        }
    }
}

pub struct RgbLed<P> {
    bank: OutputBank<P, 3>,
}

impl<P: StatefulOutputPin> RgbLed<P> {
    /// Pins are taken in `[red, green, blue]` order. The LED starts off.
    pub fn new(pins: [P; 3]) -> Result<Self> {
        let mut rgb = Self {
            bank: OutputBank::new(pins),
        };
        rgb.set_color(Color::Off)?;
        Ok(rgb)
    }

    pub fn set_color(&mut self, color: Color) -> Result<Color> {
        self.write(color.bits()).map(Color::from_bits)
    }

    pub fn color(&mut self) -> Result<Color> {
        self.state().map(Color::from_bits)
    }
}

impl<P: StatefulOutputPin> OutputPort for RgbLed<P> {
    const WIDTH: u8 = 3;

    fn write(&mut self, value: u8) -> Result<u8> {
        self.bank.write(value & Self::MASK)
    }

    fn state(&mut self) -> Result<u8> {
        self.bank.state()
    }
}
