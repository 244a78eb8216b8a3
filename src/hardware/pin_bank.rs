//! Fixed groups of pins addressed as the low bits of a byte.
//!
//! Line `n` of a bank is bit `n` of the value, so a bank of `N` pins masks
//! everything above bit `N - 1`.

use embedded_hal::digital::{InputPin, PinState, StatefulOutputPin};

use crate::error::Result;

pub struct OutputBank<P, const N: usize> {
    pins: [P; N],
}

impl<P, const N: usize> OutputBank<P, N>
where
    P: StatefulOutputPin,
{
    pub const MASK: u8 = {
        assert!(N >= 1 && N <= 8);
        ((1u16 << N) - 1) as u8
    };

    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    pub fn write(&mut self, value: u8) -> Result<u8> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(PinState::from(value & (1 << bit) != 0))?;
        }
        self.state()
    }

    pub fn state(&mut self) -> Result<u8> {
        let mut value = 0;
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if pin.is_set_high()? {
                value |= 1 << bit;
            }
        }
        Ok(value)
    }

    pub fn release(self) -> [P; N] {
        self.pins
    }
}

pub struct InputBank<P, const N: usize> {
    pins: [P; N],
}

impl<P, const N: usize> InputBank<P, N>
where
    P: InputPin,
{
    pub const MASK: u8 = {
        assert!(N >= 1 && N <= 8);
        ((1u16 << N) - 1) as u8
    };

    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Samples every line once; a high level sets the bit.
    pub fn read(&mut self) -> Result<u8> {
        let mut value = 0;
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if pin.is_high()? {
                value |= 1 << bit;
            }
        }
        Ok(value)
    }

    pub fn release(self) -> [P; N] {
        self.pins
    }
}
