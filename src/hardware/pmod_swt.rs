//! Digilent PMOD SWT: four slide switches, SW`n` on bit `n - 1`, high when on.

use embedded_hal::digital::InputPin;

use super::pin_bank::InputBank;
use super::traits::InputPort;
use crate::error::Result;

/// Positions of the four switches, one bit per switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct SwitchStatus(u8);

impl SwitchStatus {
    pub const MASK: u8 = 0x0F;

    pub const ALL_OFF: Self = Self(0x00);
    pub const SW1: Self = Self(0x01);
    pub const SW2: Self = Self(0x02);
    pub const SW3: Self = Self(0x04);
    pub const SW4: Self = Self(0x08);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `switch` counts from 1, as printed on the module.
    pub const fn is_on(self, switch: u8) -> bool {
        switch >= 1 && switch <= 4 && self.0 & (1 << (switch - 1)) != 0
    }

    pub const fn count_on(self) -> u32 {
        self.0.count_ones()
    }
}

pub struct PmodSwt<P> {
    bank: InputBank<P, 4>,
}

impl<P: InputPin> PmodSwt<P> {
    /// Pins are taken in SW1..SW4 order, configured as plain inputs.
    pub fn new(pins: [P; 4]) -> Self {
        Self {
            bank: InputBank::new(pins),
        }
    }

    pub fn status(&mut self) -> Result<SwitchStatus> {
        self.read().map(SwitchStatus::from_bits)
    }
}

impl<P: InputPin> InputPort for PmodSwt<P> {
    const MASK: u8 = SwitchStatus::MASK;

    fn read(&mut self) -> Result<u8> {
        self.bank.read()
    }
}
