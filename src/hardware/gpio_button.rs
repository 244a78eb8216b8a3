use super::traits::{Button, InputPort};
use crate::error::Result;
use embedded_hal::digital::InputPin;

/// A push button wired to ground, read through a pull-up.
pub struct GpioButton<P> {
    pin: P,
}

impl<P: InputPin> GpioButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    fn is_pressed(&mut self) -> Result<bool> {
        Ok(self.pin.is_low()?)
    }
}

/// Raw state of the two user buttons, in negative logic.
///
/// Button 1 sits on bit 1 and button 2 on bit 4; a cleared bit means the
/// button is held down. All other bits are always zero.
///
/// | Value | Button 1 | Button 2 |
/// |-------|----------|----------|
/// | 0x00  | pressed  | pressed  |
/// | 0x10  | pressed  | released |
/// | 0x02  | released | pressed  |
/// | 0x12  | released | released |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct ButtonStatus(u8);

impl ButtonStatus {
    pub const BUTTON1: u8 = 1 << 1;
    pub const BUTTON2: u8 = 1 << 4;
    pub const MASK: u8 = Self::BUTTON1 | Self::BUTTON2;

    pub const BOTH_PRESSED: Self = Self(0x00);
    pub const BUTTON1_PRESSED: Self = Self(Self::BUTTON2);
    pub const BUTTON2_PRESSED: Self = Self(Self::BUTTON1);
    pub const NONE_PRESSED: Self = Self(Self::MASK);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn button1_pressed(self) -> bool {
        self.0 & Self::BUTTON1 == 0
    }

    pub const fn button2_pressed(self) -> bool {
        self.0 & Self::BUTTON2 == 0
    }
}

impl Default for ButtonStatus {
    fn default() -> Self {
        Self::NONE_PRESSED
    }
}

/// The two user buttons. No debouncing: every read samples the pins as
/// they are.
pub struct Buttons<P> {
    button1: GpioButton<P>,
    button2: GpioButton<P>,
}

impl<P: InputPin> Buttons<P> {
    /// Both pins must already be inputs with their pull-ups enabled.
    pub fn new(button1: P, button2: P) -> Self {
        Self {
            button1: GpioButton::new(button1),
            button2: GpioButton::new(button2),
        }
    }

    pub fn status(&mut self) -> Result<ButtonStatus> {
        self.read().map(ButtonStatus::from_bits)
    }

    pub fn button1(&mut self) -> &mut GpioButton<P> {
        &mut self.button1
    }

    pub fn button2(&mut self) -> &mut GpioButton<P> {
        &mut self.button2
    }
}

impl<P: InputPin> InputPort for Buttons<P> {
    const MASK: u8 = ButtonStatus::MASK;

    fn read(&mut self) -> Result<u8> {
        let mut bits = 0;
        if !self.button1.is_pressed()? {
            bits |= ButtonStatus::BUTTON1;
        }
        if !self.button2.is_pressed()? {
            bits |= ButtonStatus::BUTTON2;
        }
        Ok(bits)
    }
}
