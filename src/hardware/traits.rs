use crate::error::Result;

pub trait Led {
    fn on(&mut self) -> Result<()>;
    fn off(&mut self) -> Result<()>;
    fn toggle(&mut self) -> Result<()>;
}

pub trait Button {
    fn is_pressed(&mut self) -> Result<bool>;
}

/// An output peripheral driven as a group of bits.
pub trait OutputPort {
    /// Number of lines, starting at bit 0.
    const WIDTH: u8;
    const MASK: u8 = ((1u16 << Self::WIDTH) - 1) as u8;

    /// Drives `value & MASK` onto the lines and returns the state read back
    /// from the output latches.
    fn write(&mut self, value: u8) -> Result<u8>;

    /// Current latch state, without driving anything.
    fn state(&mut self) -> Result<u8>;
}

/// An input peripheral sampled as a group of bits.
pub trait InputPort {
    /// Bits of the returned value that carry a line.
    const MASK: u8;

    fn read(&mut self) -> Result<u8>;
}
