use core::fmt;

use embedded_hal::digital::{self, ErrorKind};

/// Errors surfaced by the drivers and patterns.
///
/// The board's GPIO lines are infallible, so on hardware this never fires.
/// It exists for pin implementations that can fail, such as I/O expanders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A GPIO line rejected a read or a write.
    Pin(ErrorKind),
}

pub type Result<T> = core::result::Result<T, Error>;

impl<E: digital::Error> From<E> for Error {
    fn from(err: E) -> Self {
        Error::Pin(err.kind())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(kind) => write!(f, "pin error: {kind}"),
        }
    }
}

#[cfg(target_os = "none")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Pin(kind) => defmt::write!(f, "pin error: {}", defmt::Debug2Format(kind)),
        }
    }
}
