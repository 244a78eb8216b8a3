pub mod gpio_button;
pub mod gpio_led;
pub mod peripherals;
pub mod pin_bank;
pub mod pmod_8ld;
pub mod pmod_swt;
pub mod rgb_led;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use gpio_button::{ButtonStatus, Buttons, GpioButton};
pub use gpio_led::{GpioLed, Polarity};
pub use peripherals::PeripheralSet;
pub use pmod_8ld::Pmod8Ld;
pub use pmod_swt::{PmodSwt, SwitchStatus};
pub use rgb_led::{Color, RgbLed};
