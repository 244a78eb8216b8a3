//! Blue Pill wiring.
//!
//! | Peripheral      | Pins                                     |
//! |-----------------|------------------------------------------|
//! | User LED        | PC13 (active low)                        |
//! | RGB LED R, G, B | PA0, PA1, PA2                            |
//! | Button 1, 2     | PB12, PB13 (to GND, pull-up)             |
//! | PMOD 8LD LED0-7 | PA4, PA5, PA6, PA7, PB0, PB1, PB10, PB11 |
//! | PMOD SWT SW1-4  | PB5, PB6, PB7, PB8                       |

use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::time::Hertz;
use embassy_stm32::{Config, Peripherals};

use crate::error::Result;
use crate::hardware::{Buttons, GpioLed, PeripheralSet, Pmod8Ld, PmodSwt, Polarity, RgbLed};

pub type Board = PeripheralSet<Output<'static>, Input<'static>>;

/// 8 MHz crystal through the PLL to a 48 MHz system clock.
pub fn clock_config() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL6,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        // APB1 tops out at 36 MHz
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    config
}

/// Configures every pin once and hands them to their drivers.
///
/// The RGB LED and the PMOD 8LD get the fastest output speed, the closest
/// this part has to a high drive strength setting.
pub fn take(p: Peripherals) -> Result<Board> {
    let led = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low), Polarity::ActiveLow)?;

    let rgb = RgbLed::new([
        Output::new(p.PA0, Level::Low, Speed::VeryHigh),
        Output::new(p.PA1, Level::Low, Speed::VeryHigh),
        Output::new(p.PA2, Level::Low, Speed::VeryHigh),
    ])?;

    let buttons = Buttons::new(Input::new(p.PB12, Pull::Up), Input::new(p.PB13, Pull::Up));

    let leds = Pmod8Ld::new([
        Output::new(p.PA4, Level::Low, Speed::VeryHigh),
        Output::new(p.PA5, Level::Low, Speed::VeryHigh),
        Output::new(p.PA6, Level::Low, Speed::VeryHigh),
        Output::new(p.PA7, Level::Low, Speed::VeryHigh),
        Output::new(p.PB0, Level::Low, Speed::VeryHigh),
        Output::new(p.PB1, Level::Low, Speed::VeryHigh),
        Output::new(p.PB10, Level::Low, Speed::VeryHigh),
        Output::new(p.PB11, Level::Low, Speed::VeryHigh),
    ])?;

    let switches = PmodSwt::new([
        Input::new(p.PB5, Pull::None),
        Input::new(p.PB6, Pull::None),
        Input::new(p.PB7, Pull::None),
        Input::new(p.PB8, Pull::None),
    ]);

    debug!("board pins configured");
    Ok(PeripheralSet::new(led, rgb, buttons, leds, switches))
}
