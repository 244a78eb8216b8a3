//! Blue Pill LED patterns driven by two buttons and a PMOD SWT
//! =============================================================================================
//!
//! Hardware Connections:
//!   PMOD 8LD -> Blue Pill
//!      LED0..LED3  -> PA4, PA5, PA6, PA7
//!      LED4..LED7  -> PB0, PB1, PB10, PB11
//!      GND / VCC   -> GND / 3.3V
//!
//!   PMOD SWT -> Blue Pill
//!      SW1..SW4    -> PB5, PB6, PB7, PB8
//!      GND / VCC   -> GND / 3.3V
//!
//!   RGB LED (common cathode) -> PA0 (R), PA1 (G), PA2 (B)
//!   Buttons (to GND)         -> PB12 (button 1), PB13 (button 2)
//!   User LED                 -> PC13 (onboard)
//!
//! Behaviour, by switch position:
//!   all off  buttons pick a static pattern, both held flash blue at 1 Hz
//!   SW1      count up on the PMOD 8LD, 100 ms per step
//!   SW2      count down on the PMOD 8LD, wrapping, 100 ms per step
//!   SW3      everything flashes at 1 Hz
//!   SW4      ring counter, 500 ms per step
//!   other    same as all off

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use {
    defmt::info,
    embassy_executor::Spawner,
    embassy_time::Delay,
    pmod_gpio::{board, config::Timing, controller::Controller},
};
#[cfg(target_os = "none")]
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

#[cfg(target_os = "none")]
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(board::clock_config());
    info!("Hello World!");

    let peripherals = defmt::unwrap!(board::take(p));
    let mut controller = Controller::new(peripherals, Delay, Timing::default());

    if let Err(e) = controller.run().await {
        defmt::panic!("controller stopped: {}", e);
    }
}

// Host builds only need the library; the firmware is built for thumbv7m.
#[cfg(not(target_os = "none"))]
fn main() {}
