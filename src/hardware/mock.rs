//! Host-side stand-ins for the board: pins backed by a shared bench, and a
//! delay that records what the outputs showed during every wait.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin};
use embedded_hal_async::delay::DelayNs;

use super::gpio_button::Buttons;
use super::gpio_led::{GpioLed, Polarity};
use super::peripherals::PeripheralSet;
use super::pmod_8ld::Pmod8Ld;
use super::pmod_swt::PmodSwt;
use super::rgb_led::RgbLed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// What a mock pin is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Led,
    Rgb(u8),
    Array(u8),
    /// Bit of the raw button status the pin drives.
    Button(u8),
    Switch(u8),
}

/// Output state in the units the drivers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outputs {
    pub led: u8,
    pub rgb: u8,
    pub leds: u8,
}

/// One call to the delay: how long, and what was lit meanwhile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub wait_ms: u32,
    pub outputs: Outputs,
}

#[derive(Default)]
struct State {
    led_level: bool,
    rgb: u8,
    leds: u8,
    buttons: u8,
    switches: u8,
    frames: Vec<Frame>,
    switch_schedule: Vec<(usize, u8)>,
    fail_after: Option<usize>,
    fail_writes: bool,
}

#[derive(Clone)]
pub struct Bench(Rc<RefCell<State>>);

impl Bench {
    /// Buttons released, switches off, outputs low.
    pub fn new() -> Self {
        let state = State {
            buttons: 0x12,
            ..State::default()
        };
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn pin(&self, line: Line) -> MockPin {
        MockPin {
            bench: self.clone(),
            line,
        }
    }

    /// A full set with an active-high user LED.
    pub fn peripherals(&self) -> PeripheralSet<MockPin, MockPin> {
        PeripheralSet::new(
            GpioLed::new(self.pin(Line::Led), Polarity::ActiveHigh).unwrap(),
            RgbLed::new(core::array::from_fn(|n| self.pin(Line::Rgb(n as u8)))).unwrap(),
            Buttons::new(self.pin(Line::Button(1)), self.pin(Line::Button(4))),
            Pmod8Ld::new(core::array::from_fn(|n| self.pin(Line::Array(n as u8)))).unwrap(),
            PmodSwt::new(core::array::from_fn(|n| self.pin(Line::Switch(n as u8)))),
        )
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay {
            bench: self.clone(),
        }
    }

    /// Holds button 1 or 2 down.
    pub fn press(&self, button: u8) {
        self.0.borrow_mut().buttons &= !Self::button_bit(button);
    }

    pub fn release(&self, button: u8) {
        self.0.borrow_mut().buttons |= Self::button_bit(button);
    }

    pub fn set_switches(&self, bits: u8) {
        self.0.borrow_mut().switches = bits;
    }

    /// Moves the switches to `bits` once `waits` delays have elapsed.
    pub fn switches_after(&self, waits: usize, bits: u8) {
        self.0.borrow_mut().switch_schedule.push((waits, bits));
    }

    pub fn fail_writes(&self) {
        self.0.borrow_mut().fail_writes = true;
    }

    /// Makes every output write fail once `waits` delays have elapsed.
    pub fn fail_writes_after(&self, waits: usize) {
        self.0.borrow_mut().fail_after = Some(waits);
    }

    pub fn force_led_level(&self, high: bool) {
        self.0.borrow_mut().led_level = high;
    }

    pub fn led_level(&self) -> bool {
        self.0.borrow().led_level
    }

    pub fn outputs(&self) -> Outputs {
        let state = self.0.borrow();
        Outputs {
            led: state.led_level as u8,
            rgb: state.rgb,
            leds: state.leds,
        }
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.0.borrow().frames.clone()
    }

    /// Array value shown during each wait.
    pub fn array_trace(&self) -> Vec<u8> {
        self.0.borrow().frames.iter().map(|f| f.outputs.leds).collect()
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.0.borrow().frames.iter().map(|f| f.wait_ms).sum()
    }

    fn elapse(&self, ms: u32) {
        let outputs = self.outputs();
        let mut state = self.0.borrow_mut();
        state.frames.push(Frame {
            wait_ms: ms,
            outputs,
        });
        let waits = state.frames.len();
        let due: Vec<u8> = state
            .switch_schedule
            .iter()
            .filter(|(at, _)| *at == waits)
            .map(|(_, bits)| *bits)
            .collect();
        if let Some(bits) = due.last() {
            state.switches = *bits;
        }
        if state.fail_after == Some(waits) {
            state.fail_writes = true;
        }
    }

    fn button_bit(button: u8) -> u8 {
        match button {
            1 => 1 << 1,
            2 => 1 << 4,
            other => panic!("no button {other}"),
        }
    }
}

pub struct MockPin {
    bench: Bench,
    line: Line,
}

impl MockPin {
    fn set(&mut self, high: bool) -> Result<(), MockError> {
        let mut state = self.bench.0.borrow_mut();
        if state.fail_writes {
            return Err(MockError);
        }
        let apply = |byte: &mut u8, bit: u8| {
            if high {
                *byte |= 1 << bit;
            } else {
                *byte &= !(1 << bit);
            }
        };
        match self.line {
            Line::Led => state.led_level = high,
            Line::Rgb(bit) => apply(&mut state.rgb, bit),
            Line::Array(bit) => apply(&mut state.leds, bit),
            Line::Button(_) | Line::Switch(_) => panic!("{:?} is an input", self.line),
        }
        Ok(())
    }

    fn level(&self) -> bool {
        let state = self.bench.0.borrow();
        match self.line {
            Line::Led => state.led_level,
            Line::Rgb(bit) => state.rgb & (1 << bit) != 0,
            Line::Array(bit) => state.leds & (1 << bit) != 0,
            Line::Button(bit) => state.buttons & (1 << bit) != 0,
            Line::Switch(bit) => state.switches & (1 << bit) != 0,
        }
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level())
    }
}

pub struct MockDelay {
    bench: Bench,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.bench.elapse(ns.div_ceil(1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.bench.elapse(ms);
    }
}
