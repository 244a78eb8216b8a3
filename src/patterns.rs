//! The five LED patterns.
//!
//! A pattern runs to completion before the controller samples the inputs
//! again. The counting and ring patterns re-read the switches after every
//! step and stop as soon as they no longer show the position that selected
//! them; that check is the only point where a pattern can be left early.

use embedded_hal::digital::{InputPin, StatefulOutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::config::Timing;
use crate::error::Result;
use crate::hardware::pmod_8ld::{ALL_OFF, ALL_ON, EVEN, ODD};
use crate::hardware::traits::OutputPort;
use crate::hardware::{ButtonStatus, Color, PeripheralSet, SwitchStatus};

/// Pattern to run, with whatever input it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Pattern {
    /// Static combination picked by the buttons, or a 1 Hz flash when both
    /// are held.
    Buttons(ButtonStatus),
    /// Binary count 0..=255 on the array.
    CountUp,
    /// Binary count down from 255, wrapping past 0.
    CountDown,
    /// One 1 Hz on/off cycle of every output.
    Flash,
    /// A single lit LED walking from LED0 to LED7.
    RingCounter,
}

pub struct PatternEngine<O, I, D> {
    peripherals: PeripheralSet<O, I>,
    delay: D,
    timing: Timing,
}

impl<O, I, D> PatternEngine<O, I, D>
where
    O: StatefulOutputPin,
    I: InputPin,
    D: DelayNs,
{
    pub fn new(peripherals: PeripheralSet<O, I>, delay: D, timing: Timing) -> Self {
        Self {
            peripherals,
            delay,
            timing,
        }
    }

    pub fn peripherals(&mut self) -> &mut PeripheralSet<O, I> {
        &mut self.peripherals
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn release(self) -> (PeripheralSet<O, I>, D) {
        (self.peripherals, self.delay)
    }

    pub async fn run(&mut self, pattern: Pattern) -> Result<()> {
        match pattern {
            Pattern::Buttons(status) => self.buttons(status).await,
            Pattern::CountUp => self.count_up().await,
            Pattern::CountDown => self.count_down().await,
            Pattern::Flash => self.flash().await,
            Pattern::RingCounter => self.ring_counter().await,
        }
    }

    /// | Buttons        | LED        | RGB            | Array     |
    /// |----------------|------------|----------------|-----------|
    /// | both pressed   | 1 Hz flash | 1 Hz blue flash| off       |
    /// | button 1 only  | on         | off            | 0,2,4,6   |
    /// | button 2 only  | off        | pink           | 1,3,5,7   |
    /// | none           | off        | green          | all on    |
    ///
    /// Only the both-pressed case waits; the others return immediately.
    pub async fn buttons(&mut self, status: ButtonStatus) -> Result<()> {
        match (status.button1_pressed(), status.button2_pressed()) {
            (true, true) => {
                self.peripherals.show(true, Color::Blue, ALL_OFF)?;
                self.wait(self.timing.flash_ms).await;
                self.peripherals.show(false, Color::Off, ALL_OFF)?;
                self.wait(self.timing.flash_ms).await;
            }
            (true, false) => self.peripherals.show(true, Color::Off, EVEN)?,
            (false, true) => self.peripherals.show(false, Color::Pink, ODD)?,
            (false, false) => self.peripherals.show(false, Color::Green, ALL_ON)?,
        }
        Ok(())
    }

    pub async fn count_up(&mut self) -> Result<()> {
        self.peripherals.show(true, Color::Red, ALL_OFF)?;
        for count in 0..=u8::MAX {
            self.peripherals.leds.write(count)?;
            self.wait(self.timing.count_step_ms).await;
            if !self.still_selected(SwitchStatus::SW1)? {
                debug!("count up left at {=u8}", count);
                break;
            }
        }
        Ok(())
    }

    /// Never ends on its own: after 0 the count wraps to 255 and carries on
    /// until the switches move.
    pub async fn count_down(&mut self) -> Result<()> {
        self.peripherals.show(false, Color::Blue, ALL_ON)?;
        let mut count = u8::MAX;
        loop {
            self.peripherals.leds.write(count)?;
            self.wait(self.timing.count_step_ms).await;
            if !self.still_selected(SwitchStatus::SW2)? {
                debug!("count down left at {=u8}", count);
                return Ok(());
            }
            count = count.wrapping_sub(1);
        }
    }

    pub async fn flash(&mut self) -> Result<()> {
        self.peripherals.show(true, Color::Green, ALL_ON)?;
        self.wait(self.timing.flash_ms).await;
        self.peripherals.show(false, Color::Off, ALL_OFF)?;
        self.wait(self.timing.flash_ms).await;
        Ok(())
    }

    pub async fn ring_counter(&mut self) -> Result<()> {
        self.peripherals.show(false, Color::Off, ALL_OFF)?;
        let mut bit: u8 = 0x01;
        for _ in 0..8 {
            self.peripherals.leds.write(bit)?;
            self.wait(self.timing.ring_step_ms).await;
            bit <<= 1;
            if !self.still_selected(SwitchStatus::SW4)? {
                break;
            }
        }
        Ok(())
    }

    pub async fn wait(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }

    fn still_selected(&mut self, selected: SwitchStatus) -> Result<bool> {
        Ok(self.peripherals.switches.status()? == selected)
    }
}
