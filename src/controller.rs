//! Switch-driven pattern selection and the polling loop.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, StatefulOutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::config::Timing;
use crate::error::Result;
use crate::hardware::{ButtonStatus, PeripheralSet, SwitchStatus};
use crate::patterns::{Pattern, PatternEngine};

/// Outcome of [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Selection {
    /// All switches off: the buttons decide.
    ButtonsState(ButtonStatus),
    /// SW1 alone.
    CountUp,
    /// SW2 alone.
    CountDown,
    /// SW3 alone.
    Flash,
    /// SW4 alone.
    RingCounter,
    /// Any position with more than one switch on. Falls back to the
    /// button-driven pattern.
    Unrecognized {
        switches: SwitchStatus,
        buttons: ButtonStatus,
    },
}

impl Selection {
    pub fn pattern(self) -> Pattern {
        match self {
            Selection::ButtonsState(buttons) => Pattern::Buttons(buttons),
            Selection::CountUp => Pattern::CountUp,
            Selection::CountDown => Pattern::CountDown,
            Selection::Flash => Pattern::Flash,
            Selection::RingCounter => Pattern::RingCounter,
            Selection::Unrecognized { buttons, .. } => Pattern::Buttons(buttons),
        }
    }
}

/// Picks the pattern for one loop iteration. Depends on nothing but its
/// arguments.
pub fn dispatch(buttons: ButtonStatus, switches: SwitchStatus) -> Selection {
    match switches {
        SwitchStatus::ALL_OFF => Selection::ButtonsState(buttons),
        SwitchStatus::SW1 => Selection::CountUp,
        SwitchStatus::SW2 => Selection::CountDown,
        SwitchStatus::SW3 => Selection::Flash,
        SwitchStatus::SW4 => Selection::RingCounter,
        switches => Selection::Unrecognized { switches, buttons },
    }
}

pub struct Controller<O, I, D> {
    engine: PatternEngine<O, I, D>,
}

impl<O, I, D> Controller<O, I, D>
where
    O: StatefulOutputPin,
    I: InputPin,
    D: DelayNs,
{
    pub fn new(peripherals: PeripheralSet<O, I>, delay: D, timing: Timing) -> Self {
        Self {
            engine: PatternEngine::new(peripherals, delay, timing),
        }
    }

    pub fn engine(&mut self) -> &mut PatternEngine<O, I, D> {
        &mut self.engine
    }

    /// Samples buttons and switches once and runs the selected pattern to
    /// completion.
    pub async fn step(&mut self) -> Result<Selection> {
        let (buttons, switches) = self.engine.peripherals().sample()?;
        let selection = dispatch(buttons, switches);
        trace!(
            "buttons={=u8:#x} switches={=u8:#x} -> {}",
            buttons.bits(),
            switches.bits(),
            selection
        );
        if let Selection::Unrecognized { switches, .. } = selection {
            trace!("no pattern for switches {=u8:#x}", switches.bits());
        }
        self.engine.run(selection.pattern()).await?;
        Ok(selection)
    }

    /// Polls forever. Returns only if a pin reports an error.
    pub async fn run(&mut self) -> Result<Infallible> {
        info!("controller running with {}", self.engine.timing());
        loop {
            self.step().await?;
            let pause = self.engine.timing().poll_interval_ms;
            if pause > 0 {
                self.engine.wait(pause).await;
            }
        }
    }
}
