//! Pattern timing.

/// Step lengths used by the patterns, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Timing {
    /// Half period of the 1 Hz flashes (both-buttons flash and the flash
    /// pattern).
    pub flash_ms: u32,
    /// Time each value stays on the array while counting up or down.
    pub count_step_ms: u32,
    /// Time each position stays lit in the ring counter.
    pub ring_step_ms: u32,
    /// Pause between two controller iterations. Zero polls back to back.
    pub poll_interval_ms: u32,
}

impl Timing {
    pub const fn new() -> Self {
        Self {
            flash_ms: 500,
            count_step_ms: 100,
            ring_step_ms: 500,
            poll_interval_ms: 0,
        }
    }

    pub const fn with_poll_interval(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}
