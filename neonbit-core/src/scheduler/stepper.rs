//! Tick-driven auto-stepping.
//!
//! The stepper owns the run flag and the step interval but no timer of its
//! own: the hosting runtime calls [`Stepper::tick`] with elapsed wall time
//! and applies the number of steps that came due. Stopping clears the
//! elapsed accumulator, so a tick that lands after a stop request can never
//! produce a step (stop-before-any-further-step).

/// Shortest allowed step interval in milliseconds
pub const MIN_INTERVAL_MS: u16 = 50;

/// Longest allowed step interval in milliseconds
pub const MAX_INTERVAL_MS: u16 = 1000;

/// Step interval a fresh session starts with
pub const DEFAULT_INTERVAL_MS: u16 = 250;

/// Run state and step timing for the animation and counter modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stepper {
    running: bool,
    interval_ms: u16,
    /// Time accumulated toward the next step while running
    elapsed_ms: u32,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper {
    /// Create a stopped stepper at the default interval
    pub const fn new() -> Self {
        Self {
            running: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            elapsed_ms: 0,
        }
    }

    /// Whether the stepper is running
    pub const fn running(&self) -> bool {
        self.running
    }

    /// Current step interval in milliseconds
    pub const fn interval_ms(&self) -> u16 {
        self.interval_ms
    }

    /// Start or stop stepping
    pub fn set_running(&mut self, running: bool) {
        if running {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Start stepping from a fresh interval
    pub fn start(&mut self) {
        self.running = true;
        self.elapsed_ms = 0;
    }

    /// Stop stepping and discard any partially elapsed interval
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Change the step interval, clamped to 50-1000 ms
    ///
    /// Takes effect on the next tick; no stop/restart needed.
    pub fn set_interval_ms(&mut self, interval_ms: u16) {
        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
    }

    /// Account for elapsed wall time and return the number of steps due
    ///
    /// Returns 0 and accumulates nothing while stopped.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.elapsed_ms += elapsed_ms;
        let interval = u32::from(self.interval_ms);
        let due = self.elapsed_ms / interval;
        self.elapsed_ms %= interval;
        due
    }
}
