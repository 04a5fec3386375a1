//! Session controller tying register, scheduler, and history together.
//!
//! One `Dashboard` owns the whole model for a running session; all
//! mutations funnel through it on a single logical thread of control.
//! Commands that are illegal for the active mode are tolerated and return
//! `None` instead of an error, matching the UI-first tolerance model.
//! Every register-changing command appends a history sample and returns an
//! [`Event`] for external collaborators.

use crate::export::Snapshot;
use crate::history::HistoryBuffer;
use crate::pattern::SegmentPattern;
use crate::scheduler::Stepper;
use crate::state::{Event, Mode, Register};
use crate::Error;

/// The dashboard model: mode-tagged register, scheduler run state, and
/// sample history
pub struct Dashboard {
    register: Register,
    stepper: Stepper,
    history: HistoryBuffer,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Create a session in animation mode, halted, all segments off
    pub fn new() -> Self {
        let mut dashboard = Self {
            register: Register::default(),
            stepper: Stepper::new(),
            history: HistoryBuffer::new(),
        };
        // The initial register value is the first visible sample
        dashboard.record_sample();
        dashboard
    }

    /// Active operating mode
    pub fn mode(&self) -> Mode {
        self.register.mode()
    }

    /// Current segment pattern
    pub fn pattern(&self) -> SegmentPattern {
        self.register.pattern()
    }

    /// Current decimal register value
    pub fn value(&self) -> u8 {
        self.register.value()
    }

    /// Whether the scheduler is running
    pub fn running(&self) -> bool {
        self.stepper.running()
    }

    /// Current scheduler interval in milliseconds
    pub fn interval_ms(&self) -> u16 {
        self.stepper.interval_ms()
    }

    /// History snapshot, newest-first
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Switch operating mode
    ///
    /// Always legal, including re-selecting the active mode. Stops the
    /// scheduler unconditionally and resets the register to the mode
    /// default.
    pub fn select_mode(&mut self, mode: Mode) -> Event {
        self.stepper.stop();
        self.register = Register::reset_for(mode);
        self.record_sample();
        Event::ModeChanged { mode }
    }

    /// Flip the segment at `index` (manual mode only)
    pub fn toggle_bit(&mut self, index: usize) -> Option<Event> {
        match self.register.toggle_bit(index) {
            Ok(value) => {
                self.record_sample();
                Some(Event::BitToggled {
                    index: index as u8,
                    value,
                })
            }
            Err(error) => {
                debug_assert_ne!(error, Error::OutOfRange, "segment index out of range");
                None
            }
        }
    }

    /// Load a pattern from free-form operator text (manual and animation
    /// modes only)
    ///
    /// The text is sanitized to exactly 7 bits before applying. In counter
    /// mode the sanitized pattern is computed but never applied and the
    /// register is left untouched.
    pub fn set_pattern_from_text(&mut self, raw: &str) -> Option<Event> {
        let pattern = SegmentPattern::from_text(raw);
        let value = self.register.load_pattern(pattern).ok()?;
        self.record_sample();
        Some(Event::PatternLoaded { value })
    }

    /// Advance the register one step (animation and counter modes only)
    ///
    /// Normally invoked through [`Dashboard::tick`]; exposed for direct
    /// single-stepping.
    pub fn step(&mut self) -> Option<Event> {
        let value = self.register.step().ok()?;
        self.record_sample();
        Some(Event::Stepped {
            mode: self.register.mode(),
            value,
        })
    }

    /// Move the counter digit forward or backward (counter mode only)
    pub fn navigate(&mut self, direction: i8) -> Option<Event> {
        let digit = self.register.navigate(direction).ok()?;
        self.record_sample();
        Some(Event::Navigated { direction, digit })
    }

    /// Stop the scheduler and reset the register to the mode default
    ///
    /// Legal in any mode; the mode itself is kept.
    pub fn reset(&mut self) -> Event {
        self.stepper.stop();
        let mode = self.register.mode();
        self.register = Register::reset_for(mode);
        self.record_sample();
        Event::Reset { mode }
    }

    /// Jump the counter directly to a digit (counter mode only)
    pub fn select_digit(&mut self, digit: u8) -> Option<Event> {
        match self.register.select_digit(digit) {
            Ok(digit) => {
                self.record_sample();
                Some(Event::DigitSelected { digit })
            }
            Err(error) => {
                debug_assert_ne!(error, Error::OutOfRange, "digit out of range");
                None
            }
        }
    }

    /// Start or stop the scheduler
    ///
    /// A no-op in manual mode, which never runs the scheduler.
    pub fn set_running(&mut self, running: bool) -> Option<Event> {
        if self.register.mode() == Mode::Manual {
            return None;
        }
        self.stepper.set_running(running);
        Some(Event::RunningChanged { running })
    }

    /// Change the scheduler interval, clamped to 50-1000 ms
    ///
    /// Takes effect on the next tick. Legal in any mode; the interval is
    /// simply dormant while the scheduler cannot run.
    pub fn set_interval_ms(&mut self, interval_ms: u16) -> Event {
        self.stepper.set_interval_ms(interval_ms);
        Event::IntervalChanged {
            interval_ms: self.stepper.interval_ms(),
        }
    }

    /// Account for elapsed wall time and apply any steps that came due
    ///
    /// Each applied step records a history sample; the event for the last
    /// step is returned. Nothing happens while the scheduler is stopped.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Event> {
        let due = self.stepper.tick(elapsed_ms);
        let mut last = None;
        for _ in 0..due {
            last = self.step();
        }
        last
    }

    /// Capture an export snapshot with a caller-supplied ISO-8601 timestamp
    ///
    /// The core has no clock; the hosting runtime provides the timestamp.
    pub fn snapshot(&self, timestamp: &str) -> Snapshot {
        Snapshot::capture(self, timestamp)
    }

    fn record_sample(&mut self) {
        self.history
            .record(self.register.value(), self.register.mode());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits;
    use crate::scheduler::DEFAULT_INTERVAL_MS;

    #[test]
    fn test_initial_state() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.mode(), Mode::Animation);
        assert_eq!(dashboard.value(), 0);
        assert_eq!(dashboard.pattern(), SegmentPattern::BLANK);
        assert!(!dashboard.running());
        assert_eq!(dashboard.interval_ms(), DEFAULT_INTERVAL_MS);
        // The starting value is already visible in the history
        assert_eq!(dashboard.history().latest(), Some(0.0));
    }

    #[test]
    fn test_animation_first_step() {
        let mut dashboard = Dashboard::new();
        let event = dashboard.step();
        assert_eq!(
            event,
            Some(Event::Stepped {
                mode: Mode::Animation,
                value: 1
            })
        );
        assert_eq!(dashboard.value(), 1);

        let mut bits = heapless::String::<8>::new();
        use core::fmt::Write;
        write!(bits, "{}", dashboard.pattern()).unwrap();
        assert_eq!(bits.as_str(), "0000001");
    }

    #[test]
    fn test_mode_switch_stops_and_resets() {
        let mut dashboard = Dashboard::new();
        dashboard.set_running(true);
        dashboard.step();
        assert!(dashboard.running());

        let event = dashboard.select_mode(Mode::Counter);
        assert_eq!(event, Event::ModeChanged { mode: Mode::Counter });
        assert!(!dashboard.running());
        assert_eq!(dashboard.value(), 0);
        assert_eq!(dashboard.pattern(), digits::lookup(0).unwrap());

        // Switching to manual resets to all segments off
        dashboard.select_mode(Mode::Manual);
        assert_eq!(dashboard.pattern(), SegmentPattern::BLANK);
    }

    #[test]
    fn test_reselecting_mode_resets() {
        let mut dashboard = Dashboard::new();
        dashboard.step();
        dashboard.step();
        assert_eq!(dashboard.value(), 2);

        dashboard.select_mode(Mode::Animation);
        assert_eq!(dashboard.value(), 0);
    }

    #[test]
    fn test_manual_never_runs() {
        let mut dashboard = Dashboard::new();
        dashboard.select_mode(Mode::Manual);

        assert_eq!(dashboard.set_running(true), None);
        assert!(!dashboard.running());
        assert_eq!(dashboard.tick(10_000), None);
        assert_eq!(dashboard.step(), None);
        assert_eq!(dashboard.value(), 0);
    }

    #[test]
    fn test_toggle_bit_gated_by_mode() {
        let mut dashboard = Dashboard::new();
        // Ignored in animation mode
        assert_eq!(dashboard.toggle_bit(0), None);

        dashboard.select_mode(Mode::Manual);
        let event = dashboard.toggle_bit(0);
        assert_eq!(
            event,
            Some(Event::BitToggled {
                index: 0,
                value: 0b100_0000
            })
        );
        assert_eq!(dashboard.value(), 64);
    }

    #[test]
    fn test_pattern_text_ignored_in_counter() {
        let mut dashboard = Dashboard::new();
        dashboard.select_mode(Mode::Counter);
        let samples_before = dashboard.history().len();

        assert_eq!(dashboard.set_pattern_from_text("1111111"), None);
        assert_eq!(dashboard.value(), 0);
        assert_eq!(dashboard.pattern(), digits::lookup(0).unwrap());
        assert_eq!(dashboard.history().len(), samples_before);
    }

    #[test]
    fn test_pattern_text_applies_in_manual_and_animation() {
        let mut dashboard = Dashboard::new();
        let event = dashboard.set_pattern_from_text("10xx1");
        assert_eq!(event, Some(Event::PatternLoaded { value: 0b101_0000 }));
        assert_eq!(dashboard.value(), 80);

        dashboard.select_mode(Mode::Manual);
        dashboard.set_pattern_from_text("0110000");
        assert_eq!(dashboard.pattern(), digits::lookup(1).unwrap());
    }

    #[test]
    fn test_counter_navigation_and_selection() {
        let mut dashboard = Dashboard::new();
        dashboard.select_mode(Mode::Counter);

        assert_eq!(
            dashboard.navigate(-1),
            Some(Event::Navigated {
                direction: -1,
                digit: 9
            })
        );
        assert_eq!(
            dashboard.select_digit(5),
            Some(Event::DigitSelected { digit: 5 })
        );
        assert_eq!(dashboard.pattern(), digits::lookup(5).unwrap());

        // Navigation is counter-only
        dashboard.select_mode(Mode::Animation);
        assert_eq!(dashboard.navigate(1), None);
        assert_eq!(dashboard.select_digit(3), None);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut dashboard = Dashboard::new();
        dashboard.select_mode(Mode::Counter);
        dashboard.select_digit(7);
        dashboard.set_running(true);

        let event = dashboard.reset();
        assert_eq!(event, Event::Reset { mode: Mode::Counter });
        assert_eq!(dashboard.mode(), Mode::Counter);
        assert_eq!(dashboard.value(), 0);
        assert!(!dashboard.running());
    }

    #[test]
    fn test_tick_drives_steps_and_history() {
        let mut dashboard = Dashboard::new();
        let samples_before = dashboard.history().len();
        dashboard.set_running(true);

        // Two intervals elapse in one tick: two steps, two samples
        let event = dashboard.tick(u32::from(DEFAULT_INTERVAL_MS) * 2);
        assert_eq!(
            event,
            Some(Event::Stepped {
                mode: Mode::Animation,
                value: 2
            })
        );
        assert_eq!(dashboard.value(), 2);
        assert_eq!(dashboard.history().len(), samples_before + 2);

        // Stopping discards any pending interval
        dashboard.set_running(false);
        assert_eq!(dashboard.tick(10_000), None);
        assert_eq!(dashboard.value(), 2);
    }

    #[test]
    fn test_counter_tick_wraps() {
        let mut dashboard = Dashboard::new();
        dashboard.select_mode(Mode::Counter);
        dashboard.set_running(true);
        dashboard.set_interval_ms(50);

        for _ in 0..12 {
            dashboard.tick(50);
        }
        assert_eq!(dashboard.value(), 2);
        assert_eq!(dashboard.pattern(), digits::lookup(2).unwrap());
    }

    #[test]
    fn test_interval_change_while_running() {
        let mut dashboard = Dashboard::new();
        dashboard.set_running(true);

        let event = dashboard.set_interval_ms(100);
        assert_eq!(event, Event::IntervalChanged { interval_ms: 100 });
        assert!(dashboard.running());
        assert_eq!(dashboard.tick(100), Some(Event::Stepped {
            mode: Mode::Animation,
            value: 1
        }));

        // Clamped below the floor
        let event = dashboard.set_interval_ms(1);
        assert_eq!(event, Event::IntervalChanged { interval_ms: 50 });
    }
}
