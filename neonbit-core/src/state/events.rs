//! Change events emitted by dashboard mutations.
//!
//! Every successful mutation returns one of these descriptions instead of
//! performing side effects itself. Collaborators (renderers, the tone cue
//! mapper) react to the events, so the core never depends on audio or
//! rendering being present.

use super::machine::Mode;

/// Description of a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Operating mode switched (also emitted when re-selecting the
    /// current mode, which still resets the register)
    ModeChanged { mode: Mode },
    /// Register advanced one step, by the scheduler or a direct command
    Stepped { mode: Mode, value: u8 },
    /// A segment was flipped in manual mode
    BitToggled { index: u8, value: u8 },
    /// A full pattern was loaded from operator text
    PatternLoaded { value: u8 },
    /// Counter digit moved forward or backward
    Navigated { direction: i8, digit: u8 },
    /// Counter digit jumped directly
    DigitSelected { digit: u8 },
    /// Register reset to the mode default
    Reset { mode: Mode },
    /// Scheduler started or stopped
    RunningChanged { running: bool },
    /// Scheduler interval changed
    IntervalChanged { interval_ms: u16 },
    /// A state snapshot was exported
    Exported,
}

impl Event {
    /// Whether this event changed the displayed register
    ///
    /// Register-changing events are the ones that append a history sample.
    pub fn changes_register(&self) -> bool {
        matches!(
            self,
            Event::ModeChanged { .. }
                | Event::Stepped { .. }
                | Event::BitToggled { .. }
                | Event::PatternLoaded { .. }
                | Event::Navigated { .. }
                | Event::DigitSelected { .. }
                | Event::Reset { .. }
        )
    }

    /// Whether this event only touched the run state
    pub fn is_run_state_event(&self) -> bool {
        matches!(
            self,
            Event::RunningChanged { .. } | Event::IntervalChanged { .. }
        )
    }
}
