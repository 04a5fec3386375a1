//! Tone cue mapping for NeonBit dashboard change events
//!
//! The core emits [`Event`] descriptions of what changed; this crate maps
//! them to the tone cues an audio collaborator should play. The mapping is
//! deterministic: each event kind has a fixed base frequency, and value
//! events scale the pitch with the new register value so a rising count is
//! audible. Synthesis itself stays outside the workspace — a cue is only a
//! frequency and a duration.

#![no_std]
#![deny(unsafe_code)]

use neonbit_core::{Event, Mode};

/// Duration of an ordinary cue in milliseconds
pub const DEFAULT_DURATION_MS: u16 = 50;

/// A tone an audio collaborator should play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneCue {
    /// Square-wave frequency in Hz
    pub frequency_hz: u16,
    /// Playback duration in milliseconds
    pub duration_ms: u16,
}

impl ToneCue {
    const fn short(frequency_hz: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    const fn long(frequency_hz: u16, duration_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// The cue for an event, or `None` for events that play silently
    ///
    /// Pattern loads and interval changes carry no cue.
    pub fn for_event(event: &Event) -> Option<Self> {
        match *event {
            Event::Stepped { mode, value } => Some(match mode {
                // Counter steps sit an octave up and climb faster
                Mode::Counter => Self::short(880 + 20 * u16::from(value)),
                _ => Self::short(440 + 4 * u16::from(value)),
            }),
            Event::BitToggled { .. } => Some(Self::short(660)),
            Event::ModeChanged { .. } => Some(Self::long(1200, 100)),
            Event::Navigated { direction, .. } => {
                Some(Self::short(if direction > 0 { 1000 } else { 800 }))
            }
            Event::DigitSelected { digit } => Some(Self::short(400 + 50 * u16::from(digit))),
            Event::Reset { .. } => Some(Self::long(200, 200)),
            Event::RunningChanged { running } => {
                Some(Self::long(if running { 800 } else { 200 }, 100))
            }
            Event::Exported => Some(Self::long(1500, 100)),
            Event::PatternLoaded { .. } | Event::IntervalChanged { .. } => None,
        }
    }
}

/// Mute-aware cue source
///
/// Wraps [`ToneCue::for_event`] behind the operator's sound toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CueMapper {
    enabled: bool,
}

impl Default for CueMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl CueMapper {
    /// Create a mapper with sound enabled
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    /// Whether cues are currently produced
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable cue output
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The cue to play for an event, honoring the mute toggle
    pub fn map(&self, event: &Event) -> Option<ToneCue> {
        if !self.enabled {
            return None;
        }
        ToneCue::for_event(event)
    }
}
