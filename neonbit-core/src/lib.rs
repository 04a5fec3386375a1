//! Renderer-agnostic core logic for the NeonBit 7-segment dashboard
//!
//! This crate contains the deterministic model behind the dashboard UI and
//! nothing else — no rendering, no audio, no file I/O:
//!
//! - Segment pattern representation and binary/decimal conversion
//! - The fixed digit-to-pattern truth table
//! - The three-mode register state machine (animation / manual / counter)
//! - The auto-stepping scheduler
//! - The rolling sample history for signal visualization
//! - The export snapshot format
//!
//! Mutations go through a [`Dashboard`] and return [`Event`] descriptions of
//! what changed; collaborators (renderers, tone generators) react to those
//! events instead of the core calling into them.

#![no_std]
#![deny(unsafe_code)]

pub mod dashboard;
pub mod digits;
pub mod export;
pub mod history;
pub mod pattern;
pub mod scheduler;
pub mod state;

pub use dashboard::Dashboard;
pub use digits::DIGIT_COUNT;
pub use export::Snapshot;
pub use history::{HistoryBuffer, HISTORY_CAPACITY};
pub use pattern::{SegmentPattern, SEGMENT_COUNT, SEGMENT_LABELS};
pub use scheduler::{Stepper, DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
pub use state::{Event, Mode, Register};

/// Errors surfaced by fallible core operations
///
/// Commands on the [`Dashboard`] surface tolerate mode violations and report
/// them as `None`; the [`Error::IllegalForMode`] variant is returned by the
/// [`Register`] transition methods for callers that drive the register
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Digit outside 0-9 or segment index outside 0-6
    OutOfRange,
    /// Operation not permitted in the active mode
    IllegalForMode,
}
