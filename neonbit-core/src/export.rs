//! Export snapshot format.
//!
//! A snapshot freezes the visible register state for the file-save
//! collaborator: ISO-8601 timestamp, mode, decimal value, and the 7-bit
//! pattern as a binary string. The text form is a 2-space-indented JSON
//! object. The core has no clock, so the timestamp comes from the caller.

use core::fmt::{self, Write};

use heapless::String;

use crate::dashboard::Dashboard;
use crate::pattern::SEGMENT_COUNT;
use crate::state::Mode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity for ISO-8601 timestamps (e.g. `2024-06-01T12:34:56.789Z`)
pub const TIMESTAMP_CAPACITY: usize = 32;

/// Capacity for the rendered snapshot text
pub const TEXT_CAPACITY: usize = 128;

/// Frozen register state for export
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Caller-supplied ISO-8601 capture time
    pub timestamp: String<TIMESTAMP_CAPACITY>,
    /// Mode at capture time
    pub mode: Mode,
    /// Decimal register value
    pub decimal: u8,
    /// 7-character '0'/'1' segment string, bit order a..g
    pub binary: String<{ SEGMENT_COUNT }>,
}

impl Snapshot {
    /// Capture the current dashboard state
    ///
    /// Timestamps longer than [`TIMESTAMP_CAPACITY`] are truncated.
    pub fn capture(dashboard: &Dashboard, timestamp: &str) -> Self {
        let mut stamp = String::new();
        for ch in timestamp.chars() {
            if stamp.push(ch).is_err() {
                break;
            }
        }

        let mut binary = String::new();
        // Cannot fail: the pattern renders exactly SEGMENT_COUNT chars
        let _ = write!(binary, "{}", dashboard.pattern());

        Self {
            timestamp: stamp,
            mode: dashboard.mode(),
            decimal: dashboard.value(),
            binary,
        }
    }

    /// Render the snapshot as formatted structured text
    pub fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{{")?;
        writeln!(out, "  \"timestamp\": \"{}\",", self.timestamp)?;
        writeln!(out, "  \"mode\": \"{}\",", self.mode.as_str())?;
        writeln!(out, "  \"decimal\": {},", self.decimal)?;
        writeln!(out, "  \"binary\": \"{}\"", self.binary)?;
        write!(out, "}}")
    }

    /// Render the snapshot into an owned fixed-capacity string
    pub fn to_text(&self) -> Result<String<TEXT_CAPACITY>, fmt::Error> {
        let mut text = String::new();
        self.write_text(&mut text)?;
        Ok(text)
    }
}
