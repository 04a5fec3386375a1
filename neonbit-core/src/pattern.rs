//! Segment pattern representation and binary/decimal conversion.
//!
//! A pattern is the on/off state of the seven segments a..g, stored packed
//! with segment a in bit 6 (MSB-first). That layout makes the decimal
//! register value and the raw bits the same number: a pattern read as a
//! 7-character binary string `abcdefg` equals its value in [0, 127].

use core::fmt;

use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of segments in a single digit
pub const SEGMENT_COUNT: usize = 7;

/// Segment labels in display order (bit 6 down to bit 0)
pub const SEGMENT_LABELS: [char; SEGMENT_COUNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];

/// Largest value a 7-bit pattern can represent
pub const MAX_VALUE: u8 = 0x7F;

/// On/off state of the seven segments of one digit
///
/// Bit 6 is segment a, bit 0 is segment g. The top bit is always clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// All segments off
    pub const BLANK: Self = Self(0);

    /// Build a pattern from its MSB-first decimal interpretation
    ///
    /// Values above 127 are masked to the low 7 bits.
    pub const fn from_value(value: u8) -> Self {
        Self(value & MAX_VALUE)
    }

    /// MSB-first decimal interpretation of the pattern (0-127)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether the segment at `index` (0 = a .. 6 = g) is lit
    ///
    /// Out-of-range indices read as unlit.
    pub const fn is_lit(self, index: usize) -> bool {
        index < SEGMENT_COUNT && self.0 & (1 << (SEGMENT_COUNT - 1 - index)) != 0
    }

    /// Return the pattern with the segment at `index` flipped
    pub fn toggled(self, index: usize) -> Result<Self, Error> {
        if index >= SEGMENT_COUNT {
            return Err(Error::OutOfRange);
        }
        Ok(Self(self.0 ^ (1 << (SEGMENT_COUNT - 1 - index))))
    }

    /// Parse free-form operator text into a pattern
    ///
    /// Sanitize rule: drop every character that is not '0' or '1', keep the
    /// first 7 that remain, right-pad with '0' to exactly 7 bits.
    pub fn from_text(raw: &str) -> Self {
        let mut bits = 0u8;
        let mut count = 0usize;
        for ch in raw.chars() {
            if count == SEGMENT_COUNT {
                break;
            }
            match ch {
                '0' => count += 1,
                '1' => {
                    bits |= 1 << (SEGMENT_COUNT - 1 - count);
                    count += 1;
                }
                _ => {}
            }
        }
        Self(bits)
    }
}

impl fmt::Display for SegmentPattern {
    /// Formats as the 7-character bit string `abcdefg`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..SEGMENT_COUNT {
            f.write_str(if self.is_lit(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
