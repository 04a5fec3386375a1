//! Operating modes and the mode-tagged register.
//!
//! The register is a tagged variant per mode, so each mode carries only the
//! state that is meaningful for it: the animation counter stores its 0-127
//! value, manual mode stores the raw segment pattern, counter mode stores
//! the 0-9 digit. The pattern/value pair visible to renderers is derived,
//! which keeps the mode invariants intact by construction. The transition
//! methods below are the only mutation path.

use crate::digits::{self, DIGIT_PATTERNS};
use crate::pattern::{SegmentPattern, MAX_VALUE};
use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dashboard operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Mode {
    /// Free-running 0-127 binary counter
    #[default]
    Animation,
    /// Operator edits segments bit by bit
    Manual,
    /// 0-9 decimal digit counter driven by the truth table
    Counter,
}

impl Mode {
    /// Wire/export name of the mode
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Animation => "ANIMATION",
            Mode::Manual => "MANUAL",
            Mode::Counter => "COUNTER",
        }
    }
}

/// The displayed register: current pattern and decimal value, tagged by mode
///
/// Only the field backing the active mode is stored; `pattern()` and
/// `value()` derive the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Animation counter value, 0-127
    Animation { value: u8 },
    /// Operator-set segment pattern
    Manual { pattern: SegmentPattern },
    /// Counter digit, 0-9
    Counter { digit: u8 },
}

impl Default for Register {
    fn default() -> Self {
        Self::reset_for(Mode::Animation)
    }
}

impl Register {
    /// The register a mode starts in: digit 0 for counter mode, all
    /// segments off otherwise
    pub const fn reset_for(mode: Mode) -> Self {
        match mode {
            Mode::Animation => Register::Animation { value: 0 },
            Mode::Manual => Register::Manual {
                pattern: SegmentPattern::BLANK,
            },
            Mode::Counter => Register::Counter { digit: 0 },
        }
    }

    /// Mode this register belongs to
    pub const fn mode(&self) -> Mode {
        match self {
            Register::Animation { .. } => Mode::Animation,
            Register::Manual { .. } => Mode::Manual,
            Register::Counter { .. } => Mode::Counter,
        }
    }

    /// Current segment pattern
    pub fn pattern(&self) -> SegmentPattern {
        match *self {
            Register::Animation { value } => SegmentPattern::from_value(value),
            Register::Manual { pattern } => pattern,
            // digit stays in 0-9 through every transition
            Register::Counter { digit } => DIGIT_PATTERNS[digit as usize],
        }
    }

    /// Current decimal value (0-127 in animation/manual, 0-9 in counter)
    pub fn value(&self) -> u8 {
        match *self {
            Register::Animation { value } => value,
            Register::Manual { pattern } => pattern.value(),
            Register::Counter { digit } => digit,
        }
    }

    /// Advance one step: `(value + 1) mod 128` in animation mode,
    /// `(digit + 1) mod 10` in counter mode
    ///
    /// Returns the new value. Manual mode has no time-driven evolution.
    ///
    /// # Errors
    /// [`Error::IllegalForMode`] in manual mode.
    pub fn step(&mut self) -> Result<u8, Error> {
        match self {
            Register::Animation { value } => {
                *value = (*value + 1) & MAX_VALUE;
                Ok(*value)
            }
            Register::Counter { digit } => {
                *digit = (*digit + 1) % 10;
                Ok(*digit)
            }
            Register::Manual { .. } => Err(Error::IllegalForMode),
        }
    }

    /// Flip the segment at `index` (0 = a .. 6 = g), manual mode only
    ///
    /// Returns the new value.
    ///
    /// # Errors
    /// [`Error::IllegalForMode`] outside manual mode, [`Error::OutOfRange`]
    /// for an index outside 0-6.
    pub fn toggle_bit(&mut self, index: usize) -> Result<u8, Error> {
        match self {
            Register::Manual { pattern } => {
                *pattern = pattern.toggled(index)?;
                Ok(pattern.value())
            }
            _ => Err(Error::IllegalForMode),
        }
    }

    /// Replace the pattern wholesale, manual and animation modes only
    ///
    /// Returns the new value. Counter mode rejects this path: its register
    /// is defined by the digit, not by free-form bits.
    ///
    /// # Errors
    /// [`Error::IllegalForMode`] in counter mode.
    pub fn load_pattern(&mut self, pattern: SegmentPattern) -> Result<u8, Error> {
        match self {
            Register::Animation { value } => {
                *value = pattern.value();
                Ok(*value)
            }
            Register::Manual { pattern: current } => {
                *current = pattern;
                Ok(current.value())
            }
            Register::Counter { .. } => Err(Error::IllegalForMode),
        }
    }

    /// Move the counter digit by `direction` with non-negative wraparound,
    /// counter mode only
    ///
    /// Returns the new digit.
    ///
    /// # Errors
    /// [`Error::IllegalForMode`] outside counter mode.
    pub fn navigate(&mut self, direction: i8) -> Result<u8, Error> {
        match self {
            Register::Counter { digit } => {
                // Add-then-mod keeps the result non-negative for direction -1
                *digit = (i16::from(*digit) + i16::from(direction) + 10).rem_euclid(10) as u8;
                Ok(*digit)
            }
            _ => Err(Error::IllegalForMode),
        }
    }

    /// Jump directly to a digit, counter mode only
    ///
    /// # Errors
    /// [`Error::IllegalForMode`] outside counter mode, [`Error::OutOfRange`]
    /// for a digit outside 0-9.
    pub fn select_digit(&mut self, new_digit: u8) -> Result<u8, Error> {
        match self {
            Register::Counter { digit } => {
                // Validates the digit against the table
                digits::lookup(new_digit)?;
                *digit = new_digit;
                Ok(*digit)
            }
            _ => Err(Error::IllegalForMode),
        }
    }
}
