//! The decimal digit truth table.
//!
//! Fixed mapping between the digits 0-9 and their canonical segment
//! patterns (common cathode, bit order a..g). The table is immutable for
//! the process lifetime and both lookup directions are pure.

use crate::pattern::SegmentPattern;
use crate::Error;

/// Number of decodable digits
pub const DIGIT_COUNT: usize = 10;

/// Canonical digit-to-pattern table, indexed by digit
pub const DIGIT_PATTERNS: [SegmentPattern; DIGIT_COUNT] = [
    SegmentPattern::from_value(0b111_1110), // 0
    SegmentPattern::from_value(0b011_0000), // 1
    SegmentPattern::from_value(0b110_1101), // 2
    SegmentPattern::from_value(0b111_1001), // 3
    SegmentPattern::from_value(0b011_0011), // 4
    SegmentPattern::from_value(0b101_1011), // 5
    SegmentPattern::from_value(0b101_1111), // 6
    SegmentPattern::from_value(0b111_0000), // 7
    SegmentPattern::from_value(0b111_1111), // 8
    SegmentPattern::from_value(0b111_1011), // 9
];

/// Look up the canonical pattern for a decimal digit
///
/// # Errors
/// [`Error::OutOfRange`] if `digit` is not in 0-9.
pub fn lookup(digit: u8) -> Result<SegmentPattern, Error> {
    DIGIT_PATTERNS
        .get(digit as usize)
        .copied()
        .ok_or(Error::OutOfRange)
}

/// Find the digit a pattern decodes to, if any
///
/// Returns `None` for patterns that are not a canonical digit.
pub fn reverse_lookup(pattern: SegmentPattern) -> Option<u8> {
    DIGIT_PATTERNS
        .iter()
        .position(|&p| p == pattern)
        .map(|digit| digit as u8)
}
