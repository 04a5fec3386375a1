//! Rolling history of register values for signal visualization.
//!
//! Samples are normalized onto the animation scale (0-127) so the sparkline
//! renderer can treat all modes uniformly: counter-mode values 0-9 are
//! stretched by 12.7. The buffer holds the 40 most recent samples, newest
//! first, and evicts the oldest on overflow. It is never cleared on mode
//! change, so samples from different modes coexist in one snapshot.

use heapless::Deque;

use crate::state::Mode;

/// Number of samples retained
pub const HISTORY_CAPACITY: usize = 40;

/// Factor mapping the counter range 0-9 onto the animation range 0-127
const COUNTER_SCALE: f32 = 12.7;

/// Fixed-capacity rolling buffer of normalized register samples
pub struct HistoryBuffer {
    /// Newest sample at the front
    samples: Deque<f32, HISTORY_CAPACITY>,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Record a register value, normalizing by mode
    pub fn record(&mut self, raw_value: u8, mode: Mode) {
        let sample = if mode == Mode::Counter {
            f32::from(raw_value) * COUNTER_SCALE
        } else {
            f32::from(raw_value)
        };

        if self.samples.is_full() {
            self.samples.pop_back();
        }
        // Cannot fail: a slot was just freed if needed
        let _ = self.samples.push_front(sample);
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<f32> {
        self.samples.front().copied()
    }

    /// Samples newest-first
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }
}
