//! Auto-stepping scheduler

pub mod stepper;

pub use stepper::{Stepper, DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
