//! Operating mode state machine and register model

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Mode, Register};
