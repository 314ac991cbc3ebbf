mod flags;
pub mod tracing;

pub use flags::*;
pub use tracing::{CapturedEvent, captured_events};
