//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod preview;
mod simulate;

pub use preview::Preview;
pub use simulate::Simulate;
