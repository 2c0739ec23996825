//! Cart state transitions: the pure reducer and its derived aggregates.

pub mod reducer;
pub mod totals;

pub use reducer::*;
pub use totals::*;
