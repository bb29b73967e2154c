//! Mathematical utilities: directional decimal rounding.

pub mod rounding;

pub use rounding::*;
