//! Terminal charts of measured channels and the ideal curve.

pub mod ascii;

pub use ascii::*;
