//! Newton cooling model implementation.
//!
//! The model is a small, pure function so that fitting and search code can
//! stay simple.

pub mod model;

pub use model::*;
