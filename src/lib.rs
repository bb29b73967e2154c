//! `newton-cooling` library crate.
//!
//! Fits Newton's law of cooling, `T(t) = C * exp(k t) + T_ambient`, to a
//! two-channel temperature log and estimates when the object returns to
//! ambient.
//!
//! The binary (`cool`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable from other tools

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
