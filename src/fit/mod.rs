//! Model fitting and the computations built on the fitted model.
//!
//! Responsibilities:
//!
//! - solve the decay constants from three raw values (`fitter`)
//! - predict the ideal curve on the measured time grid (`curve`)
//! - estimate the time to reach ambient (`equilibrium`)

pub mod curve;
pub mod equilibrium;
pub mod fitter;

pub use curve::*;
pub use equilibrium::*;
pub use fitter::*;
