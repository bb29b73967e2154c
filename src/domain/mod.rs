//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the aligned sample channels (`SampleSeries`) and their summary (`SummaryStats`)
//! - the fitted model and search result (`CoolingModel`, `Equilibrium`)
//! - run configuration (`AnalysisConfig`, `RefTimeMode`)
//! - the exported curve file schema (`CurveFile`)

pub mod types;

pub use types::*;
