//! Command-line parsing for the Newton cooling fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_REF_INDEX, DEFAULT_STEP, DEFAULT_TOLERANCE, RefTimeMode,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "cool",
    version,
    about = "Newton's law of cooling fitter for two-channel sensor logs"
)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the cooling model to a data file, print constants and equilibrium time,
    /// and optionally plot/export.
    Analyze(AnalyzeArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
    /// Write a synthetic heat-then-cool data set in the input format.
    Simulate(SimulateArgs),
}

/// Options for the analysis run.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Data file: `timestamp,sensor_a,sensor_b` per line, no header.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Field delimiter.
    #[arg(short = 'd', long, default_value_t = ',')]
    pub delimiter: char,

    /// Skip malformed lines instead of aborting.
    #[arg(long)]
    pub skip_invalid: bool,

    /// Index of the sample used to solve the decay rate.
    #[arg(long, default_value_t = DEFAULT_REF_INDEX)]
    pub ref_index: usize,

    /// Clock used for the reference sample's time.
    #[arg(long, value_enum, default_value_t = RefTimeMode::Absolute)]
    pub ref_time: RefTimeMode,

    /// Time resolution of the equilibrium search.
    #[arg(long, default_value_t = DEFAULT_STEP)]
    pub step: f64,

    /// Half-width of the band around ambient that counts as equilibrium.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Give up the equilibrium search after this many steps.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u64,

    /// Render ASCII charts in the terminal (the default; undoes an earlier `--no-plot`).
    #[arg(long, overrides_with = "no_plot")]
    pub plot: bool,

    /// Disable the terminal charts.
    #[arg(long, overrides_with = "plot")]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export per-sample results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the fitted model and predicted curve to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `cool analyze --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

/// Options for synthetic data generation.
#[derive(Debug, Parser, Clone)]
pub struct SimulateArgs {
    /// Output data file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of samples to write.
    #[arg(short = 'n', long, default_value_t = 600)]
    pub samples: usize,

    /// Time between samples.
    #[arg(long, default_value_t = 1.0)]
    pub interval: f64,

    /// Index at which heating stops and cooling starts.
    #[arg(long, default_value_t = 60)]
    pub peak_index: usize,

    /// Room temperature.
    #[arg(long, default_value_t = 22.0)]
    pub ambient: f64,

    /// Peak object temperature.
    #[arg(long, default_value_t = 95.0)]
    pub peak: f64,

    /// True decay rate (negative cools).
    #[arg(long, default_value_t = -0.008, allow_hyphen_values = true)]
    pub k: f64,

    /// Standard deviation of sensor noise.
    #[arg(long, default_value_t = 0.15)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Field delimiter.
    #[arg(short = 'd', long, default_value_t = ',')]
    pub delimiter: char,
}
