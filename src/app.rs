//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - loads the sensor log
//! - fits the cooling model and estimates equilibrium
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{AnalyzeArgs, Command, PlotArgs, SimulateArgs};
use crate::data::{SimulationConfig, generate_cooling_sample, write_samples};
use crate::domain::AnalysisConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cool` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    init_logging(cli.verbose);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Plot(args) => handle_plot(args),
        Command::Simulate(args) => handle_simulate(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // A second init (e.g. from tests) is harmless; keep the first logger.
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = analysis_config_from_args(&args)?;
    let run = pipeline::run_analysis(&config)?;

    println!("{}", crate::report::format_run_summary(&run, &config));

    if config.plot {
        let charts =
            crate::plot::render_analysis_charts(&run, config.plot_width, config.plot_height);
        println!("{charts}");
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run.ingest.series, &run.predicted)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::curve::write_curve_json(path, &run, &config)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_curve_file(&curve, args.width, args.height);

    println!("{plot}");
    Ok(())
}

fn handle_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let delimiter = delimiter_byte(args.delimiter)?;
    let config = SimulationConfig {
        samples: args.samples,
        interval: args.interval,
        peak_index: args.peak_index,
        ambient: args.ambient,
        peak: args.peak,
        k: args.k,
        noise: args.noise,
        seed: args.seed,
    };

    let series = generate_cooling_sample(&config)?;
    write_samples(&args.output, &series, delimiter)?;
    println!("Wrote {} samples to {}", series.len(), args.output.display());
    Ok(())
}

pub fn analysis_config_from_args(args: &AnalyzeArgs) -> Result<AnalysisConfig, AppError> {
    Ok(AnalysisConfig {
        data_path: args.input.clone(),
        delimiter: delimiter_byte(args.delimiter)?,
        skip_invalid: args.skip_invalid,
        ref_index: args.ref_index,
        ref_time: args.ref_time,
        step: args.step,
        tolerance: args.tolerance,
        max_iterations: args.max_iterations,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_curve: args.export_curve.clone(),
    })
}

fn delimiter_byte(c: char) -> Result<u8, AppError> {
    if c.is_ascii() && c != '\n' && c != '\r' {
        Ok(c as u8)
    } else {
        Err(AppError::new(2, format!("Delimiter must be a single ASCII character, got {c:?}.")))
    }
}

/// Rewrite argv so `cool <FILE>` means `cool analyze <FILE>`.
///
/// Rules:
/// - `cool data.csv ...`        -> `cool analyze data.csv ...`
/// - `cool --help/--version/-h` -> unchanged (show top-level help/version)
/// - `cool -v data.csv`         -> unchanged (clap reports the missing subcommand)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_subcommand = matches!(arg1.as_str(), "analyze" | "plot" | "simulate" | "help");
    if is_subcommand || arg1.starts_with('-') {
        return argv;
    }

    argv.insert(1, "analyze".to_string());
    argv
}
