//! Latency Plot - Main CLI Application
//!
//! Reads the benchmark's per-iteration latency file, prints its statistics
//! and renders the latency chart with mean and median reference lines.

use clap::Parser;
use latency_plot::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_config, EnvManager, ValidationLevel},
    error::{AppError, ErrorReporter, Result},
    loader::load_samples,
    logging::{Logger, PerformanceLogger},
    output::{OutputCoordinator, SummaryReport},
    plot::{open_in_viewer, render_chart, PlotModel},
    stats::SampleSummary,
    version_line,
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(AppError::internal("panic").exit_code());
    }));

    let cli = Cli::parse();

    if cli.env_help {
        print!("{}", EnvManager::display_env_help());
        return;
    }

    let reporter = ErrorReporter::new(!cli.no_color, cli.verbose || cli.debug);

    if let Err(e) = run_application(cli) {
        reporter.report_error(&e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        eprintln!("{}", version_line());
    }

    let config = load_config(cli)?;
    let logger = Logger::with_config("latplot", &config);
    let mut perf = PerformanceLogger::new(&config, &logger);
    let coordinator = OutputCoordinator::from_config(&config);

    logger.add_context_field("input", config.input.display().to_string());
    logger.debug("Configuration loaded")
        .field("config", display_config_summary(&config))
        .log();

    // Values that parsed but were ignored, such as an empty LATENCY_INPUT
    for problem in EnvManager::validate_current_env() {
        eprintln!("{}", coordinator.display_warning(&problem)?);
    }

    for warning in validate_config(&config)? {
        if warning.level == ValidationLevel::Warning || config.verbose || config.debug {
            eprintln!("{}", warning.format(config.enable_color));
        }
    }

    perf.start_timing("load");
    let series = load_samples(&config.input)?;
    perf.end_timing("load");

    logger.info("Loaded samples")
        .field("count", series.len())
        .log();

    let summary = SampleSummary::from_series(&series)?;

    logger.info("Computed summary")
        .field("mean", summary.mean)
        .field("median", summary.median)
        .log();

    let chart = if config.summary_only {
        None
    } else {
        let format = config.image_format()?;
        let model = PlotModel::from_config(&series, &summary, &config);

        perf.start_timing("render");
        render_chart(&model, &config.output, format)?;
        perf.end_timing("render");

        logger.info("Chart written")
            .field("output", config.output.display().to_string())
            .field("format", format.name())
            .log();

        if config.open_viewer {
            // The chart is already on disk, so a missing viewer is not fatal
            if let Err(e) = open_in_viewer(&config.output) {
                logger.warn("Could not open viewer").error_info(&e).log();
                eprintln!("{}", coordinator.display_warning(&e.to_string())?);
            }
        }

        Some(config.output.clone())
    };

    let report = SummaryReport::new(config.input.clone(), chart, summary);
    println!("{}", coordinator.display_report(&report)?);

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Io(_) => {
            eprintln!();
            eprintln!("Input help:");
            eprintln!("  - Run the benchmark first so it writes iac_benchmark.csv");
            eprintln!("  - Or point --input (LATENCY_INPUT) at the sample file");
        }
        AppError::Parse(_) => {
            eprintln!();
            eprintln!("Format help:");
            eprintln!("  - One integer latency in microseconds per line");
            eprintln!("  - Blank lines are ignored; headers and decimals are not");
        }
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Run with --env-help to list environment variables");
            eprintln!("  - Chart output must end in .png or .svg");
        }
        _ => {}
    }
}
