//! Application entry point and dispatch.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use num_bigint::BigInt;

use strassen_calibration::calibration::{CalibrationEngine, CalibrationMode, CalibrationProgress};
use strassen_cli::presenter::{CliPresenter, RunSummary};
use strassen_cli::ui;
use strassen_core::compare::{analyze_comparison_results, execute_multiplications};
use strassen_core::graph::count_triangles;
use strassen_core::input::parse_operands;
use strassen_core::random::{random_graph, seeded_rng};
use strassen_core::registry::{select_multipliers, DefaultFactory};
use strassen_core::{EngineOptions, Matrix, MatrixError, Scalar, StrassenEngine};

use crate::config::{AppConfig, Precision};
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.calibrate || config.auto_calibrate {
        return run_calibration(config);
    }

    let options = engine_options(config);
    if config.triangles {
        return run_triangles(config, options);
    }

    run_driver(config, options)
}

/// Engine options from the flags, falling back to the saved calibration
/// profile and then to the built-in defaults.
#[must_use]
pub fn engine_options(config: &AppConfig) -> EngineOptions {
    let options = match config.threshold {
        Some(threshold) => EngineOptions::default().with_threshold(threshold),
        None => cached_options(config.quiet),
    };
    match config.parallel_threshold {
        Some(threshold) => options.with_parallel_threshold(threshold),
        None => options,
    }
}

fn cached_options(quiet: bool) -> EngineOptions {
    let Some(profile) = strassen_calibration::io::load_profile() else {
        return EngineOptions::default();
    };
    match strassen_calibration::io::validate_profile(profile) {
        Some(profile) => {
            tracing::debug!(threshold = profile.strassen_threshold, "using calibrated threshold");
            profile.engine_options()
        }
        None => {
            if !quiet {
                ui::print_warning("ignoring stale calibration profile, run --calibrate to refresh it");
            }
            EngineOptions::default()
        }
    }
}

fn run_driver(config: &AppConfig, options: EngineOptions) -> Result<()> {
    let (Some(n), Some(path)) = (config.n, config.file.as_deref()) else {
        return Err(MatrixError::Config("N and FILE are required".into()).into());
    };
    let text = read_input(path)?;

    match config.precision {
        Precision::I64 => multiply_input::<i64>(config, options, n, &text),
        Precision::I128 => multiply_input::<i128>(config, options, n, &text),
        Precision::Big => multiply_input::<BigInt>(config, options, n, &text),
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        AppError::ReadInput {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn multiply_input<T: Scalar + 'static>(
    config: &AppConfig,
    options: EngineOptions,
    n: usize,
    text: &str,
) -> Result<()> {
    let (a, b) = parse_operands::<T>(text, n)?;

    let factory = DefaultFactory::<T>::new(options);
    let multipliers = select_multipliers(&config.algo, &factory)?;
    let start = Instant::now();
    let results = execute_multiplications(&multipliers, &a, &b);
    let elapsed = start.elapsed();

    let presenter = CliPresenter::new(config.verbose, config.quiet, config.details);
    let mut stderr = std::io::stderr().lock();
    if results.len() > 1 {
        presenter.present_comparison(&mut stderr, &results)?;
        analyze_comparison_results(&results)?;
    }

    let Some(first) = results.into_iter().next() else {
        return Err(MatrixError::Calculation("no multiplier selected".into()).into());
    };
    let algorithm = first.multiplier;
    let product: Matrix<T> = first.outcome?;

    presenter.present_summary(
        &mut stderr,
        &RunSummary {
            algorithm: &algorithm,
            n,
            threshold: options.threshold,
            parallel_threshold: options.parallel_threshold,
            duration: elapsed,
        },
    )?;

    let mut stdout = std::io::stdout().lock();
    presenter.present_product(&mut stdout, &product, config.trace)?;
    stdout.flush()?;
    Ok(())
}

fn run_triangles(config: &AppConfig, options: EngineOptions) -> Result<()> {
    let engine = StrassenEngine::new(options);
    let presenter = CliPresenter::new(config.verbose, config.quiet, config.details);
    let mut rng = seeded_rng(config.seed);
    let mut stdout = std::io::stdout().lock();

    for &p in &config.probability {
        let counts = (0..config.trials)
            .map(|trial| -> Result<u64, MatrixError> {
                let graph: Matrix<i64> = random_graph(&mut rng, config.vertices, p)?;
                let count = count_triangles(&engine, &graph)?;
                tracing::debug!(p, trial, count, "triangle trial");
                Ok(count)
            })
            .collect::<Result<Vec<_>, _>>()?;
        presenter.present_triangles(&mut stdout, config.vertices, p, &counts)?;
    }
    stdout.flush()?;
    Ok(())
}

fn run_calibration(config: &AppConfig) -> Result<()> {
    let mode = if config.calibrate {
        CalibrationMode::Full
    } else {
        CalibrationMode::Auto
    };

    let mut engine = CalibrationEngine::new(mode).with_seed(config.seed);
    if !config.quiet {
        ui::print_header("Calibration");
        engine = engine.with_progress(Box::new(|progress: CalibrationProgress| {
            eprintln!("[{}/{}] {}", progress.current, progress.total, progress.step);
        }));
    }
    let profile = engine.calibrate().context("calibration failed")?;
    let path = strassen_calibration::io::save_profile(&profile)?;

    let presenter = CliPresenter::new(config.verbose, config.quiet, config.details);
    presenter.present_calibration(&mut std::io::stderr().lock(), &profile, Some(&path))?;
    if !config.quiet {
        ui::print_success("Calibration complete");
    }
    Ok(())
}
