//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use strassen_core::DEFAULT_SEED;

/// Scalar type the operands are read into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Precision {
    /// 64-bit signed integers; overflow aborts.
    I64,
    /// 128-bit signed integers; overflow aborts.
    I128,
    /// Arbitrary precision.
    Big,
}

/// strassen: exact Strassen matrix multiplication for any square size.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Side length of the operands.
    #[arg(
        env = "STRASSEN_N",
        required_unless_present_any = ["calibrate", "auto_calibrate", "triangles", "completion"],
        requires = "file"
    )]
    pub n: Option<usize>,

    /// File with 2*N*N newline-delimited integers, operand one then operand two.
    pub file: Option<PathBuf>,

    /// Largest size multiplied directly [default: calibrated profile, else 68].
    #[arg(long, env = "STRASSEN_THRESHOLD")]
    pub threshold: Option<usize>,

    /// Evaluate the seven sub-products in parallel at or above this size.
    #[arg(long)]
    pub parallel_threshold: Option<usize>,

    /// Algorithm to use: strassen, direct, or all.
    #[arg(long, default_value = "strassen")]
    pub algo: String,

    /// Integer type for the operands.
    #[arg(long, value_enum, default_value_t = Precision::I128)]
    pub precision: Precision,

    /// Print the trace of the product instead of its diagonal.
    #[arg(long)]
    pub trace: bool,

    /// Run full calibration and save the profile.
    #[arg(long)]
    pub calibrate: bool,

    /// Run quick calibration and save the profile.
    #[arg(long)]
    pub auto_calibrate: bool,

    /// Count triangles in random graphs.
    #[arg(long)]
    pub triangles: bool,

    /// Vertices per random graph.
    #[arg(long, default_value_t = 1024)]
    pub vertices: usize,

    /// Edge probabilities to sweep.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [0.01, 0.02, 0.03, 0.04, 0.05]
    )]
    pub probability: Vec<f64>,

    /// Random graphs per probability.
    #[arg(long, default_value_t = 100)]
    pub trials: usize,

    /// Seed for random graphs and calibration operands.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
