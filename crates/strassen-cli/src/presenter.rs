//! CLI result presenter.
//!
//! Products go to the primary writer (stdout); summaries, comparison tables
//! and calibration reports go to the diagnostic writer (stderr) so that the
//! driver's output stays machine-readable.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use strassen_calibration::CalibrationProfile;
use strassen_core::compare::MultiplicationResult;
use strassen_core::{Matrix, Scalar};

use crate::output::{format_count, format_duration, write_diagonal, write_trace};

/// Run summary printed next to a product.
#[derive(Debug, Clone)]
pub struct RunSummary<'a> {
    pub algorithm: &'a str,
    pub n: usize,
    pub threshold: usize,
    pub parallel_threshold: Option<usize>,
    pub duration: Duration,
}

/// Presenter honouring `--verbose`, `--quiet` and `--details`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    /// Write the product: its diagonal, or only its trace.
    pub fn present_product<T: Scalar>(
        &self,
        out: &mut dyn Write,
        product: &Matrix<T>,
        trace_only: bool,
    ) -> io::Result<()> {
        if trace_only {
            write_trace(out, product)
        } else {
            write_diagonal(out, product)
        }
    }

    /// Describe how the product was computed. Silent unless verbose or
    /// details were requested.
    pub fn present_summary(&self, err: &mut dyn Write, summary: &RunSummary<'_>) -> io::Result<()> {
        if self.quiet || !(self.verbose || self.details) {
            return Ok(());
        }
        writeln!(err, "Algorithm: {}", summary.algorithm)?;
        writeln!(err, "N: {}", format_count(summary.n as u64))?;
        writeln!(err, "Duration: {}", format_duration(summary.duration))?;
        if self.details {
            writeln!(err, "Threshold: {}", summary.threshold)?;
            match summary.parallel_threshold {
                Some(t) => writeln!(err, "Parallel threshold: {t}")?,
                None => writeln!(err, "Parallel threshold: off")?,
            }
        }
        Ok(())
    }

    /// Table of every multiplier run in a cross-validation.
    pub fn present_comparison<T: Scalar>(
        &self,
        err: &mut dyn Write,
        results: &[MultiplicationResult<T>],
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(err, "\nComparison Results:")?;
        writeln!(err, "{:-<60}", "")?;
        for result in results {
            let status = match &result.outcome {
                Ok(_) => "OK".to_string(),
                Err(e) if self.verbose => format!("ERROR: {e}"),
                Err(_) => "ERROR".to_string(),
            };
            writeln!(
                err,
                "  {:<20} {:>10} [{}]",
                result.multiplier,
                format_duration(result.duration),
                status,
            )?;
        }
        Ok(())
    }

    /// Triangle counts for one edge probability: a `p=` header, then one
    /// count per trial. Details add the mean and the expected value.
    pub fn present_triangles(
        &self,
        out: &mut dyn Write,
        vertices: usize,
        probability: f64,
        counts: &[u64],
    ) -> io::Result<()> {
        writeln!(out, "p={probability}")?;
        for count in counts {
            writeln!(out, "{count}")?;
        }
        if self.details && !counts.is_empty() {
            writeln!(out, "mean={:.2}", mean(counts))?;
            writeln!(out, "expected={:.2}", expected_triangles(vertices, probability))?;
        }
        Ok(())
    }

    /// Report the thresholds of a calibration run and where they were saved.
    pub fn present_calibration(
        &self,
        err: &mut dyn Write,
        profile: &CalibrationProfile,
        saved_to: Option<&Path>,
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(err, "{}", profile.strassen_threshold);
        }
        writeln!(err, "Strassen threshold: {}", profile.strassen_threshold)?;
        match profile.parallel_threshold {
            Some(t) => writeln!(err, "Parallel threshold: {t}")?,
            None => writeln!(err, "Parallel threshold: off")?,
        }
        if self.verbose || self.details {
            writeln!(err, "CPU: {} ({} cores)", profile.cpu_model, profile.num_cores)?;
        }
        if let Some(path) = saved_to {
            writeln!(err, "Profile saved to {}", path.display())?;
        }
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(counts: &[u64]) -> f64 {
    counts.iter().sum::<u64>() as f64 / counts.len() as f64
}

/// `C(n, 3) * p^3`, the expected triangle count of `G(n, p)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn expected_triangles(vertices: usize, probability: f64) -> f64 {
    let n = vertices as f64;
    n * (n - 1.0) * (n - 2.0) / 6.0 * probability.powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strassen_core::MatrixError;

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    fn summary() -> RunSummary<'static> {
        RunSummary {
            algorithm: "Strassen",
            n: 1500,
            threshold: 68,
            parallel_threshold: None,
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn product_diagonal_and_trace() {
        let m = Matrix::<i64>::from_i64_rows(&[vec![19, 22], vec![43, 50]]).unwrap();
        let presenter = CliPresenter::default();

        let mut buf = Vec::new();
        presenter.present_product(&mut buf, &m, false).unwrap();
        assert_eq!(text(buf), "19\n50\n\n");

        let mut buf = Vec::new();
        presenter.present_product(&mut buf, &m, true).unwrap();
        assert_eq!(text(buf), "69\n");
    }

    #[test]
    fn summary_silent_by_default() {
        let mut buf = Vec::new();
        CliPresenter::default()
            .present_summary(&mut buf, &summary())
            .unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn summary_with_details() {
        let mut buf = Vec::new();
        CliPresenter::new(false, false, true)
            .present_summary(&mut buf, &summary())
            .unwrap();
        let out = text(buf);
        assert!(out.contains("Algorithm: Strassen"));
        assert!(out.contains("N: 1,500"));
        assert!(out.contains("Threshold: 68"));
        assert!(out.contains("Parallel threshold: off"));
    }

    #[test]
    fn comparison_table() {
        let results = vec![
            MultiplicationResult {
                multiplier: "Strassen".into(),
                outcome: Ok(Matrix::<i64>::identity(2)),
                duration: Duration::from_millis(5),
            },
            MultiplicationResult {
                multiplier: "Direct".into(),
                outcome: Err(MatrixError::NotSquare { rows: 2, cols: 3 }),
                duration: Duration::ZERO,
            },
        ];
        let mut buf = Vec::new();
        CliPresenter::new(true, false, false)
            .present_comparison(&mut buf, &results)
            .unwrap();
        let out = text(buf);
        assert!(out.contains("Strassen"));
        assert!(out.contains("[OK]"));
        assert!(out.contains("ERROR: matrix is not square: 2x3"));

        let mut buf = Vec::new();
        CliPresenter::new(false, true, false)
            .present_comparison(&mut buf, &results)
            .unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn triangles_listing() {
        let mut buf = Vec::new();
        CliPresenter::default()
            .present_triangles(&mut buf, 10, 0.5, &[3, 5])
            .unwrap();
        assert_eq!(text(buf), "p=0.5\n3\n5\n");

        let mut buf = Vec::new();
        CliPresenter::new(false, false, true)
            .present_triangles(&mut buf, 10, 0.5, &[3, 5])
            .unwrap();
        let out = text(buf);
        assert!(out.contains("mean=4.00"));
        assert!(out.contains("expected=15.00"));
    }

    #[test]
    fn expected_triangles_complete_graph() {
        assert!((expected_triangles(4, 1.0) - 4.0).abs() < 1e-9);
        assert!(expected_triangles(2, 1.0).abs() < 1e-9);
    }

    #[test]
    fn calibration_report() {
        let profile = CalibrationProfile {
            strassen_threshold: 40,
            parallel_threshold: Some(256),
            ..CalibrationProfile::default()
        };
        let mut buf = Vec::new();
        CliPresenter::default()
            .present_calibration(&mut buf, &profile, Some(Path::new("/tmp/p.json")))
            .unwrap();
        let out = text(buf);
        assert!(out.contains("Strassen threshold: 40"));
        assert!(out.contains("Parallel threshold: 256"));
        assert!(out.contains("/tmp/p.json"));

        let mut buf = Vec::new();
        CliPresenter::new(false, true, false)
            .present_calibration(&mut buf, &profile, None)
            .unwrap();
        assert_eq!(text(buf), "40\n");
    }
}
