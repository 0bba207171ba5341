//! CLI output formatting.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use strassen_core::{Matrix, Scalar};

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Write one value per line, then an empty line.
pub fn write_lines<W, I>(out: &mut W, values: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for value in values {
        writeln!(out, "{value}")?;
    }
    writeln!(out)
}

/// Write the main diagonal of `product`, one entry per line, followed by
/// an empty line.
pub fn write_diagonal<T: Scalar, W: Write + ?Sized>(out: &mut W, product: &Matrix<T>) -> io::Result<()> {
    write_lines(out, product.diagonal())
}

/// Write the trace of `product` on a single line.
pub fn write_trace<T: Scalar, W: Write + ?Sized>(out: &mut W, product: &Matrix<T>) -> io::Result<()> {
    writeln!(out, "{}", product.trace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert_eq!(format_duration(Duration::from_millis(3140)), "3.140s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_count_thousands() {
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(123_456), "123,456");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn diagonal_then_blank_line() {
        let m = Matrix::<i64>::from_i64_rows(&[vec![19, 22], vec![43, 50]]).unwrap();
        let mut buf = Vec::new();
        write_diagonal(&mut buf, &m).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "19\n50\n\n");
    }

    #[test]
    fn empty_diagonal_is_blank_line() {
        let mut buf = Vec::new();
        write_diagonal(&mut buf, &Matrix::<i64>::empty()).unwrap();
        assert_eq!(buf, b"\n");
    }

    #[test]
    fn trace_line() {
        let m = Matrix::<num_bigint::BigInt>::from_i64_rows(&[vec![19, 22], vec![43, 50]]).unwrap();
        let mut buf = Vec::new();
        write_trace(&mut buf, &m).unwrap();
        assert_eq!(buf, b"69\n");
    }
}
