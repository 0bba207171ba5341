//! Parsing the driver's newline-delimited operand format.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Read two `n x n` operands from newline-delimited integers.
///
/// The first `n * n` values fill operand one row by row, the next `n * n`
/// fill operand two. Blank lines are skipped and values past the second
/// operand are ignored. Line numbers in errors are 1-based.
pub fn parse_operands<T: Scalar>(text: &str, n: usize) -> Result<(Matrix<T>, Matrix<T>), MatrixError> {
    let too_large = || MatrixError::Config(format!("dimension {n} is too large"));
    let cells = n.checked_mul(n).ok_or_else(too_large)?;
    let expected = cells.checked_mul(2).ok_or_else(too_large)?;

    let mut values = Vec::with_capacity(expected.min(text.lines().count()));
    for (index, line) in text.lines().enumerate() {
        if values.len() == expected {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<T>().map_err(|_| MatrixError::Parse {
            line: index + 1,
            value: trimmed.to_string(),
        })?;
        values.push(value);
    }

    if values.len() < expected {
        return Err(MatrixError::MissingValues {
            expected,
            found: values.len(),
        });
    }

    let second = values.split_off(cells);
    Ok((Matrix::from_vec(n, n, values)?, Matrix::from_vec(n, n, second)?))
}
