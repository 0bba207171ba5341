//! Triangle counting on undirected graphs via matrix powers.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::strassen::StrassenEngine;

/// Check that `adjacency` is a square, symmetric 0/1 matrix with an empty
/// diagonal.
pub fn validate_adjacency<T: Scalar>(adjacency: &Matrix<T>) -> Result<usize, MatrixError> {
    let n = adjacency.square_size()?;
    for i in 0..n {
        if !adjacency.at(i, i).is_zero() {
            return Err(MatrixError::NotAdjacency(format!("self-loop at vertex {i}")));
        }
        for j in 0..n {
            let v = adjacency.at(i, j);
            if !(v.is_zero() || v.is_one()) {
                return Err(MatrixError::NotAdjacency(format!(
                    "entry ({i}, {j}) is {v}, expected 0 or 1"
                )));
            }
            if v != adjacency.at(j, i) {
                return Err(MatrixError::NotAdjacency(format!(
                    "entries ({i}, {j}) and ({j}, {i}) differ"
                )));
            }
        }
    }
    Ok(n)
}

/// Number of triangles in an undirected graph: `trace(A^3) / 6`.
///
/// Every triangle contributes six closed walks of length three.
pub fn count_triangles<T: Scalar>(
    engine: &StrassenEngine,
    adjacency: &Matrix<T>,
) -> Result<u64, MatrixError> {
    validate_adjacency(adjacency)?;
    let squared = engine.multiply_matrices(adjacency, adjacency)?;
    let cubed = engine.multiply_matrices(&squared, adjacency)?;
    let closed_walks = cubed
        .trace()
        .to_u64()
        .ok_or_else(|| MatrixError::Calculation("closed walk count out of range".into()))?;
    if closed_walks % 6 != 0 {
        return Err(MatrixError::Calculation(format!(
            "closed walk count {closed_walks} is not a multiple of 6"
        )));
    }
    tracing::debug!(vertices = adjacency.rows(), closed_walks, "counted triangles");
    Ok(closed_walks / 6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{random_graph, seeded_rng};

    fn brute_force(adjacency: &Matrix<i64>) -> u64 {
        let n = adjacency.rows();
        let mut count = 0;
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    if adjacency.at(i, j) == &1 && adjacency.at(j, k) == &1 && adjacency.at(i, k) == &1
                    {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    #[test]
    fn complete_graph_k4() {
        let k4 = Matrix::<i64>::from_i64_rows(&[
            vec![0, 1, 1, 1],
            vec![1, 0, 1, 1],
            vec![1, 1, 0, 1],
            vec![1, 1, 1, 0],
        ])
        .unwrap();
        let engine = StrassenEngine::with_threshold(1);
        assert_eq!(count_triangles(&engine, &k4).unwrap(), 4);
    }

    #[test]
    fn random_graph_matches_brute_force() {
        let g: Matrix<i64> = random_graph(&mut seeded_rng(11), 41, 0.2).unwrap();
        let engine = StrassenEngine::with_threshold(8);
        assert_eq!(count_triangles(&engine, &g).unwrap(), brute_force(&g));
    }

    #[test]
    fn empty_graph() {
        let engine = StrassenEngine::default();
        assert_eq!(count_triangles(&engine, &Matrix::<i64>::zeros(9, 9)).unwrap(), 0);
        assert_eq!(count_triangles(&engine, &Matrix::<i64>::empty()).unwrap(), 0);
    }

    #[test]
    fn rejects_non_adjacency() {
        let engine = StrassenEngine::default();
        let loops = Matrix::<i64>::identity(3);
        assert!(matches!(
            count_triangles(&engine, &loops),
            Err(MatrixError::NotAdjacency(_))
        ));

        let weighted = Matrix::<i64>::from_i64_rows(&[vec![0, 2], vec![2, 0]]).unwrap();
        assert!(matches!(
            validate_adjacency(&weighted),
            Err(MatrixError::NotAdjacency(_))
        ));

        let directed = Matrix::<i64>::from_i64_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        assert!(matches!(
            validate_adjacency(&directed),
            Err(MatrixError::NotAdjacency(_))
        ));
    }
}
