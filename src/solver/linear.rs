//! Dense matrix storage and Gaussian elimination.

use crate::error::{NodalError, Result};

/// Square matrix with contiguous row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DenseMatrix {
    /// Create a `size` x `size` matrix of zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Build a matrix from a list of rows.
    ///
    /// Fails with [`NodalError::DimensionMismatch`] if any row length
    /// differs from the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(NodalError::DimensionMismatch {
                    expected: size,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] = value;
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] += value;
    }

    /// Swap two rows, touching only columns `from_col..size`.
    pub fn swap_rows_from(&mut self, a: usize, b: usize, from_col: usize) {
        if a == b {
            return;
        }
        let n = self.size;
        for j in from_col..n {
            self.data.swap(a * n + j, b * n + j);
        }
    }

    /// Stamp a conductance between two matrix rows.
    /// For a conductance G between unknowns n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    /// A `None` terminal has no row (ground or a fixed node) and is skipped.
    pub fn stamp_conductance(&mut self, n1: Option<usize>, n2: Option<usize>, g: f64) {
        if let Some(i) = n1 {
            self.add(i, i, g);
        }
        if let Some(j) = n2 {
            self.add(j, j, g);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }
}

/// Solve `A·x = b` in place by Gaussian elimination with partial pivoting.
///
/// On success `b` holds `x`. `a` is left in upper-triangular form. Fails
/// with [`NodalError::SingularSystem`] when the largest available pivot in
/// some column is smaller than `pivot_tolerance`; the contents of `a` and
/// `b` are unspecified after a failure.
pub fn solve_in_place(a: &mut DenseMatrix, b: &mut [f64], pivot_tolerance: f64) -> Result<()> {
    let n = a.size();
    if b.len() != n {
        return Err(NodalError::DimensionMismatch {
            expected: n,
            actual: b.len(),
        });
    }

    for k in 0..n {
        // Find pivot
        let mut max_val = a.get(k, k).abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = a.get(i, k).abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        // NaN pivots compare false against everything, so test the negation
        if !(max_val >= pivot_tolerance) {
            return Err(NodalError::SingularSystem {
                column: k,
                pivot: max_val,
            });
        }

        // Columns left of k are already zero below the diagonal
        if max_row != k {
            a.swap_rows_from(k, max_row, k);
            b.swap(k, max_row);
        }

        // Eliminate
        let pivot = a.get(k, k);
        for i in (k + 1)..n {
            let factor = a.get(i, k) / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                let v = a.get(k, j);
                a.add(i, j, -factor * v);
            }
            b[i] -= factor * b[k];
        }
    }

    // Back substitution
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a.get(i, j) * b[j];
        }
        b[i] = sum / a.get(i, i);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PIVOT_TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_simple() {
        // 2x + y = 5
        // x + 3y = 6
        // Solution: x = 1.8, y = 1.4
        let mut a = DenseMatrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let mut b = vec![5.0, 6.0];

        solve_in_place(&mut a, &mut b, PIVOT_TOLERANCE).unwrap();

        assert_relative_eq!(b[0], 1.8, epsilon = 1e-12);
        assert_relative_eq!(b[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_needs_pivoting() {
        // Zero in the leading position forces a row swap
        //  0x + 2y +  z = 7
        //  x  +  y +  z = 6
        // 2x  +  y + 3z = 13
        // Solution: x = 1, y = 2, z = 3
        let mut a = DenseMatrix::from_rows(&[
            vec![0.0, 2.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![2.0, 1.0, 3.0],
        ])
        .unwrap();
        let mut b = vec![7.0, 6.0, 13.0];

        solve_in_place(&mut a, &mut b, PIVOT_TOLERANCE).unwrap();

        assert_relative_eq!(b[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(b[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(b[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_matrix() {
        let mut a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let mut b = vec![1.0, 2.0];

        let result = solve_in_place(&mut a, &mut b, PIVOT_TOLERANCE);
        assert!(matches!(
            result,
            Err(NodalError::SingularSystem { column: 1, .. })
        ));
    }

    #[test]
    fn test_zero_column_is_singular() {
        let mut a = DenseMatrix::zeros(2);
        a.set(0, 1, 1.0);
        a.set(1, 1, 1.0);
        let mut b = vec![1.0, 1.0];

        let result = solve_in_place(&mut a, &mut b, PIVOT_TOLERANCE);
        assert!(matches!(
            result,
            Err(NodalError::SingularSystem { column: 0, .. })
        ));
    }

    #[test]
    fn test_tiny_pivot_below_tolerance() {
        let mut a = DenseMatrix::from_rows(&[vec![1e-15]]).unwrap();
        let mut b = vec![1.0];
        assert!(solve_in_place(&mut a, &mut b, PIVOT_TOLERANCE).is_err());

        // The same system passes with a looser threshold
        let mut a = DenseMatrix::from_rows(&[vec![1e-15]]).unwrap();
        let mut b = vec![1.0];
        solve_in_place(&mut a, &mut b, 1e-16).unwrap();
        assert_relative_eq!(b[0], 1e15, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_system() {
        let mut a = DenseMatrix::zeros(0);
        let mut b: Vec<f64> = Vec::new();
        solve_in_place(&mut a, &mut b, PIVOT_TOLERANCE).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut a = DenseMatrix::zeros(2);
        let mut b = vec![1.0, 2.0, 3.0];
        let result = solve_in_place(&mut a, &mut b, PIVOT_TOLERANCE);
        assert!(matches!(
            result,
            Err(NodalError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));

        let ragged = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(ragged, Err(NodalError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_stamp_conductance() {
        let mut g = DenseMatrix::zeros(2);
        g.stamp_conductance(Some(0), Some(1), 0.5);
        g.stamp_conductance(Some(1), None, 0.25);
        assert_eq!(g.get(0, 0), 0.5);
        assert_eq!(g.get(1, 1), 0.75);
        assert_eq!(g.get(0, 1), -0.5);
        assert_eq!(g.get(1, 0), -0.5);
    }
}
