//! Reduced view over the shared score matrix
//!
//! Instead of copying the matrix on every reduction, the view keeps the original matrix
//! untouched and tracks which original rows and columns are still live.

use super::SolverError;
use crate::matrix::ScoreMatrix;

/// Rows/columns of a [`ScoreMatrix`] still in play
#[derive(Debug, Clone)]
pub struct Submatrix<'a> {
    full: &'a ScoreMatrix,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl<'a> Submatrix<'a> {
    /// View covering the whole matrix
    #[must_use]
    pub fn full(matrix: &'a ScoreMatrix) -> Self {
        let all: Vec<usize> = (0..matrix.dimension()).collect();
        Self {
            full: matrix,
            rows: all.clone(),
            cols: all,
        }
    }

    /// View with nothing left in it
    #[must_use]
    pub const fn empty(matrix: &'a ScoreMatrix) -> Self {
        Self {
            full: matrix,
            rows: Vec::new(),
            cols: Vec::new(),
        }
    }

    /// The underlying full matrix
    #[inline]
    #[must_use]
    pub const fn matrix(&self) -> &'a ScoreMatrix {
        self.full
    }

    /// (rows, columns) currently live
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Score at reduced position (i, j)
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.full.get(self.rows[i], self.cols[j])
    }

    /// Reduced row `i`, in current column order
    pub fn row(&self, i: usize) -> impl Iterator<Item = u8> + '_ {
        let full_row = self.full.row(self.rows[i]);
        self.cols.iter().map(move |&c| full_row[c])
    }

    /// Original vocabulary index of reduced row `i`
    #[inline]
    #[must_use]
    pub fn original_index(&self, i: usize) -> usize {
        self.rows[i]
    }

    /// Keep only the positions where `keep` is true, rows first then columns
    ///
    /// # Errors
    /// Returns `SolverError::NonSquare` if the result has different row and column counts.
    pub fn retain(&mut self, keep: &[bool]) -> Result<(), SolverError> {
        self.rows = mask(&self.rows, keep);
        self.cols = mask(&self.cols, keep);

        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(SolverError::NonSquare { rows, cols });
        }
        Ok(())
    }
}

fn mask(indices: &[usize], keep: &[bool]) -> Vec<usize> {
    indices
        .iter()
        .zip(keep)
        .filter_map(|(&i, &k)| k.then_some(i))
        .collect()
}
