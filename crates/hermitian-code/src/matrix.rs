// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dense matrices over GF(m^2) with dimension validation.

use crate::errors::{HermitianCodeError, HermitianCodeResult};
use crate::field::FieldElement;
use serde::{Deserialize, Serialize};

/// A matrix with runtime-determined dimensions.
///
/// The column count is kept even when there are no rows, so an empty null space
/// basis still knows the length of the vectors it would contain.
///
/// # Example
///
/// ```
/// use hermitian_code::{FieldElement, Matrix};
///
/// let data = vec![
///     vec![FieldElement::ONE, FieldElement::ZERO],
///     vec![FieldElement::ZERO, FieldElement::ONE],
/// ];
/// let matrix = Matrix::new(data).unwrap();
/// assert_eq!(matrix.rows(), 2);
/// assert_eq!(matrix.cols(), 2);
/// assert_eq!(matrix.transpose(), matrix);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<Vec<FieldElement>>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from row data, validating that all rows have the same length.
    ///
    /// # Errors
    ///
    /// Returns an error if rows have inconsistent lengths.
    pub fn new(data: Vec<Vec<FieldElement>>) -> HermitianCodeResult<Self> {
        let cols = data.first().map_or(0, Vec::len);
        Self::from_rows(data, cols)
    }

    /// Creates a matrix with an explicit column count, which may be non-zero for zero rows.
    pub fn from_rows(data: Vec<Vec<FieldElement>>, cols: usize) -> HermitianCodeResult<Self> {
        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(HermitianCodeError::dimension_mismatch(
                    cols,
                    row.len(),
                    format!("columns in row {}", i),
                ));
            }
        }

        Ok(Self {
            rows: data.len(),
            data,
            cols,
        })
    }

    /// Creates a zero matrix of the specified dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![vec![FieldElement::ZERO; cols]; rows],
            rows,
            cols,
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        for (i, row) in matrix.data.iter_mut().enumerate() {
            row[i] = FieldElement::ONE;
        }
        matrix
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns a reference to the underlying data.
    pub fn data(&self) -> &[Vec<FieldElement>] {
        &self.data
    }

    pub fn row(&self, index: usize) -> Option<&[FieldElement]> {
        self.data.get(index).map(Vec::as_slice)
    }

    /// Gets a specific element.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> FieldElement {
        self.data[row][col]
    }

    pub fn transpose(&self) -> Self {
        let data = (0..self.cols)
            .map(|c| self.data.iter().map(|row| row[c]).collect())
            .collect();
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Appends a row of matching length.
    pub fn push_row(&mut self, row: Vec<FieldElement>) -> HermitianCodeResult<()> {
        if row.len() != self.cols {
            return Err(HermitianCodeError::dimension_mismatch(
                self.cols,
                row.len(),
                "appended row",
            ));
        }
        self.data.push(row);
        self.rows += 1;
        Ok(())
    }
}

impl From<Matrix> for Vec<Vec<FieldElement>> {
    fn from(matrix: Matrix) -> Self {
        matrix.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_ragged_rows() {
        let data = vec![
            vec![FieldElement::ONE, FieldElement::ZERO],
            vec![FieldElement::ONE],
        ];
        assert!(Matrix::new(data).is_err());
    }

    #[test]
    fn test_empty_keeps_columns() {
        let m = Matrix::from_rows(vec![], 5).unwrap();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 5);
        assert_eq!(m.transpose().rows(), 5);
        assert_eq!(m.transpose().cols(), 0);
    }

    #[test]
    fn test_transpose_and_push() {
        let mut m = Matrix::zeros(1, 3);
        m.push_row(vec![FieldElement::ONE; 3]).unwrap();
        assert!(m.push_row(vec![FieldElement::ONE; 2]).is_err());
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.get(2, 1), FieldElement::ONE);
        assert_eq!(t.get(2, 0), FieldElement::ZERO);
    }
}
