// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Gaussian elimination over GF(m^2): echelon forms, null spaces and products.

use crate::errors::{HermitianCodeError, HermitianCodeResult};
use crate::field::{FieldElement, GaloisField};
use crate::matrix::Matrix;

/// Reduce a matrix to reduced row echelon form.
///
/// The pivot for each column is the first non-zero entry at or below the current
/// pivot row. Pivots are scaled to one and cleared above and below.
pub fn echelon_form(field: &GaloisField, matrix: &Matrix) -> HermitianCodeResult<Matrix> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    let mut data: Vec<Vec<FieldElement>> = matrix.data().to_vec();
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }

        let Some(found) = (pivot_row..rows).find(|&r| !data[r][col].is_zero()) else {
            continue;
        };
        data.swap(pivot_row, found);

        // Make pivot = 1
        let inv = field.inv(data[pivot_row][col])?;
        for cell in data[pivot_row].iter_mut() {
            *cell = field.mul(*cell, inv);
        }

        // Eliminate other entries in this column
        let pivot = data[pivot_row].clone();
        for (r, row) in data.iter_mut().enumerate() {
            if r == pivot_row || row[col].is_zero() {
                continue;
            }
            let factor = row[col];
            for (cell, &p) in row.iter_mut().zip(&pivot) {
                *cell = field.sub(*cell, field.mul(factor, p));
            }
        }

        pivot_row += 1;
    }

    Matrix::from_rows(data, cols)
}

/// Rank of a matrix.
pub fn rank(field: &GaloisField, matrix: &Matrix) -> HermitianCodeResult<usize> {
    Ok(row_basis(field, matrix)?.rows())
}

/// The non-zero rows of the reduced echelon form: a canonical basis of the row space.
pub fn row_basis(field: &GaloisField, matrix: &Matrix) -> HermitianCodeResult<Matrix> {
    let reduced = echelon_form(field, matrix)?;
    let cols = reduced.cols();
    let rows: Vec<Vec<FieldElement>> = Vec::from(reduced)
        .into_iter()
        .filter(|row| row.iter().any(|x| !x.is_zero()))
        .collect();
    Matrix::from_rows(rows, cols)
}

/// Compute the null space `{v : M·v = 0}` of a matrix.
///
/// Returns a basis with one vector per row, in reduced echelon form. A trivial null
/// space yields a matrix with zero rows and `M.cols()` columns.
pub fn null_space(field: &GaloisField, matrix: &Matrix) -> HermitianCodeResult<Matrix> {
    let rows = matrix.rows();
    let cols = matrix.cols();

    // Row reduce [M^T | I]; rows whose left part vanishes carry kernel vectors
    // in their right part.
    let transposed = matrix.transpose();
    let mut aug = Vec::with_capacity(cols);
    for (i, column) in transposed.data().iter().enumerate() {
        let mut row = column.clone();
        row.extend((0..cols).map(|j| {
            if i == j {
                FieldElement::ONE
            } else {
                FieldElement::ZERO
            }
        }));
        aug.push(row);
    }
    let aug = Matrix::from_rows(aug, rows + cols)?;

    // Pivots are taken left to right, so the left block is fully eliminated
    // before any identity column is touched.
    let reduced = echelon_form(field, &aug)?;

    let mut basis = Vec::new();
    for row in reduced.data() {
        if row[..rows].iter().all(|x| x.is_zero()) {
            let vector = row[rows..].to_vec();
            if vector.iter().any(|x| !x.is_zero()) {
                basis.push(vector);
            }
        }
    }

    row_basis(field, &Matrix::from_rows(basis, cols)?)
}

/// Compute the left null space `{v : v·M = 0}` of a matrix.
pub fn left_null_space(field: &GaloisField, matrix: &Matrix) -> HermitianCodeResult<Matrix> {
    null_space(field, &matrix.transpose())
}

/// Matrix product `A·B`.
pub fn multiply(field: &GaloisField, a: &Matrix, b: &Matrix) -> HermitianCodeResult<Matrix> {
    if a.cols() != b.rows() {
        return Err(HermitianCodeError::dimension_mismatch(
            a.cols(),
            b.rows(),
            "matrix product",
        ));
    }
    let bt = b.transpose();
    let data = a
        .data()
        .iter()
        .map(|row| bt.data().iter().map(|col| field.dot(row, col)).collect())
        .collect();
    Matrix::from_rows(data, b.cols())
}

/// Row vector times matrix, `v·M`.
pub fn vector_matrix_product(
    field: &GaloisField,
    vector: &[FieldElement],
    matrix: &Matrix,
) -> HermitianCodeResult<Vec<FieldElement>> {
    if vector.len() != matrix.rows() {
        return Err(HermitianCodeError::dimension_mismatch(
            matrix.rows(),
            vector.len(),
            "vector-matrix product",
        ));
    }
    let mut out = vec![FieldElement::ZERO; matrix.cols()];
    for (&coeff, row) in vector.iter().zip(matrix.data()) {
        if coeff.is_zero() {
            continue;
        }
        for (acc, &x) in out.iter_mut().zip(row) {
            *acc = field.add(*acc, field.mul(coeff, x));
        }
    }
    Ok(out)
}

/// Verify that `G · H^T = 0`
pub fn verify_parity_matrix(
    field: &GaloisField,
    g: &Matrix,
    h: &Matrix,
) -> HermitianCodeResult<bool> {
    if g.is_empty() || h.is_empty() {
        return Ok(true);
    }
    if g.cols() != h.cols() {
        return Err(HermitianCodeError::dimension_mismatch(
            h.cols(),
            g.cols(),
            "parity verification",
        ));
    }

    for (i, g_row) in g.data().iter().enumerate() {
        for (j, h_row) in h.data().iter().enumerate() {
            let sum = field.dot(g_row, h_row);
            if !sum.is_zero() {
                return Err(HermitianCodeError::Matrix {
                    message: format!(
                        "G · H^T ≠ 0: entry at position ({}, {}) is {}",
                        i, j, sum
                    ),
                });
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf4() -> GaloisField {
        GaloisField::new(2, 2).unwrap()
    }

    fn gf9() -> GaloisField {
        GaloisField::new(3, 2).unwrap()
    }

    fn matrix(field: &GaloisField, rows: &[&[u32]]) -> Matrix {
        Matrix::new(
            rows.iter()
                .map(|r| r.iter().map(|&v| field.element(v).unwrap()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_echelon_form_is_reduced() {
        let f = gf4();
        let m = matrix(&f, &[&[0, 2, 3], &[1, 1, 1], &[1, 3, 2]]);
        let e = echelon_form(&f, &m).unwrap();
        // Row 3 = row 1 + row 2 (w + (w+1) = 1, etc.), so rank 2
        assert_eq!(rank(&f, &m).unwrap(), 2);
        assert_eq!(e.get(0, 0), FieldElement::ONE);
        assert_eq!(e.get(1, 0), FieldElement::ZERO);
        assert_eq!(e.get(0, 1), FieldElement::ZERO);
        assert_eq!(e.get(1, 1), FieldElement::ONE);
        assert!(e.row(2).unwrap().iter().all(|x| x.is_zero()));
    }

    #[test]
    fn test_echelon_is_idempotent() {
        let f = gf9();
        let m = matrix(&f, &[&[3, 5, 0, 8], &[1, 0, 2, 4], &[7, 7, 1, 0]]);
        let once = echelon_form(&f, &m).unwrap();
        assert_eq!(echelon_form(&f, &once).unwrap(), once);
    }

    #[test]
    fn test_null_space_annihilates() {
        for f in [gf4(), gf9()] {
            let m = matrix(&f, &[&[1, 2, 3, 0, 1], &[0, 1, 1, 2, 3], &[1, 3, 2, 2, 2]]);
            let kernel = null_space(&f, &m).unwrap();
            assert_eq!(kernel.cols(), 5);
            assert_eq!(kernel.rows(), 5 - rank(&f, &m).unwrap());
            let product = multiply(&f, &m, &kernel.transpose()).unwrap();
            assert!(product.data().iter().flatten().all(|x| x.is_zero()));
        }
    }

    #[test]
    fn test_left_null_space() {
        let f = gf9();
        let m = matrix(&f, &[&[1, 2], &[2, 1], &[4, 8]]);
        let kernel = left_null_space(&f, &m).unwrap();
        assert_eq!(kernel.cols(), 3);
        for v in kernel.data() {
            let product = vector_matrix_product(&f, v, &m).unwrap();
            assert!(product.iter().all(|x| x.is_zero()));
        }
    }

    #[test]
    fn test_null_space_degenerate_inputs() {
        let f = gf4();
        let trivial = null_space(&f, &Matrix::identity(3)).unwrap();
        assert_eq!((trivial.rows(), trivial.cols()), (0, 3));

        let everything = null_space(&f, &Matrix::from_rows(vec![], 3).unwrap()).unwrap();
        assert_eq!(everything, Matrix::identity(3));

        let empty = null_space(&f, &Matrix::from_rows(vec![], 0).unwrap()).unwrap();
        assert_eq!(empty.rows(), 0);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let f = gf4();
        assert!(multiply(&f, &Matrix::zeros(2, 3), &Matrix::zeros(2, 3)).is_err());
        assert!(vector_matrix_product(&f, &[FieldElement::ONE], &Matrix::zeros(2, 3)).is_err());
    }

    #[test]
    fn test_verify_parity_matrix() {
        let f = gf4();
        let h = matrix(&f, &[&[1, 1, 1, 1], &[0, 1, 2, 3]]);
        let g = null_space(&f, &h).unwrap();
        assert!(verify_parity_matrix(&f, &g, &h).unwrap());
        let bad = matrix(&f, &[&[1, 0, 0, 0]]);
        assert!(verify_parity_matrix(&f, &bad, &h).is_err());
    }
}
