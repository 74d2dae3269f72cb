// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Parity-check and generator matrix construction.
//!
//! `H[i][j] = L_D[i](P[j])` and `G` spans the null space of `H`, so `G · H^T = 0`.
//! For large `a` the dual code has the smaller basis: the dual of the one-point
//! Hermitian code with divisor `a·Q` is the one with `(n + 2g - 2 - a)·Q`, so `G` can be
//! evaluated directly from that basis and `H` recovered as its null space.

use crate::curve::Point;
use crate::errors::HermitianCodeResult;
use crate::field::GaloisField;
use crate::linalg::{null_space, row_basis};
use crate::matrix::Matrix;
use crate::riemann_roch::{riemann_roch_basis, Basis};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the generator and parity-check matrices are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatrixStrategy {
    /// Evaluate `L(a·Q)` into `H`, take `G` as its null space
    #[default]
    Direct,
    /// Evaluate the dual basis into `G`, take `H` as its null space
    Dual,
    /// Use `Dual` when `2a > n + 2g - 2`, otherwise `Direct`
    Auto,
}

/// The matrices of a code and the strategy that produced them
#[derive(Debug, Clone)]
pub struct CodeMatrices {
    pub parity_check: Matrix,
    pub generator: Matrix,
    pub strategy: MatrixStrategy,
}

/// Evaluate every function of `basis` at every point: one row per function.
pub fn evaluation_matrix(
    field: &GaloisField,
    basis: &Basis,
    points: &[Point],
) -> HermitianCodeResult<Matrix> {
    let rows = basis
        .iter()
        .map(|f| {
            points
                .iter()
                .map(|p| f.evaluate(field, p))
                .collect::<HermitianCodeResult<Vec<_>>>()
        })
        .collect::<HermitianCodeResult<Vec<_>>>()?;
    Matrix::from_rows(rows, points.len())
}

/// `G` as the null space of `H`, one basis vector per row.
pub fn generator_from_parity(field: &GaloisField, h: &Matrix) -> HermitianCodeResult<Matrix> {
    null_space(field, h)
}

/// Degree of the dual divisor, when its Riemann-Roch basis is well defined.
pub fn dual_degree(n: usize, genus: usize, a: usize) -> Option<usize> {
    (n + 2 * genus)
        .checked_sub(2 + a)
        .filter(|&dual| dual + 2 > 2 * genus)
}

/// Build `H` and `G` for the code with divisor `l_d.degree()·Q` evaluated at `points`.
pub fn build_code_matrices(
    field: &GaloisField,
    m: u32,
    genus: usize,
    l_d: &Basis,
    points: &[Point],
    strategy: MatrixStrategy,
) -> HermitianCodeResult<CodeMatrices> {
    let n = points.len();
    let a = l_d.degree();
    let dual = dual_degree(n, genus, a);

    let use_dual = match (strategy, dual) {
        (MatrixStrategy::Direct, _) => false,
        (MatrixStrategy::Dual, Some(_)) => true,
        (MatrixStrategy::Dual, None) => {
            warn!(a, n, genus, "dual basis undefined for this degree, building directly");
            false
        }
        (MatrixStrategy::Auto, Some(_)) => 2 * a > n + 2 * genus - 2,
        (MatrixStrategy::Auto, None) => false,
    };

    match dual.filter(|_| use_dual) {
        Some(dual) => {
            let dual_basis = riemann_roch_basis(m, genus, dual)?;
            debug!(a, dual, size = dual_basis.len(), "building matrices from dual basis");
            let generator = row_basis(field, &evaluation_matrix(field, &dual_basis, points)?)?;
            let parity_check = null_space(field, &generator)?;
            Ok(CodeMatrices {
                parity_check,
                generator,
                strategy: MatrixStrategy::Dual,
            })
        }
        None => {
            debug!(a, size = l_d.len(), "building matrices directly");
            let parity_check = evaluation_matrix(field, l_d, points)?;
            let generator = generator_from_parity(field, &parity_check)?;
            Ok(CodeMatrices {
                parity_check,
                generator,
                strategy: MatrixStrategy::Direct,
            })
        }
    }
}
