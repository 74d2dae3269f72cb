// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Syndrome decoding with an error-locating function.
//!
//! For a received word `v = c + e` every `f` in `L(a·Q)` satisfies `<v, f> = <e, f>`.
//! 1. The syndrome matrix `S'[i][j] = <v, L_A[i]·L_C[j]>` is built from cached
//!    monomial values.
//! 2. A non-zero `u` with `u·S' = 0` gives the locator `theta = sum_i u_i·L_A[i]`,
//!    which vanishes on every error position while at most `t` errors occurred.
//! 3. The zeros of `theta` among the points are the candidate positions `E`.
//! 4. The magnitudes solve `sum_{i in E} f(P_i)·e_i = <v, f>` for `f` in `L_D`.
//! 5. The corrected codeword is expressed in the rows of `G`.

use crate::cache::EvaluationCache;
use crate::curve::Point;
use crate::errors::{HermitianCodeError, HermitianCodeResult};
use crate::field::{FieldElement, GaloisField};
use crate::linalg::{echelon_form, left_null_space};
use crate::matrix::Matrix;
use crate::riemann_roch::{Basis, Monomial};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedWord {
    /// The recovered message, of length `k`
    pub message: Vec<FieldElement>,
    /// The received word with the located errors removed
    pub codeword: Vec<FieldElement>,
    /// Zeros of the error locator, in point order
    pub located_positions: Vec<usize>,
    /// Located positions with a non-zero error magnitude
    pub corrections: Vec<(usize, FieldElement)>,
}

/// Borrowed view of everything the decoding algorithm reads from a code.
pub struct SyndromeDecoder<'a> {
    pub field: &'a GaloisField,
    pub points: &'a [Point],
    pub l_a: &'a Basis,
    pub l_c: &'a Basis,
    pub l_d: &'a Basis,
    pub generator: &'a Matrix,
}

impl SyndromeDecoder<'_> {
    pub fn decode(
        &self,
        received: &[FieldElement],
        cache: &mut EvaluationCache,
    ) -> HermitianCodeResult<DecodedWord> {
        let syndromes = self.syndrome_matrix(received, cache)?;
        trace!(?syndromes, "syndrome matrix");

        let locator = self.error_locator(&syndromes)?;
        let theta = self.locator_values(&locator, cache)?;
        let positions: Vec<usize> = theta
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_zero())
            .map(|(i, _)| i)
            .collect();
        debug!(?positions, "error positions");

        let magnitudes = self.error_magnitudes(received, &positions, cache)?;
        let mut codeword = received.to_vec();
        let mut corrections = Vec::new();
        for (&pos, &value) in positions.iter().zip(&magnitudes) {
            codeword[pos] = self.field.sub(codeword[pos], value);
            if !value.is_zero() {
                corrections.push((pos, value));
            }
        }
        debug!(?corrections, "error position and value");

        let message = self.recover_message(&codeword)?;
        Ok(DecodedWord {
            message,
            codeword,
            located_positions: positions,
            corrections,
        })
    }

    /// `S'[i][j] = <v, L_A[i]·L_C[j]>`
    pub fn syndrome_matrix(
        &self,
        received: &[FieldElement],
        cache: &mut EvaluationCache,
    ) -> HermitianCodeResult<Matrix> {
        let mut rows = Vec::with_capacity(self.l_a.len());
        for f in self.l_a {
            let row = self
                .l_c
                .iter()
                .map(|g| cache.pairing(self.field, received, f.product(g), self.points))
                .collect::<HermitianCodeResult<Vec<_>>>()?;
            rows.push(row);
        }
        Matrix::from_rows(rows, self.l_c.len())
    }

    /// Coefficients over `L_A` of the error locator.
    fn error_locator(&self, syndromes: &Matrix) -> HermitianCodeResult<Vec<FieldElement>> {
        let kernel = left_null_space(self.field, syndromes)?;
        kernel.row(0).map(<[FieldElement]>::to_vec).ok_or_else(|| {
            HermitianCodeError::decoding("syndrome matrix has a trivial left null space")
        })
    }

    /// `theta(P_k) = sum_i u_i·L_A[i](P_k)` from the cached basis values.
    fn locator_values(
        &self,
        coefficients: &[FieldElement],
        cache: &mut EvaluationCache,
    ) -> HermitianCodeResult<Vec<FieldElement>> {
        let mut theta = vec![FieldElement::ZERO; self.points.len()];
        for (&u, &f) in coefficients.iter().zip(self.l_a) {
            if u.is_zero() {
                continue;
            }
            let values = cache.values(self.field, f, self.points)?;
            for (acc, &x) in theta.iter_mut().zip(values) {
                *acc = self.field.add(*acc, self.field.mul(u, x));
            }
        }
        Ok(theta)
    }

    /// Solve for the error value at each located position.
    fn error_magnitudes(
        &self,
        received: &[FieldElement],
        positions: &[usize],
        cache: &mut EvaluationCache,
    ) -> HermitianCodeResult<Vec<FieldElement>> {
        if positions.len() >= self.l_d.len() {
            return Err(HermitianCodeError::decoding(format!(
                "error locator vanishes at {} positions, more than the {} equations can resolve",
                positions.len(),
                self.l_d.len()
            )));
        }

        let mut system = Vec::with_capacity(self.l_d.len());
        for &f in self.l_d {
            let values = cache.values(self.field, f, self.points)?;
            let mut row: Vec<FieldElement> = positions.iter().map(|&i| values[i]).collect();
            row.push(self.field.dot(received, values));
            system.push(row);
        }
        let reduced = echelon_form(self.field, &Matrix::from_rows(system, positions.len() + 1)?)?;

        Ok((0..positions.len())
            .map(|i| reduced.get(i, positions.len()))
            .collect())
    }

    /// Coordinates of `codeword` in the rows of `G`.
    fn recover_message(&self, codeword: &[FieldElement]) -> HermitianCodeResult<Vec<FieldElement>> {
        let k = self.generator.rows();
        let mut augmented = self.generator.clone();
        augmented.push_row(codeword.to_vec())?;
        let reduced = echelon_form(self.field, &augmented.transpose())?;
        Ok((0..k).map(|i| reduced.get(i, k)).collect())
    }
}

/// Functions appearing in the syndrome matrix, `S[i][j] = L_A[i]·L_C[j]`.
pub fn syndrome_functions(l_a: &Basis, l_c: &Basis) -> Vec<Vec<Monomial>> {
    l_a.iter()
        .map(|f| l_c.iter().map(|g| f.product(g)).collect())
        .collect()
}
