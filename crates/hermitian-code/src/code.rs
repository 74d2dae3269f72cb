// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::builder::{build_code_matrices, MatrixStrategy};
use crate::cache::EvaluationCache;
use crate::config::HermitianCodeConfig;
use crate::curve::{HermitianCurve, Point};
use crate::decoder::{syndrome_functions, DecodedWord, SyndromeDecoder};
use crate::errors::{ConstructionError, HermitianCodeError, HermitianCodeResult};
use crate::field::{FieldElement, GaloisField};
use crate::linalg::vector_matrix_product;
use crate::matrix::Matrix;
use crate::riemann_roch::{riemann_roch_basis, Basis, Monomial};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

/// One-point AG code on the Hermitian curve H_m with divisor `D = a·Q`.
///
/// All bases and matrices are computed at construction and never change. The only
/// state mutated afterwards is the evaluation cache used by [`HermitianCode::decode`].
#[derive(Debug)]
pub struct HermitianCode {
    curve: HermitianCurve,
    a: usize,
    genus: usize,
    t: usize,
    l_d: Basis,
    l_a: Basis,
    l_c: Basis,
    syndrome_functions: Vec<Vec<Monomial>>,
    infinity: Point,
    points: Vec<Point>,
    parity_check: Matrix,
    generator: Matrix,
    strategy: MatrixStrategy,
    cache: Mutex<EvaluationCache>,
}

impl HermitianCode {
    /// Default divisor degree `m^3 - m^2 + m + 1`.
    pub fn default_degree(m: u32) -> usize {
        let m = m as usize;
        m * m * m - m * m + m + 1
    }

    /// Build the code for curve parameter `m` and divisor degree `a`
    /// (defaulting to [`HermitianCode::default_degree`]).
    pub fn new(m: u32, a: Option<usize>) -> HermitianCodeResult<Self> {
        Self::with_strategy(m, a, MatrixStrategy::default())
    }

    pub fn from_config(config: &HermitianCodeConfig) -> HermitianCodeResult<Self> {
        Self::with_strategy(config.m, config.a, config.strategy)
    }

    pub fn with_strategy(
        m: u32,
        a: Option<usize>,
        strategy: MatrixStrategy,
    ) -> HermitianCodeResult<Self> {
        let curve = HermitianCurve::new(m)?;
        let genus = curve.genus();
        let a = a.unwrap_or_else(|| Self::default_degree(m));

        let min = (3 * genus).saturating_sub(1);
        if a < min {
            return Err(ConstructionError::NoCorrectionCapability { a, min }.into());
        }
        let t = (a + 1 - 3 * genus) / 2;

        let l_d = riemann_roch_basis(m, genus, a)?;
        let l_a = riemann_roch_basis(m, genus, t + genus)?;
        let l_c = riemann_roch_basis(m, genus, a - t - genus)?;
        let syndrome_functions = syndrome_functions(&l_a, &l_c);

        let (infinity, points) = curve.split_points()?;
        let matrices =
            build_code_matrices(curve.field(), m, genus, &l_d, &points, strategy)?;

        let code = Self {
            curve,
            a,
            genus,
            t,
            l_d,
            l_a,
            l_c,
            syndrome_functions,
            infinity,
            points,
            parity_check: matrices.parity_check,
            generator: matrices.generator,
            strategy: matrices.strategy,
            cache: Mutex::new(EvaluationCache::new()),
        };
        info!(
            m,
            a,
            n = code.n(),
            k = code.k(),
            d = code.d(),
            t,
            g = genus,
            "constructed Hermitian code"
        );
        Ok(code)
    }

    pub fn m(&self) -> u32 {
        self.curve.m()
    }

    /// Divisor degree
    pub fn a(&self) -> usize {
        self.a
    }

    /// Genus of the curve
    pub fn g(&self) -> usize {
        self.genus
    }

    /// Code length: number of affine rational points
    pub fn n(&self) -> usize {
        self.points.len()
    }

    /// Code dimension
    pub fn k(&self) -> usize {
        self.generator.rows()
    }

    /// Designed minimum distance `a - 2g + 2`
    pub fn d(&self) -> usize {
        self.a + 2 - 2 * self.genus
    }

    /// Number of errors the decoder is guaranteed to correct
    pub fn t(&self) -> usize {
        self.t
    }

    pub fn curve(&self) -> &HermitianCurve {
        &self.curve
    }

    pub fn field(&self) -> &GaloisField {
        self.curve.field()
    }

    /// The excluded point `Q`
    pub fn infinity_point(&self) -> Point {
        self.infinity
    }

    /// Evaluation points; position `i` of a codeword belongs to `points()[i]`.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn parity_check_matrix(&self) -> &Matrix {
        &self.parity_check
    }

    pub fn generator_matrix(&self) -> &Matrix {
        &self.generator
    }

    pub fn strategy(&self) -> MatrixStrategy {
        self.strategy
    }

    /// Basis of `L(a·Q)`
    pub fn l_d(&self) -> &Basis {
        &self.l_d
    }

    /// Basis of `L((t + g)·Q)`, the space of error locators
    pub fn l_a(&self) -> &Basis {
        &self.l_a
    }

    /// Basis of `L((a - t - g)·Q)`
    pub fn l_c(&self) -> &Basis {
        &self.l_c
    }

    /// `S[i][j] = L_A[i]·L_C[j]`
    pub fn syndrome_functions(&self) -> &[Vec<Monomial>] {
        &self.syndrome_functions
    }

    /// Locks and returns the shared evaluation cache.
    pub fn evaluation_cache(&self) -> MutexGuard<'_, EvaluationCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `message · G`
    pub fn encode(&self, message: &[FieldElement]) -> HermitianCodeResult<Vec<FieldElement>> {
        self.check_vector(message, self.k(), "message")?;
        vector_matrix_product(self.field(), message, &self.generator)
    }

    /// Recover the message from a received word with at most `t` errors.
    ///
    /// With more than `t` errors the result may be a wrong message rather than an error.
    pub fn decode(&self, received: &[FieldElement]) -> HermitianCodeResult<Vec<FieldElement>> {
        Ok(self.decode_detailed(received)?.message)
    }

    /// Like [`HermitianCode::decode`] but also reports the located errors.
    pub fn decode_detailed(&self, received: &[FieldElement]) -> HermitianCodeResult<DecodedWord> {
        self.check_vector(received, self.n(), "received word")?;
        let mut cache = self.evaluation_cache();
        self.decoder().decode(received, &mut cache)
    }

    /// Decode using a caller-owned cache, for callers decoding concurrently.
    pub fn decode_with_cache(
        &self,
        received: &[FieldElement],
        cache: &mut EvaluationCache,
    ) -> HermitianCodeResult<DecodedWord> {
        self.check_vector(received, self.n(), "received word")?;
        self.decoder().decode(received, cache)
    }

    fn decoder(&self) -> SyndromeDecoder<'_> {
        SyndromeDecoder {
            field: self.field(),
            points: &self.points,
            l_a: &self.l_a,
            l_c: &self.l_c,
            l_d: &self.l_d,
            generator: &self.generator,
        }
    }

    fn check_vector(
        &self,
        vector: &[FieldElement],
        expected: usize,
        context: &str,
    ) -> HermitianCodeResult<()> {
        if vector.len() != expected {
            return Err(HermitianCodeError::length_mismatch(
                expected,
                vector.len(),
                context,
            ));
        }
        let order = self.field().order();
        if let Some(bad) = vector.iter().find(|x| x.value() >= order) {
            return Err(HermitianCodeError::InvalidArgument {
                message: format!("{} contains {} which is not in GF({})", context, bad, order),
            });
        }
        Ok(())
    }
}

impl fmt::Display for HermitianCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AG code on Hermitian curve H_{} with D={}*Q [n={}, k={}, d={}]",
            self.m(),
            self.a,
            self.n(),
            self.k(),
            self.d()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_m2_a6_parameters() {
        let code = HermitianCode::new(2, Some(6)).unwrap();
        assert_eq!(code.g(), 1);
        assert_eq!(code.n(), 8);
        assert_eq!(code.k(), 2);
        assert_eq!(code.d(), 6);
        assert_eq!(code.t(), 2);
        assert_eq!(code.l_d().len(), 6);
        assert_eq!(code.l_a().len(), 3);
        assert_eq!(code.l_c().len(), 3);
        assert_eq!(code.syndrome_functions().len(), 3);
        assert!(code.syndrome_functions().iter().all(|row| row.len() == 3));
        assert!(code.infinity_point().is_at_infinity());
        assert_eq!(code.strategy(), MatrixStrategy::Direct);
    }

    #[test]
    fn test_default_degree() {
        assert_eq!(HermitianCode::default_degree(2), 7);
        assert_eq!(HermitianCode::default_degree(4), 53);
        let code = HermitianCode::new(4, None).unwrap();
        assert_eq!(code.a(), 53);
        assert_eq!(code.n(), 64);
        assert_eq!(code.k(), 16);
        assert_eq!(code.t(), 18);
    }

    #[test]
    fn test_rejects_degree_without_correction_capability() {
        // 3g - 1 = 17 for m = 4
        let err = HermitianCode::new(4, Some(16)).unwrap_err();
        assert!(matches!(err, HermitianCodeError::Construction { .. }));
        // t = 0 but L((t + g)·Q) = L(6·Q) is below the Riemann-Roch bound 2g - 2 = 10
        assert!(matches!(
            HermitianCode::new(4, Some(17)).unwrap_err(),
            HermitianCodeError::Construction { .. }
        ));
        assert_eq!(HermitianCode::new(4, Some(27)).unwrap().t(), 5);
        assert!(matches!(
            HermitianCode::new(6, None).unwrap_err(),
            HermitianCodeError::Construction { .. }
        ));
    }

    #[test]
    fn test_cache_stabilizes() {
        let code = HermitianCode::new(2, Some(6)).unwrap();
        let message = vec![code.field().generator(), FieldElement::ONE];
        let codeword = code.encode(&message).unwrap();

        assert_eq!(code.decode(&codeword).unwrap(), message);
        let after_first = code.evaluation_cache().len();
        assert!(after_first > 0);

        assert_eq!(code.decode(&codeword).unwrap(), message);
        assert_eq!(code.evaluation_cache().len(), after_first);
        assert!(code.evaluation_cache().hits() > 0);
    }

    #[test]
    fn test_rejects_out_of_field_symbols() {
        let code = HermitianCode::new(2, Some(6)).unwrap();
        let bad: Vec<FieldElement> = serde_json::from_str("[1, 7]").unwrap();
        assert!(matches!(
            code.encode(&bad).unwrap_err(),
            HermitianCodeError::InvalidArgument { .. }
        ));
    }

    #[traced_test]
    #[test]
    fn test_decode_logs_error_positions() {
        let code = HermitianCode::new(2, Some(6)).unwrap();
        let f = code.field();
        let w = f.generator();
        let mut word = code.encode(&[w, w]).unwrap();
        word[3] = f.add(word[3], w);
        let decoded = code.decode_detailed(&word).unwrap();
        assert_eq!(decoded.message, vec![w, w]);
        assert_eq!(decoded.corrections, vec![(3, w)]);
        assert!(logs_contain("error positions"));
        assert!(logs_contain("constructed Hermitian code"));
    }
}
