// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::curve::Point;
use crate::errors::HermitianCodeResult;
use crate::field::{FieldElement, GaloisField};
use crate::riemann_roch::Monomial;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::trace;

/// Memoized evaluation vectors of monomials over the evaluation points.
///
/// Entries are keyed by exponent pair and never evicted. The number of entries is
/// bounded by the distinct products `L_A[i]·L_C[j]` plus the members of `L_D`, so the
/// cache stops growing after the first decode.
#[derive(Debug, Clone, Default)]
pub struct EvaluationCache {
    values: HashMap<Monomial, Vec<FieldElement>>,
    hits: u64,
    misses: u64,
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached functions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, function: &Monomial) -> bool {
        self.values.contains_key(function)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Values of `function` at every point of `points`, evaluating on first use.
    ///
    /// The cache assumes one point set per cache; mixing point sets returns stale values.
    pub fn values(
        &mut self,
        field: &GaloisField,
        function: Monomial,
        points: &[Point],
    ) -> HermitianCodeResult<&[FieldElement]> {
        match self.values.entry(function) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                let values = points
                    .iter()
                    .map(|p| function.evaluate(field, p))
                    .collect::<HermitianCodeResult<Vec<_>>>()?;
                self.misses += 1;
                trace!(%function, "cached function values");
                Ok(entry.insert(values).as_slice())
            }
        }
    }

    /// The pairing `<v, f> = sum_p v_p·f(p)`.
    pub fn pairing(
        &mut self,
        field: &GaloisField,
        vector: &[FieldElement],
        function: Monomial,
        points: &[Point],
    ) -> HermitianCodeResult<FieldElement> {
        let values = self.values(field, function, points)?;
        Ok(field.dot(vector, values))
    }
}
