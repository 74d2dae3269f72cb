// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Monomial bases of the Riemann-Roch spaces `L(a·Q)` on the Hermitian curve.
//!
//! With `Q = (0 : 1 : 0)` the functions `x/z` and `y/z` have poles of order `m` and
//! `m + 1` at `Q` and nowhere else, so `x^i·y^j / z^(i+j)` lies in `L(a·Q)` exactly
//! when `i·m + j·(m + 1) <= a`. Restricting to `i <= m` makes the pole orders distinct,
//! and for `a > 2g - 2` these monomials form a basis of dimension `a + 1 - g`.

use crate::curve::Point;
use crate::errors::{ConstructionError, HermitianCodeResult, MathError};
use crate::field::{FieldElement, GaloisField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rational function `x^i·y^j / z^(i+j)`, identified by its exponent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Monomial {
    x_exp: u32,
    y_exp: u32,
}

impl Monomial {
    pub fn new(x_exp: u32, y_exp: u32) -> Self {
        Self { x_exp, y_exp }
    }

    pub fn x_exponent(&self) -> u32 {
        self.x_exp
    }

    pub fn y_exponent(&self) -> u32 {
        self.y_exp
    }

    /// Pole order at the point at infinity of H_m
    pub fn pole_order(&self, m: u32) -> usize {
        self.x_exp as usize * m as usize + self.y_exp as usize * (m as usize + 1)
    }

    /// The product of two monomials, itself a monomial.
    pub fn product(&self, other: &Monomial) -> Monomial {
        Monomial::new(self.x_exp + other.x_exp, self.y_exp + other.y_exp)
    }

    /// Evaluate at a projective point by substitution in the affine chart `z = 1`.
    ///
    /// # Errors
    ///
    /// Fails at points with `z = 0`, where every non-constant monomial has its pole.
    pub fn evaluate(&self, field: &GaloisField, point: &Point) -> HermitianCodeResult<FieldElement> {
        if point.is_at_infinity() {
            if self.x_exp == 0 && self.y_exp == 0 {
                return Ok(FieldElement::ONE);
            }
            return Err(MathError::Pole {
                function: self.to_string(),
                point: point.to_string(),
            }
            .into());
        }
        let z_inv = field.inv(point.z)?;
        let x = field.mul(point.x, z_inv);
        let y = field.mul(point.y, z_inv);
        Ok(field.mul(
            field.pow(x, self.x_exp as u64),
            field.pow(y, self.y_exp as u64),
        ))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x^{} y^{} / z^{}",
            self.x_exp,
            self.y_exp,
            self.x_exp + self.y_exp
        )
    }
}

/// Ordered basis of `L(a·Q)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basis {
    degree: usize,
    functions: Vec<Monomial>,
}

impl Basis {
    /// Degree bound `a` of the space.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn functions(&self) -> &[Monomial] {
        &self.functions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Monomial> {
        self.functions.iter()
    }
}

impl<'a> IntoIterator for &'a Basis {
    type Item = &'a Monomial;
    type IntoIter = std::slice::Iter<'a, Monomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

/// Build the basis of `L(a·Q)` on H_m, ordered by `x` exponent and then `y` exponent.
///
/// # Errors
///
/// Fails when `a <= 2g - 2`, and if the number of monomials disagrees with `a + 1 - g`.
pub fn riemann_roch_basis(m: u32, genus: usize, a: usize) -> HermitianCodeResult<Basis> {
    if a + 2 <= 2 * genus {
        return Err(ConstructionError::DegreeTooSmall { a, g: genus }.into());
    }

    let max_y = a / (m as usize + 1);
    let mut functions = Vec::new();
    for i in 0..=m {
        for j in 0..=max_y as u32 {
            let f = Monomial::new(i, j);
            if f.pole_order(m) <= a {
                functions.push(f);
            }
        }
    }

    let needed = a + 1 - genus;
    if functions.len() != needed {
        return Err(ConstructionError::DimensionMismatch {
            found: functions.len(),
            needed,
        }
        .into());
    }

    Ok(Basis {
        degree: a,
        functions,
    })
}
