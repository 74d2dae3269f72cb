// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Arithmetic over the finite field GF(p^e).
//!
//! Elements are stored by their integer representation: the base-`p` digits of the
//! integer are the coefficients of a polynomial in the generator `w`, lowest degree
//! first. For GF(4) this gives `0, 1, w, w + 1` as `0, 1, 2, 3`.
//!
//! The field is defined by the lexicographically smallest monic primitive polynomial
//! of degree `e` over GF(p), so `w` always generates the multiplicative group and
//! multiplication can go through log/antilog tables.

use crate::errors::{ConstructionError, HermitianCodeResult, MathError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An element of GF(p^e), in integer representation.
///
/// Elements carry no reference to their field; arithmetic goes through [`GaloisField`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FieldElement(u32);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement(0);
    pub const ONE: FieldElement = FieldElement(1);

    /// Returns the integer representation.
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The field GF(p^e) with precomputed log/antilog tables.
#[derive(Debug, Clone)]
pub struct GaloisField {
    characteristic: u32,
    degree: u32,
    order: u32,
    /// Non-leading coefficients of the monic defining polynomial, lowest first
    modulus: Vec<u32>,
    exp: Vec<FieldElement>,
    log: Vec<u32>,
}

impl GaloisField {
    /// Builds GF(p^e). `characteristic` must be prime; this is not re-checked here.
    pub fn new(characteristic: u32, degree: u32) -> HermitianCodeResult<Self> {
        let order = characteristic.pow(degree);

        // Enumerate the low coefficients of x^e + c_{e-1} x^{e-1} + ... + c_0
        for code in 0..order {
            let modulus = digits(code, characteristic, degree as usize);
            if modulus[0] == 0 {
                continue;
            }
            if let Some((exp, log)) = power_table(characteristic, order, &modulus) {
                return Ok(Self {
                    characteristic,
                    degree,
                    order,
                    modulus,
                    exp,
                    log,
                });
            }
        }

        Err(ConstructionError::NoPrimitivePolynomial {
            characteristic,
            degree,
        }
        .into())
    }

    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// Extension degree over the prime field
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Number of elements
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Coefficients of the monic defining polynomial, lowest degree first, leading 1 included.
    pub fn modulus(&self) -> Vec<u32> {
        let mut coeffs = self.modulus.clone();
        coeffs.push(1);
        coeffs
    }

    /// The primitive element `w`.
    pub fn generator(&self) -> FieldElement {
        self.exp[1 % self.exp.len()]
    }

    /// Converts an integer representation into an element of this field.
    pub fn element(&self, value: u32) -> HermitianCodeResult<FieldElement> {
        if value >= self.order {
            return Err(MathError::ElementOutOfRange {
                value,
                order: self.order,
            }
            .into());
        }
        Ok(FieldElement(value))
    }

    /// All elements in integer order.
    pub fn elements(&self) -> impl Iterator<Item = FieldElement> {
        (0..self.order).map(FieldElement)
    }

    pub fn add(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        if self.characteristic == 2 {
            return FieldElement(a.0 ^ b.0);
        }
        self.digitwise(a, b, |x, y| x + y)
    }

    pub fn neg(&self, a: FieldElement) -> FieldElement {
        if self.characteristic == 2 {
            return a;
        }
        self.digitwise(FieldElement::ZERO, a, |x, y| x + self.characteristic - y)
    }

    pub fn sub(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        self.add(a, self.neg(b))
    }

    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        if a.is_zero() || b.is_zero() {
            return FieldElement::ZERO;
        }
        let group = self.order as usize - 1;
        let idx = (self.log[a.0 as usize] as usize + self.log[b.0 as usize] as usize) % group;
        self.exp[idx]
    }

    /// Multiplicative inverse; fails for zero.
    pub fn inv(&self, a: FieldElement) -> HermitianCodeResult<FieldElement> {
        if a.is_zero() {
            return Err(MathError::NoInverse { order: self.order }.into());
        }
        let group = self.order as usize - 1;
        let idx = (group - self.log[a.0 as usize] as usize) % group;
        Ok(self.exp[idx])
    }

    pub fn div(&self, a: FieldElement, b: FieldElement) -> HermitianCodeResult<FieldElement> {
        Ok(self.mul(a, self.inv(b)?))
    }

    /// `a^exponent`, with `0^0 = 1`.
    pub fn pow(&self, a: FieldElement, exponent: u64) -> FieldElement {
        if exponent == 0 {
            return FieldElement::ONE;
        }
        if a.is_zero() {
            return FieldElement::ZERO;
        }
        let group = self.order as u64 - 1;
        let idx = (self.log[a.0 as usize] as u64 * (exponent % group)) % group;
        self.exp[idx as usize]
    }

    /// `sum_i a_i * b_i` over the shorter of the two slices.
    pub fn dot(&self, a: &[FieldElement], b: &[FieldElement]) -> FieldElement {
        a.iter()
            .zip(b)
            .fold(FieldElement::ZERO, |acc, (&x, &y)| self.add(acc, self.mul(x, y)))
    }

    /// Coordinates over GF(p), lowest power of `w` first.
    pub fn coordinates(&self, a: FieldElement) -> Vec<u32> {
        digits(a.0, self.characteristic, self.degree as usize)
    }

    /// Inverse of [`GaloisField::coordinates`].
    pub fn from_coordinates(&self, coords: &[u32]) -> HermitianCodeResult<FieldElement> {
        if coords.len() != self.degree as usize || coords.iter().any(|&c| c >= self.characteristic)
        {
            return Err(MathError::ElementOutOfRange {
                value: coords.len() as u32,
                order: self.order,
            }
            .into());
        }
        Ok(FieldElement(undigits(coords, self.characteristic)))
    }

    fn digitwise(&self, a: FieldElement, b: FieldElement, op: impl Fn(u32, u32) -> u32) -> FieldElement {
        let p = self.characteristic;
        let (mut x, mut y) = (a.0, b.0);
        let mut out = 0;
        let mut place = 1;
        for _ in 0..self.degree {
            out += (op(x % p, y % p) % p) * place;
            place *= p;
            x /= p;
            y /= p;
        }
        FieldElement(out)
    }
}

fn digits(mut value: u32, base: u32, len: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(value % base);
        value /= base;
    }
    out
}

fn undigits(coeffs: &[u32], base: u32) -> u32 {
    coeffs.iter().rev().fold(0, |acc, &c| acc * base + c)
}

/// Walks the powers of `x` modulo `x^e + modulus`. Returns the antilog and log tables
/// when `x` has multiplicative order exactly `order - 1`, i.e. the polynomial is primitive.
fn power_table(p: u32, order: u32, modulus: &[u32]) -> Option<(Vec<FieldElement>, Vec<u32>)> {
    let degree = modulus.len();
    let group = order as usize - 1;
    let mut exp = Vec::with_capacity(group);
    let mut log = vec![u32::MAX; order as usize];
    let mut state = vec![0u32; degree];
    state[0] = 1;

    for k in 0..group {
        let value = undigits(&state, p);
        if value == 0 || log[value as usize] != u32::MAX {
            return None;
        }
        log[value as usize] = k as u32;
        exp.push(FieldElement(value));

        // state <- state * x, reducing x^e by -modulus
        let carry = state[degree - 1];
        for i in (1..degree).rev() {
            state[i] = state[i - 1];
        }
        state[0] = 0;
        if carry != 0 {
            for (s, &c) in state.iter_mut().zip(modulus) {
                *s = (*s + p - (carry * c) % p) % p;
            }
        }
    }

    (undigits(&state, p) == 1).then_some((exp, log))
}
