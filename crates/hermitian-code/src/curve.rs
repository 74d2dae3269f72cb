// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The Hermitian curve `x^(m+1) + y^m·z + y·z^m = 0` over GF(m^2) and its rational points.

use crate::errors::{ConstructionError, HermitianCodeResult};
use crate::field::{FieldElement, GaloisField};
use crate::math::{curve_parameter, genus};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A projective point `(x : y : z)`.
///
/// Points produced by [`HermitianCurve::rational_points`] are normalized so that the
/// last non-zero coordinate is one. The derived ordering compares `x`, then `y`,
/// then `z` by integer representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
}

impl Point {
    pub fn new(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        Self { x, y, z }
    }

    pub fn is_at_infinity(&self) -> bool {
        self.z.is_zero()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {})", self.x, self.y, self.z)
    }
}

/// The Hermitian curve H_m together with its field GF(m^2).
#[derive(Debug, Clone)]
pub struct HermitianCurve {
    m: u32,
    field: GaloisField,
}

impl HermitianCurve {
    /// Builds H_m. Fails if `m` is not a supported prime power.
    pub fn new(m: u32) -> HermitianCodeResult<Self> {
        let (p, e) = curve_parameter(m)?;
        let field = GaloisField::new(p, 2 * e)?;
        debug!(m, order = field.order(), "built curve field");
        Ok(Self { m, field })
    }

    pub fn m(&self) -> u32 {
        self.m
    }

    pub fn genus(&self) -> usize {
        genus(self.m)
    }

    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Evaluate the defining polynomial at `(x, y, z)`.
    pub fn evaluate(&self, x: FieldElement, y: FieldElement, z: FieldElement) -> FieldElement {
        let f = &self.field;
        let m = self.m as u64;
        let x_term = f.pow(x, m + 1);
        let y_term = f.mul(f.pow(y, m), z);
        let z_term = f.mul(y, f.pow(z, m));
        f.add(f.add(x_term, y_term), z_term)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.evaluate(point.x, point.y, point.z).is_zero()
    }

    /// Every projective rational point, one normalized representative each, sorted.
    pub fn rational_points(&self) -> Vec<Point> {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;

        let affine = self
            .field
            .elements()
            .flat_map(|x| self.field.elements().map(move |y| Point::new(x, y, one)));
        let at_infinity = self.field.elements().map(|x| Point::new(x, one, zero));
        let last = std::iter::once(Point::new(one, zero, zero));

        let mut points: Vec<Point> = affine
            .chain(at_infinity)
            .chain(last)
            .filter(|p| self.contains(p))
            .collect();
        points.sort();

        debug!(m = self.m, count = points.len(), "enumerated rational points");
        points
    }

    /// Split the rational points into the point at infinity `Q` and the ordered
    /// evaluation points `P`.
    pub fn split_points(&self) -> HermitianCodeResult<(Point, Vec<Point>)> {
        let mut points = self.rational_points();
        let index = points
            .iter()
            .position(Point::is_at_infinity)
            .ok_or(ConstructionError::MissingInfinityPoint)?;
        let q = points.remove(index);
        Ok((q, points))
    }
}
