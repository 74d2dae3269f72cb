// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{ConstructionError, HermitianCodeResult};

/// Largest supported curve parameter. Bounds the size of GF(m^2) tables and
/// the brute-force scan of the projective plane.
pub const MAX_CURVE_PARAMETER: u32 = 32;

/// Decompose `n` as `p^e` with `p` prime, or return `None` if `n` is not a prime power
pub fn prime_power(n: u32) -> Option<(u32, u32)> {
    if n < 2 {
        return None;
    }

    let p = (2..=n).find(|d| n % d == 0)?;
    let mut rest = n;
    let mut exponent = 0;
    while rest % p == 0 {
        rest /= p;
        exponent += 1;
    }

    (rest == 1).then_some((p, exponent))
}

/// Validate the curve parameter and return its `(p, e)` decomposition
pub fn curve_parameter(m: u32) -> HermitianCodeResult<(u32, u32)> {
    if !(2..=MAX_CURVE_PARAMETER).contains(&m) {
        if prime_power(m).is_none() {
            return Err(ConstructionError::NotPrimePower { m }.into());
        }
        return Err(ConstructionError::ParameterOutOfRange {
            m,
            max: MAX_CURVE_PARAMETER,
        }
        .into());
    }
    prime_power(m).ok_or_else(|| ConstructionError::NotPrimePower { m }.into())
}

/// Genus of the Hermitian curve H_m: m(m-1)/2
pub fn genus(m: u32) -> usize {
    let m = m as usize;
    m * (m - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_power() {
        assert_eq!(prime_power(2), Some((2, 1)));
        assert_eq!(prime_power(4), Some((2, 2)));
        assert_eq!(prime_power(9), Some((3, 2)));
        assert_eq!(prime_power(16), Some((2, 4)));
        assert_eq!(prime_power(25), Some((5, 2)));
        assert_eq!(prime_power(7), Some((7, 1)));
        assert_eq!(prime_power(6), None);
        assert_eq!(prime_power(12), None);
        assert_eq!(prime_power(1), None);
        assert_eq!(prime_power(0), None);
    }

    #[test]
    fn test_curve_parameter() {
        assert_eq!(curve_parameter(4).unwrap(), (2, 2));
        assert!(curve_parameter(6).is_err());
        assert!(curve_parameter(1).is_err());
        assert!(curve_parameter(64).is_err());
    }

    #[test]
    fn test_genus() {
        assert_eq!(genus(2), 1);
        assert_eq!(genus(3), 3);
        assert_eq!(genus(4), 6);
        assert_eq!(genus(8), 28);
    }
}
