// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! One-point algebraic geometry codes on Hermitian curves.
//!
//! This crate builds the code `C_L(D, a·Q)` on the Hermitian curve
//! `x^(m+1) + y^m·z + y·z^m = 0` over GF(m^2), where `Q = (0 : 1 : 0)` and `D` is the sum
//! of the `n = m^3` affine rational points, and decodes it with a syndrome and
//! error-locator algorithm.
//!
//! ## Mathematical Background
//!
//! The parity-check matrix `H` holds the values of a basis of the Riemann-Roch space
//! `L(a·Q)` at the points, `H[i][j] = f_i(P_j)`, and the generator matrix `G` spans its
//! null space, so `G · H^T = 0`. For genus `g = m(m-1)/2` the code has designed distance
//! `d = a - 2g + 2` and the decoder corrects up to `t = floor((a - 3g + 1) / 2)` errors.
//!
//! ```
//! use hermitian_code::HermitianCode;
//!
//! let code = HermitianCode::new(2, Some(6)).unwrap();
//! let w = code.field().generator();
//! let message = vec![w; code.k()];
//! let mut word = code.encode(&message).unwrap();
//! word[0] = code.field().add(word[0], w);
//! assert_eq!(code.decode(&word).unwrap(), message);
//! ```
//!
//! ## Constraint
//!
//! `m` must be a prime power and `a` at least `3g - 1`.

pub mod builder;
pub mod cache;
pub mod channel;
pub mod code;
pub mod config;
pub mod curve;
pub mod decoder;
pub mod errors;
pub mod field;
pub mod linalg;
pub mod math;
pub mod matrix;
pub mod riemann_roch;
pub mod utils;

// Re-export commonly used types for convenience
pub use builder::{build_code_matrices, MatrixStrategy};
pub use cache::EvaluationCache;
pub use code::HermitianCode;
pub use config::{load_config, HermitianCodeConfig};
pub use curve::{HermitianCurve, Point};
pub use decoder::DecodedWord;
pub use errors::{HermitianCodeError, HermitianCodeResult};
pub use field::{FieldElement, GaloisField};
pub use linalg::{echelon_form, null_space, verify_parity_matrix};
pub use matrix::Matrix;
pub use riemann_roch::{riemann_roch_basis, Basis, Monomial};
