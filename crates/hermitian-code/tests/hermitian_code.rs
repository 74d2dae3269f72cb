// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use hermitian_code::linalg::{left_null_space, rank, row_basis};
use hermitian_code::{
    echelon_form, verify_parity_matrix, FieldElement, GaloisField, HermitianCode,
    HermitianCodeError, MatrixStrategy, Matrix,
};
use proptest::prelude::*;
use std::sync::OnceLock;

/// Helper: the matrix with entries `a + b·w` given as `(a, b)` pairs over GF(4)
fn gf4_matrix(field: &GaloisField, rows: &[&[(u32, u32)]]) -> Matrix {
    let w = field.generator();
    Matrix::new(
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|&(a, b)| {
                        let constant = if a == 1 {
                            FieldElement::ONE
                        } else {
                            FieldElement::ZERO
                        };
                        let linear = if b == 1 { w } else { FieldElement::ZERO };
                        field.add(constant, linear)
                    })
                    .collect()
            })
            .collect(),
    )
    .unwrap()
}

fn small_code() -> &'static HermitianCode {
    static CODE: OnceLock<HermitianCode> = OnceLock::new();
    CODE.get_or_init(|| HermitianCode::new(2, Some(6)).unwrap())
}

/// Encode `[w^(i+j)]`, add `w^(i+j)` at every even position below `2t`, decode.
fn run_reference_scenario(code: &HermitianCode) {
    let f = code.field();
    let w = f.generator();
    for j in 0..10u64 {
        let message: Vec<FieldElement> = (0..code.k() as u64).map(|i| f.pow(w, i + j)).collect();
        let mut word = code.encode(&message).unwrap();
        assert_eq!(word.len(), code.n());

        for i in 0..code.t() {
            word[i * 2] = f.add(word[i * 2], f.pow(w, i as u64 + j));
        }

        let decoded = code.decode(&word).unwrap();
        assert_eq!(decoded, message, "j = {}", j);
    }
}

#[test]
fn test_m2_a6_matrices_match_reference() {
    let code = small_code();
    let f = code.field();
    assert_eq!((code.n(), code.k(), code.t()), (8, 2, 2));

    const O: (u32, u32) = (0, 0);
    const I: (u32, u32) = (1, 0);
    const W: (u32, u32) = (0, 1);
    const V: (u32, u32) = (1, 1); // w + 1

    let expected_g = gf4_matrix(f, &[&[I, I, O, O, V, V, W, W], &[O, O, I, I, W, W, V, V]]);
    assert_eq!(
        echelon_form(f, code.generator_matrix()).unwrap(),
        echelon_form(f, &expected_g).unwrap()
    );

    // Rows: 1, y, y^2, x, x·y, x^2 at the affine points
    let expected_h = gf4_matrix(
        f,
        &[
            &[I, I, I, I, I, I, I, I],
            &[O, I, W, V, W, V, W, V],
            &[O, I, V, W, V, W, V, W],
            &[O, O, I, I, W, W, V, V],
            &[O, O, W, V, V, I, I, W],
            &[O, O, I, I, V, V, W, W],
        ],
    );
    assert_eq!(
        echelon_form(f, code.parity_check_matrix()).unwrap(),
        echelon_form(f, &expected_h).unwrap()
    );
    assert_eq!(code.parity_check_matrix(), &expected_h);
}

#[test]
fn test_generator_orthogonal_to_parity_check() {
    for (m, a) in [(2, 2), (2, 6), (2, 7), (3, 14), (4, 40), (4, 53)] {
        let code = HermitianCode::new(m, Some(a)).unwrap();
        let f = code.field();
        assert!(verify_parity_matrix(f, code.generator_matrix(), code.parity_check_matrix()).unwrap());
        assert_eq!(code.n(), (m * m * m) as usize);
        assert_eq!(
            code.k(),
            code.n() - rank(f, code.parity_check_matrix()).unwrap()
        );
        assert_eq!(code.d(), a + 2 - 2 * code.g());
    }
}

#[test]
fn test_reference_decoding_m2_a6() {
    run_reference_scenario(small_code());
}

#[test]
fn test_reference_decoding_m4_a40() {
    let code = HermitianCode::new(4, Some(40)).unwrap();
    assert_eq!((code.g(), code.t()), (6, 11));
    run_reference_scenario(&code);
}

#[test]
fn test_decoding_odd_characteristic() {
    let code = HermitianCode::new(3, Some(14)).unwrap();
    assert_eq!((code.n(), code.g(), code.t()), (27, 3, 3));
    run_reference_scenario(&code);
}

#[test]
fn test_decoding_with_dual_strategy() {
    let code = HermitianCode::with_strategy(4, Some(53), MatrixStrategy::Dual).unwrap();
    assert_eq!(code.strategy(), MatrixStrategy::Dual);
    run_reference_scenario(&code);
}

#[test]
fn test_error_free_word_decodes() {
    let code = small_code();
    let w = code.field().generator();
    let message = vec![w, FieldElement::ZERO];
    let decoded = code.decode_detailed(&code.encode(&message).unwrap()).unwrap();
    assert_eq!(decoded.message, message);
    assert!(decoded.corrections.is_empty());
}

#[test]
fn test_length_mismatch_rejected_without_state_change() {
    let code = HermitianCode::new(2, Some(6)).unwrap();
    let g = code.generator_matrix().clone();
    let cached = code.evaluation_cache().len();

    let err = code.encode(&[FieldElement::ONE]).unwrap_err();
    assert!(matches!(err, HermitianCodeError::InvalidArgument { .. }));
    let err = code.decode(&[FieldElement::ONE; 7]).unwrap_err();
    assert!(matches!(err, HermitianCodeError::InvalidArgument { .. }));

    assert_eq!(code.generator_matrix(), &g);
    assert_eq!(code.evaluation_cache().len(), cached);
}

#[test]
fn test_too_many_errors_leave_matrices_unchanged() {
    let code = HermitianCode::new(4, Some(40)).unwrap();
    let f = code.field();
    let w = f.generator();
    let g = code.generator_matrix().clone();
    let h = code.parity_check_matrix().clone();

    let message: Vec<FieldElement> = (0..code.k() as u64).map(|i| f.pow(w, i)).collect();
    let mut word = code.encode(&message).unwrap();
    for i in 0..=code.t() {
        word[i * 3] = f.add(word[i * 3], f.pow(w, i as u64));
    }

    // Beyond t the decoder may fail or return a wrong message; both are acceptable
    match code.decode(&word) {
        Ok(decoded) => assert_eq!(decoded.len(), code.k()),
        Err(e) => assert!(e.is_decoding()),
    }
    assert_eq!(code.generator_matrix(), &g);
    assert_eq!(code.parity_check_matrix(), &h);

    // The code keeps working afterwards
    let clean = code.encode(&message).unwrap();
    assert_eq!(code.decode(&clean).unwrap(), message);
}

#[test]
fn test_syndrome_kernel_is_never_trivial_within_radius() {
    // With at most t errors the locator always exists
    let code = small_code();
    let f = code.field();
    let w = f.generator();
    let mut word = code.encode(&[w, w]).unwrap();
    word[1] = f.add(word[1], FieldElement::ONE);
    word[6] = f.add(word[6], w);

    let mut cache = hermitian_code::EvaluationCache::new();
    let decoded = code.decode_with_cache(&word, &mut cache).unwrap();
    assert_eq!(decoded.message, vec![w, w]);
    assert_eq!(decoded.corrections, vec![(1, FieldElement::ONE), (6, w)]);
    assert!(!cache.is_empty());
}

#[test]
fn test_construction_errors() {
    for m in [0u32, 1, 6, 10, 12] {
        let err = HermitianCode::new(m, None).unwrap_err();
        assert!(matches!(err, HermitianCodeError::Construction { .. }), "m = {}", m);
    }
    // a below 3g - 1 = 8 for m = 3
    for a in 0..=4 {
        let err = HermitianCode::new(3, Some(a)).unwrap_err();
        assert!(matches!(err, HermitianCodeError::Construction { .. }), "a = {}", a);
    }
}

#[test]
fn test_left_null_space_of_syndromes() {
    let code = small_code();
    let f = code.field();
    let s = Matrix::zeros(3, 3);
    assert_eq!(left_null_space(f, &s).unwrap().rows(), 3);
    assert_eq!(row_basis(f, &s).unwrap().rows(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_within_radius(
        message in prop::collection::vec(0u32..4, 2),
        positions in prop::collection::btree_set(0usize..8, 0..=2),
        values in prop::collection::vec(1u32..4, 2),
    ) {
        let code = small_code();
        let f = code.field();
        let message: Vec<FieldElement> = message.iter().map(|&v| f.element(v).unwrap()).collect();
        let mut word = code.encode(&message).unwrap();
        for (&pos, &value) in positions.iter().zip(&values) {
            word[pos] = f.add(word[pos], f.element(value).unwrap());
        }
        let decoded = code.decode(&word).unwrap();
        prop_assert_eq!(decoded, message);
    }
}
