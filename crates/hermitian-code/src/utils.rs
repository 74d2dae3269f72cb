// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::field::{FieldElement, GaloisField};
use crate::matrix::Matrix;

/// Render a field element as a polynomial in the generator `w`, e.g. `w^2 + 1`.
pub fn format_element(field: &GaloisField, element: FieldElement) -> String {
    if element.is_zero() {
        return "0".to_string();
    }
    let terms: Vec<String> = field
        .coordinates(element)
        .iter()
        .enumerate()
        .rev()
        .filter(|&(_, &c)| c != 0)
        .map(|(power, &c)| {
            let monomial = match power {
                0 => String::new(),
                1 => "w".to_string(),
                _ => format!("w^{}", power),
            };
            match (c, power) {
                (_, 0) => c.to_string(),
                (1, _) => monomial,
                _ => format!("{}*{}", c, monomial),
            }
        })
        .collect();
    terms.join(" + ")
}

pub fn print_matrix(name: &str, matrix: &Matrix, field: &GaloisField) {
    println!("{} ({}x{}):", name, matrix.rows(), matrix.cols());

    let rendered: Vec<Vec<String>> = matrix
        .data()
        .iter()
        .map(|row| row.iter().map(|&x| format_element(field, x)).collect())
        .collect();
    let max_width = rendered
        .iter()
        .flat_map(|row| row.iter())
        .map(String::len)
        .max()
        .unwrap_or(1);

    for row in rendered {
        let cells: Vec<String> = row
            .iter()
            .map(|s| format!("{:>width$}", s, width = max_width))
            .collect();
        println!("  [{}]", cells.join(", "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_element() {
        let f = GaloisField::new(2, 2).unwrap();
        let w = f.generator();
        assert_eq!(format_element(&f, FieldElement::ZERO), "0");
        assert_eq!(format_element(&f, FieldElement::ONE), "1");
        assert_eq!(format_element(&f, w), "w");
        assert_eq!(format_element(&f, f.mul(w, w)), "w + 1");

        let f9 = GaloisField::new(3, 2).unwrap();
        assert_eq!(format_element(&f9, f9.element(7).unwrap()), "2*w + 1");
    }
}
