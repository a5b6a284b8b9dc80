//! Uniform field values as written in dictionaries.

use std::fmt;

use glam::DVec3;

/// A uniform value of a scalar, vector or symmetric-tensor field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Scalar(f64),
    Vector(DVec3),
    /// Components `(xx xy xz yy yz zz)`.
    SymmTensor([f64; 6]),
}

impl FieldValue {
    pub const ZERO_SCALAR: FieldValue = FieldValue::Scalar(0.0);
    pub const ZERO_VECTOR: FieldValue = FieldValue::Vector(DVec3::ZERO);
    pub const ZERO_SYMM_TENSOR: FieldValue = FieldValue::SymmTensor([0.0; 6]);

    /// Isotropic Reynolds stress `2/3 k I`.
    pub fn isotropic_stress(k: f64) -> Self {
        let uiui = (2.0 / 3.0) * k;
        FieldValue::SymmTensor([uiui, 0.0, 0.0, uiui, 0.0, uiui])
    }
}

// Adding positive zero turns -0.0 into 0.0.
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

/// Formats as `uniform <v>`, `uniform (<x> <y> <z>)` or `uniform (<6 components>)`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(value) => write!(f, "uniform {}", unsigned_zero(*value)),
            FieldValue::Vector(v) => write!(
                f,
                "uniform ({} {} {})",
                unsigned_zero(v.x),
                unsigned_zero(v.y),
                unsigned_zero(v.z)
            ),
            FieldValue::SymmTensor(c) => {
                let c = (*c).map(unsigned_zero);
                write!(
                    f,
                    "uniform ({} {} {} {} {} {})",
                    c[0], c[1], c[2], c[3], c[4], c[5]
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_values_without_decimals() {
        assert_eq!(FieldValue::ZERO_SCALAR.to_string(), "uniform 0");
        assert_eq!(FieldValue::ZERO_VECTOR.to_string(), "uniform (0 0 0)");
        assert_eq!(FieldValue::ZERO_SYMM_TENSOR.to_string(), "uniform (0 0 0 0 0 0)");
    }

    #[test]
    fn formats_vector_components_in_order() {
        let value = FieldValue::Vector(DVec3::new(6.0, -0.5, 0.0));
        assert_eq!(value.to_string(), "uniform (6 -0.5 0)");
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        let value = FieldValue::Vector(DVec3::new(1.0, -0.0, 0.0));
        assert_eq!(value.to_string(), "uniform (1 0 0)");
    }

    #[test]
    fn isotropic_stress_has_diagonal_two_thirds_k() {
        let value = FieldValue::isotropic_stress(0.015);
        match value {
            FieldValue::SymmTensor(c) => {
                for i in [0, 3, 5] {
                    assert!((c[i] - 0.01).abs() < 1e-15);
                }
                for i in [1, 2, 4] {
                    assert_eq!(c[i], 0.0);
                }
            }
            other => panic!("expected tensor, got {other:?}"),
        }
    }
}
