//! Physical fields written to the initial-time directory.

/// OpenFOAM geometric field class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    Scalar,
    Vector,
    SymmTensor,
}

impl FieldClass {
    /// Class name used in the `FoamFile` header.
    pub fn name(&self) -> &'static str {
        match self {
            FieldClass::Scalar => "volScalarField",
            FieldClass::Vector => "volVectorField",
            FieldClass::SymmTensor => "volSymmTensorField",
        }
    }
}

/// A field with its own file in `0/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Velocity.
    U,
    /// Kinematic pressure.
    P,
    /// Turbulent kinetic energy.
    K,
    /// Turbulent part of k (kkLOmega).
    Kt,
    /// Laminar part of k (kkLOmega).
    Kl,
    /// Turbulent viscosity.
    Nut,
    /// Specific dissipation rate.
    Omega,
    /// Dissipation rate.
    Epsilon,
    /// Spalart-Allmaras working variable.
    NuTilda,
    /// Transition onset momentum-thickness Reynolds number.
    ReThetat,
    /// Intermittency.
    GammaInt,
    /// Reynolds stress tensor.
    R,
}

impl Field {
    /// All fields in the order they are written.
    pub const ALL: [Field; 12] = [
        Field::U,
        Field::P,
        Field::K,
        Field::Kt,
        Field::Kl,
        Field::Nut,
        Field::Omega,
        Field::Epsilon,
        Field::NuTilda,
        Field::ReThetat,
        Field::GammaInt,
        Field::R,
    ];

    /// File and object name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::U => "U",
            Field::P => "p",
            Field::K => "k",
            Field::Kt => "kt",
            Field::Kl => "kl",
            Field::Nut => "nut",
            Field::Omega => "omega",
            Field::Epsilon => "epsilon",
            Field::NuTilda => "nuTilda",
            Field::ReThetat => "ReThetat",
            Field::GammaInt => "gammaInt",
            Field::R => "R",
        }
    }

    pub fn class(&self) -> FieldClass {
        match self {
            Field::U => FieldClass::Vector,
            Field::R => FieldClass::SymmTensor,
            _ => FieldClass::Scalar,
        }
    }

    /// Dimension set `[kg m s K mol A cd]`.
    pub fn dimensions(&self) -> &'static str {
        match self {
            Field::U => "[0 1 -1 0 0 0 0]",
            Field::P | Field::K | Field::Kt | Field::Kl | Field::R => "[0 2 -2 0 0 0 0]",
            Field::Nut | Field::NuTilda => "[0 2 -1 0 0 0 0]",
            Field::Omega => "[0 0 -1 0 0 0 0]",
            Field::Epsilon => "[0 2 -3 0 0 0 0]",
            Field::ReThetat | Field::GammaInt => "[0 0 0 0 0 0 0]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Field::ALL.iter().map(Field::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn classes_match_field_rank() {
        assert_eq!(Field::U.class().name(), "volVectorField");
        assert_eq!(Field::R.class().name(), "volSymmTensorField");
        assert_eq!(Field::GammaInt.class().name(), "volScalarField");
    }

    #[test]
    fn dimensions() {
        assert_eq!(Field::Epsilon.dimensions(), "[0 2 -3 0 0 0 0]");
        assert_eq!(Field::Omega.dimensions(), "[0 0 -1 0 0 0 0]");
        assert_eq!(Field::NuTilda.dimensions(), Field::Nut.dimensions());
    }
}
