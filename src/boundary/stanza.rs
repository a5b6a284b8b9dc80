//! Catalogue of boundary-condition stanzas.
//!
//! A stanza is the body of one patch entry inside `boundaryField`. Every
//! entry is written with an eight-space indent and a sixteen-column key.

use std::fmt;

use super::value::FieldValue;

/// Wall-function boundary conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallFunction {
    KqR,
    Epsilon,
    Omega,
    Nutk,
    KLowRe,
    NutLowRe,
}

impl WallFunction {
    pub fn name(&self) -> &'static str {
        match self {
            WallFunction::KqR => "kqRWallFunction",
            WallFunction::Epsilon => "epsilonWallFunction",
            WallFunction::Omega => "omegaWallFunction",
            WallFunction::Nutk => "nutkWallFunction",
            WallFunction::KLowRe => "kLowReWallFunction",
            WallFunction::NutLowRe => "nutLowReWallFunction",
        }
    }
}

/// Far-field boundary conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreestreamKind {
    Velocity,
    Pressure,
    /// Inflow/outflow switching for transported quantities.
    Generic,
}

impl FreestreamKind {
    pub fn name(&self) -> &'static str {
        match self {
            FreestreamKind::Velocity => "freestreamVelocity",
            FreestreamKind::Pressure => "freestreamPressure",
            FreestreamKind::Generic => "freestream",
        }
    }
}

/// Solver-native code for a coded inlet profile.
///
/// The code is passed through verbatim; only its indentation is adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedProfile {
    /// Name of the generated boundary condition; must not clash with a patch name.
    pub name: String,
    /// Body placed between `#{` and `#};`.
    pub code: String,
}

const VELOCITY_RAMP_CODE: &str = r#"const fvPatch& boundaryPatch = patch();
const vectorField& boundaryFaces = boundaryPatch.Cf();
vectorField field = *this;
const scalar currentTime = this->db().time().value();

forAll(boundaryFaces, faceI)
{
    const auto y = boundaryFaces[faceI].y();

    if (y > 0.5)
    {
        field[faceI] = vector(0.01 * currentTime, 0, 0);
    }
    else
    {
        field[faceI] = vector(0, 0, 0);
    }
}

*this == (field);"#;

impl Default for CodedProfile {
    /// Velocity ramping linearly in time along x above `y = 0.5`, at rest below.
    fn default() -> Self {
        Self {
            name: "customInletVelocityProfile".to_string(),
            code: VELOCITY_RAMP_CODE.to_string(),
        }
    }
}

/// One boundary-condition entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Stanza {
    /// `fixedValue`.
    Dirichlet(FieldValue),
    /// `zeroGradient`.
    Neumann,
    NoSlip,
    Advective,
    InletOutlet(FieldValue),
    Cyclic,
    Empty,
    WallFunction(WallFunction, FieldValue),
    /// `calculated` with value zero.
    ZeroCalculated,
    Freestream(FreestreamKind, FieldValue),
    Coded {
        value: FieldValue,
        profile: CodedProfile,
    },
}

impl Stanza {
    /// The OpenFOAM `type` keyword of this stanza.
    pub fn type_name(&self) -> &'static str {
        match self {
            Stanza::Dirichlet(_) => "fixedValue",
            Stanza::Neumann => "zeroGradient",
            Stanza::NoSlip => "noSlip",
            Stanza::Advective => "advective",
            Stanza::InletOutlet(_) => "inletOutlet",
            Stanza::Cyclic => "cyclic",
            Stanza::Empty => "empty",
            Stanza::WallFunction(function, _) => function.name(),
            Stanza::ZeroCalculated => "calculated",
            Stanza::Freestream(kind, _) => kind.name(),
            Stanza::Coded { .. } => "codedFixedValue",
        }
    }
}

fn entry(f: &mut fmt::Formatter<'_>, key: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "        {:<16}{};", key, value)
}

impl fmt::Display for Stanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        entry(f, "type", self.type_name())?;
        match self {
            Stanza::Neumann | Stanza::NoSlip | Stanza::Cyclic | Stanza::Empty => Ok(()),
            Stanza::Dirichlet(value) | Stanza::WallFunction(_, value) => entry(f, "value", value),
            Stanza::Advective => entry(f, "phi", "phi"),
            Stanza::InletOutlet(value) => entry(f, "inletValue", value),
            Stanza::ZeroCalculated => entry(f, "value", FieldValue::ZERO_SCALAR),
            Stanza::Freestream(_, value) => entry(f, "freestreamValue", value),
            Stanza::Coded { value, profile } => {
                entry(f, "value", value)?;
                writeln!(f)?;
                entry(f, "name", &profile.name)?;
                writeln!(f, "        code")?;
                writeln!(f, "        #{{")?;
                for line in profile.code.lines() {
                    if line.trim().is_empty() {
                        writeln!(f)?;
                    } else {
                        writeln!(f, "            {}", line)?;
                    }
                }
                writeln!(f, "        #}};")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn dirichlet_has_type_and_value() {
        let stanza = Stanza::Dirichlet(FieldValue::Scalar(0.015));
        assert_eq!(
            stanza.to_string(),
            "        type            fixedValue;\n        value           uniform 0.015;\n"
        );
    }

    #[test]
    fn valueless_stanzas_are_one_line() {
        assert_eq!(Stanza::Neumann.to_string(), "        type            zeroGradient;\n");
        assert_eq!(Stanza::NoSlip.to_string(), "        type            noSlip;\n");
        assert_eq!(Stanza::Cyclic.to_string(), "        type            cyclic;\n");
        assert_eq!(Stanza::Empty.to_string(), "        type            empty;\n");
    }

    #[test]
    fn advective_names_flux_field() {
        assert_eq!(
            Stanza::Advective.to_string(),
            "        type            advective;\n        phi             phi;\n"
        );
    }

    #[test]
    fn zero_calculated_is_uniform_zero() {
        assert_eq!(
            Stanza::ZeroCalculated.to_string(),
            "        type            calculated;\n        value           uniform 0;\n"
        );
    }

    #[test]
    fn freestream_and_inlet_outlet_keys() {
        let value = FieldValue::Vector(DVec3::new(6.0, 0.0, 0.0));
        assert_eq!(
            Stanza::Freestream(FreestreamKind::Velocity, value).to_string(),
            "        type            freestreamVelocity;\n        freestreamValue uniform (6 0 0);\n"
        );
        assert_eq!(
            Stanza::InletOutlet(value).to_string(),
            "        type            inletOutlet;\n        inletValue      uniform (6 0 0);\n"
        );
    }

    #[test]
    fn wall_functions_carry_value() {
        let stanza = Stanza::WallFunction(WallFunction::KLowRe, FieldValue::Scalar(1.5));
        assert_eq!(
            stanza.to_string(),
            "        type            kLowReWallFunction;\n        value           uniform 1.5;\n"
        );
    }

    #[test]
    fn coded_profile_wraps_code_block() {
        let stanza = Stanza::Coded {
            value: FieldValue::Vector(DVec3::new(1.0, 0.0, 0.0)),
            profile: CodedProfile {
                name: "ramp".to_string(),
                code: "line one;\n\nline two;".to_string(),
            },
        };
        assert_eq!(
            stanza.to_string(),
            concat!(
                "        type            codedFixedValue;\n",
                "        value           uniform (1 0 0);\n",
                "\n",
                "        name            ramp;\n",
                "        code\n",
                "        #{\n",
                "            line one;\n",
                "\n",
                "            line two;\n",
                "        #};\n",
            )
        );
    }

    #[test]
    fn default_profile_ramps_above_half_height() {
        let profile = CodedProfile::default();
        assert_eq!(profile.name, "customInletVelocityProfile");
        assert!(profile.code.contains("if (y > 0.5)"));
        assert!(profile.code.contains("vector(0.01 * currentTime, 0, 0)"));
    }
}
