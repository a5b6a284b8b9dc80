//! Decision table mapping (boundary type, field) to a stanza.

use super::field::Field;
use super::patch::BoundaryType;
use super::stanza::{CodedProfile, FreestreamKind, Stanza, WallFunction};
use super::value::FieldValue;
use crate::turbulence::{RansModel, WallModelling};

/// Case-wide settings that influence stanza selection.
#[derive(Debug, Clone, PartialEq)]
pub struct StanzaContext {
    pub wall_modelling: WallModelling,
    pub rans_model: RansModel,
    /// Kinematic viscosity, used for the low-Re nuTilda wall value.
    pub nu: f64,
    /// Coded inlet profile replacing the fixed inlet velocity, if enabled.
    pub custom_inlet_profile: Option<CodedProfile>,
}

/// Resolves the stanza for one field on one patch.
///
/// `value` is the freestream (inlet) value of the field and is embedded in
/// value-carrying stanzas.
pub fn resolve(
    boundary: BoundaryType,
    field: Field,
    value: &FieldValue,
    ctx: &StanzaContext,
) -> Stanza {
    use BoundaryType as B;

    match (boundary, field) {
        (B::Cyclic, _) => Stanza::Cyclic,
        (B::Empty, _) => Stanza::Empty,
        (B::Wall, _) => wall_stanza(field, value, ctx),
        (_, Field::Nut) => Stanza::ZeroCalculated,

        (B::Inlet, Field::U) => match &ctx.custom_inlet_profile {
            Some(profile) => Stanza::Coded {
                value: *value,
                profile: profile.clone(),
            },
            None => Stanza::Dirichlet(*value),
        },
        (B::Inlet, Field::P) => Stanza::Neumann,
        (B::Inlet, _) => Stanza::Dirichlet(*value),

        (B::Freestream, Field::U) => Stanza::Freestream(FreestreamKind::Velocity, *value),
        (B::Freestream, Field::P) => Stanza::Freestream(FreestreamKind::Pressure, *value),
        (B::Freestream, _) => Stanza::Freestream(FreestreamKind::Generic, *value),

        (B::Symmetry, _) => Stanza::Neumann,

        (
            B::Outlet | B::BackflowOutlet | B::AdvectiveOutlet,
            Field::ReThetat | Field::GammaInt,
        ) => Stanza::Neumann,

        (B::Outlet, Field::P) => Stanza::Dirichlet(FieldValue::ZERO_SCALAR),
        (B::Outlet, _) => Stanza::Neumann,

        (B::BackflowOutlet, Field::P) => Stanza::Dirichlet(FieldValue::ZERO_SCALAR),
        (B::BackflowOutlet, _) => Stanza::InletOutlet(*value),

        (B::AdvectiveOutlet, _) => Stanza::Advective,
    }
}

fn wall_stanza(field: Field, value: &FieldValue, ctx: &StanzaContext) -> Stanza {
    use WallModelling::{HighRe, LowRe};

    match (field, ctx.wall_modelling) {
        (Field::U, _) => Stanza::NoSlip,
        (Field::P, _) => Stanza::Neumann,

        (Field::K, LowRe) => Stanza::WallFunction(WallFunction::KLowRe, *value),
        (Field::Kt | Field::Kl, LowRe) => Stanza::Dirichlet(*value),
        (Field::K | Field::Kt | Field::Kl, HighRe) => {
            Stanza::WallFunction(WallFunction::KqR, *value)
        }

        (Field::Nut, LowRe) => Stanza::WallFunction(WallFunction::NutLowRe, *value),
        (Field::Nut, HighRe) => Stanza::WallFunction(WallFunction::Nutk, *value),

        (Field::Omega, LowRe) if ctx.rans_model == RansModel::KkLOmega => Stanza::Neumann,
        (Field::Omega, _) => Stanza::WallFunction(WallFunction::Omega, *value),

        (Field::Epsilon, LowRe) => Stanza::Neumann,
        (Field::Epsilon, HighRe) => Stanza::WallFunction(WallFunction::Epsilon, *value),

        (Field::NuTilda, LowRe) => Stanza::Dirichlet(FieldValue::Scalar(ctx.nu / 2.0)),
        (Field::NuTilda, HighRe) => Stanza::Neumann,

        (Field::ReThetat | Field::GammaInt, _) => Stanza::Neumann,

        (Field::R, LowRe) => Stanza::Dirichlet(FieldValue::ZERO_SYMM_TENSOR),
        (Field::R, HighRe) => Stanza::WallFunction(WallFunction::KqR, *value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn ctx(wall_modelling: WallModelling) -> StanzaContext {
        StanzaContext {
            wall_modelling,
            rans_model: RansModel::KOmegaSst,
            nu: 1e-5,
            custom_inlet_profile: None,
        }
    }

    fn scalar() -> FieldValue {
        FieldValue::Scalar(0.25)
    }

    #[test]
    fn cyclic_and_empty_apply_to_every_field() {
        for field in Field::ALL {
            for wall in [WallModelling::LowRe, WallModelling::HighRe] {
                let ctx = ctx(wall);
                assert_eq!(resolve(BoundaryType::Cyclic, field, &scalar(), &ctx), Stanza::Cyclic);
                assert_eq!(resolve(BoundaryType::Empty, field, &scalar(), &ctx), Stanza::Empty);
            }
        }
    }

    #[test]
    fn nut_is_zero_calculated_away_from_walls() {
        let ctx = ctx(WallModelling::LowRe);
        for boundary in BoundaryType::all() {
            let stanza = resolve(boundary, Field::Nut, &scalar(), &ctx);
            match boundary {
                BoundaryType::Wall => assert_eq!(
                    stanza,
                    Stanza::WallFunction(WallFunction::NutLowRe, scalar())
                ),
                BoundaryType::Cyclic => assert_eq!(stanza, Stanza::Cyclic),
                BoundaryType::Empty => assert_eq!(stanza, Stanza::Empty),
                _ => assert_eq!(stanza, Stanza::ZeroCalculated),
            }
        }
    }

    #[test]
    fn pressure_column() {
        let ctx = ctx(WallModelling::LowRe);
        let p = FieldValue::ZERO_SCALAR;
        let expected = [
            (BoundaryType::Inlet, Stanza::Neumann),
            (BoundaryType::Outlet, Stanza::Dirichlet(FieldValue::ZERO_SCALAR)),
            (BoundaryType::BackflowOutlet, Stanza::Dirichlet(FieldValue::ZERO_SCALAR)),
            (BoundaryType::AdvectiveOutlet, Stanza::Advective),
            (BoundaryType::Symmetry, Stanza::Neumann),
            (BoundaryType::Wall, Stanza::Neumann),
            (
                BoundaryType::Freestream,
                Stanza::Freestream(FreestreamKind::Pressure, FieldValue::ZERO_SCALAR),
            ),
        ];
        for (boundary, stanza) in expected {
            assert_eq!(resolve(boundary, Field::P, &p, &ctx), stanza, "{boundary:?}");
        }
    }

    #[test]
    fn velocity_column() {
        let ctx = ctx(WallModelling::HighRe);
        let u = FieldValue::Vector(DVec3::new(6.0, 0.0, 0.0));
        assert_eq!(resolve(BoundaryType::Inlet, Field::U, &u, &ctx), Stanza::Dirichlet(u));
        assert_eq!(
            resolve(BoundaryType::Freestream, Field::U, &u, &ctx),
            Stanza::Freestream(FreestreamKind::Velocity, u)
        );
        assert_eq!(resolve(BoundaryType::Outlet, Field::U, &u, &ctx), Stanza::Neumann);
        assert_eq!(
            resolve(BoundaryType::BackflowOutlet, Field::U, &u, &ctx),
            Stanza::InletOutlet(u)
        );
        assert_eq!(
            resolve(BoundaryType::AdvectiveOutlet, Field::U, &u, &ctx),
            Stanza::Advective
        );
        assert_eq!(resolve(BoundaryType::Wall, Field::U, &u, &ctx), Stanza::NoSlip);
        assert_eq!(resolve(BoundaryType::Symmetry, Field::U, &u, &ctx), Stanza::Neumann);
    }

    #[test]
    fn custom_profile_replaces_inlet_velocity_only() {
        let mut ctx = ctx(WallModelling::LowRe);
        ctx.custom_inlet_profile = Some(CodedProfile::default());
        let u = FieldValue::Vector(DVec3::new(1.0, 0.0, 0.0));
        assert!(matches!(
            resolve(BoundaryType::Inlet, Field::U, &u, &ctx),
            Stanza::Coded { .. }
        ));
        assert_eq!(
            resolve(BoundaryType::Freestream, Field::U, &u, &ctx),
            Stanza::Freestream(FreestreamKind::Velocity, u)
        );
        assert_eq!(
            resolve(BoundaryType::Inlet, Field::K, &scalar(), &ctx),
            Stanza::Dirichlet(scalar())
        );
    }

    #[test]
    fn transition_fields_fall_back_to_zero_gradient() {
        let ctx = ctx(WallModelling::LowRe);
        for field in [Field::ReThetat, Field::GammaInt] {
            for boundary in [
                BoundaryType::Wall,
                BoundaryType::Outlet,
                BoundaryType::BackflowOutlet,
                BoundaryType::AdvectiveOutlet,
                BoundaryType::Symmetry,
            ] {
                assert_eq!(resolve(boundary, field, &scalar(), &ctx), Stanza::Neumann);
            }
            assert_eq!(
                resolve(BoundaryType::Inlet, field, &scalar(), &ctx),
                Stanza::Dirichlet(scalar())
            );
            assert_eq!(
                resolve(BoundaryType::Freestream, field, &scalar(), &ctx),
                Stanza::Freestream(FreestreamKind::Generic, scalar())
            );
        }
    }

    #[test]
    fn low_re_walls() {
        let ctx = ctx(WallModelling::LowRe);
        let v = scalar();
        let wall = |field| resolve(BoundaryType::Wall, field, &v, &ctx);
        assert_eq!(wall(Field::K), Stanza::WallFunction(WallFunction::KLowRe, v));
        assert_eq!(wall(Field::Kt), Stanza::Dirichlet(v));
        assert_eq!(wall(Field::Kl), Stanza::Dirichlet(v));
        assert_eq!(wall(Field::Omega), Stanza::WallFunction(WallFunction::Omega, v));
        assert_eq!(wall(Field::Epsilon), Stanza::Neumann);
        assert_eq!(wall(Field::NuTilda), Stanza::Dirichlet(FieldValue::Scalar(5e-6)));
        assert_eq!(wall(Field::R), Stanza::Dirichlet(FieldValue::ZERO_SYMM_TENSOR));
    }

    #[test]
    fn high_re_walls() {
        let ctx = ctx(WallModelling::HighRe);
        let v = scalar();
        let wall = |field| resolve(BoundaryType::Wall, field, &v, &ctx);
        for field in [Field::K, Field::Kt, Field::Kl, Field::R] {
            assert_eq!(wall(field), Stanza::WallFunction(WallFunction::KqR, v));
        }
        assert_eq!(wall(Field::Nut), Stanza::WallFunction(WallFunction::Nutk, v));
        assert_eq!(wall(Field::Omega), Stanza::WallFunction(WallFunction::Omega, v));
        assert_eq!(wall(Field::Epsilon), Stanza::WallFunction(WallFunction::Epsilon, v));
        assert_eq!(wall(Field::NuTilda), Stanza::Neumann);
    }

    #[test]
    fn kkl_omega_resolves_omega_wall_only_at_low_re() {
        let mut ctx = ctx(WallModelling::LowRe);
        ctx.rans_model = RansModel::KkLOmega;
        let v = scalar();
        assert_eq!(resolve(BoundaryType::Wall, Field::Omega, &v, &ctx), Stanza::Neumann);

        ctx.wall_modelling = WallModelling::HighRe;
        assert_eq!(
            resolve(BoundaryType::Wall, Field::Omega, &v, &ctx),
            Stanza::WallFunction(WallFunction::Omega, v)
        );
    }

    #[test]
    fn transported_scalars_on_outlets() {
        let ctx = ctx(WallModelling::LowRe);
        let v = scalar();
        for field in [Field::K, Field::Omega, Field::Epsilon, Field::NuTilda] {
            assert_eq!(resolve(BoundaryType::Outlet, field, &v, &ctx), Stanza::Neumann);
            assert_eq!(
                resolve(BoundaryType::BackflowOutlet, field, &v, &ctx),
                Stanza::InletOutlet(v)
            );
            assert_eq!(
                resolve(BoundaryType::AdvectiveOutlet, field, &v, &ctx),
                Stanza::Advective
            );
        }
    }
}
