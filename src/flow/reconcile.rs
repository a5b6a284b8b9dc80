//! Reynolds/Mach reconciliation and velocity-vector construction.

use glam::DVec3;
use thiserror::Error;

use super::config::{FlowConfig, FlowDirection, FlowType, SpecificationMode};

/// Ratio of specific heats for air.
pub const GAMMA_AIR: f64 = 1.4;

/// Specific gas constant for air (J/(kg K)).
pub const R_AIR: f64 = 287.0;

/// Temperature assumed when a compressible case is specified by Re and Ma.
const NON_DIMENSIONAL_TEMPERATURE: f64 = 298.0;
const NON_DIMENSIONAL_DENSITY: f64 = 1.225;
const NON_DIMENSIONAL_PRESSURE: f64 = 1e5;

/// Errors raised while reconciling the flow state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },
    #[error("Tangential and normal flow directions must differ (both are {0:?})")]
    SameAxis(super::Axis),
}

/// Consistent dimensional and similarity parameters of the freestream.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledFlow {
    pub velocity_magnitude: f64,
    pub velocity: DVec3,
    pub nu: f64,
    pub rho: f64,
    /// Dynamic viscosity, `nu * rho`.
    pub mu: f64,
    pub p: f64,
    pub t: f64,
    pub reynolds_number: f64,
    /// Only set for compressible flow.
    pub mach_number: Option<f64>,
    /// Only set for compressible flow.
    pub speed_of_sound: Option<f64>,
}

/// Speed of sound in air at temperature `t` (K).
pub fn speed_of_sound(t: f64) -> f64 {
    (GAMMA_AIR * R_AIR * t).sqrt()
}

fn require_positive(quantity: &'static str, value: f64) -> Result<f64, FlowError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(FlowError::NonPositive { quantity, value })
    }
}

/// Builds the inlet velocity vector from its magnitude and an axis-aligned direction.
pub fn velocity_vector(magnitude: f64, direction: &FlowDirection) -> Result<DVec3, FlowError> {
    if direction.tangential == direction.normal {
        return Err(FlowError::SameAxis(direction.tangential));
    }

    let aoa = direction.angle_of_attack.to_radians();
    let mut components = [0.0; 3];
    components[direction.tangential.index()] = aoa.cos() * magnitude;
    components[direction.normal.index()] = aoa.sin() * magnitude;

    Ok(DVec3::from_array(components))
}

/// Derives the full freestream state from the `flow` section.
///
/// In dimensional mode Re (and Ma) follow from the given state. In
/// non-dimensional mode a dimensional state is chosen that reproduces the
/// given Re (and Ma) on the reference length.
pub fn reconcile(flow: &FlowConfig, reference_length: f64) -> Result<ReconciledFlow, FlowError> {
    let reference_length = require_positive("reference_length", reference_length)?;

    let mut state = match flow.input_parameters_specification_mode {
        SpecificationMode::Dimensional => {
            let dim = &flow.dimensional_properties;
            let nu = require_positive("nu", dim.nu)?;
            let mut state = ReconciledFlow {
                velocity_magnitude: dim.velocity_magnitude,
                velocity: DVec3::ZERO,
                nu,
                rho: dim.rho,
                mu: 0.0,
                p: dim.p,
                t: dim.t,
                reynolds_number: dim.velocity_magnitude * reference_length / nu,
                mach_number: None,
                speed_of_sound: None,
            };
            if flow.flow_type == FlowType::Compressible {
                let c = speed_of_sound(require_positive("T", dim.t)?);
                state.speed_of_sound = Some(c);
                state.mach_number = Some(dim.velocity_magnitude / c);
            }
            state
        }
        SpecificationMode::NonDimensional => {
            let given = &flow.non_dimensional_properties;
            let re = require_positive("Re", given.reynolds_number)?;
            match flow.flow_type {
                FlowType::Incompressible => {
                    let scale = 10_f64.powf(re.log10().floor());
                    ReconciledFlow {
                        velocity_magnitude: re / scale,
                        velocity: DVec3::ZERO,
                        nu: 1.0 / scale,
                        rho: 1.0,
                        mu: 0.0,
                        p: 0.0,
                        t: flow.dimensional_properties.t,
                        reynolds_number: re,
                        mach_number: None,
                        speed_of_sound: None,
                    }
                }
                FlowType::Compressible => {
                    let ma = require_positive("Ma", given.mach_number)?;
                    let c = speed_of_sound(NON_DIMENSIONAL_TEMPERATURE);
                    let velocity_magnitude = ma * c;
                    ReconciledFlow {
                        velocity_magnitude,
                        velocity: DVec3::ZERO,
                        nu: velocity_magnitude * reference_length / re,
                        rho: NON_DIMENSIONAL_DENSITY,
                        mu: 0.0,
                        p: NON_DIMENSIONAL_PRESSURE,
                        t: NON_DIMENSIONAL_TEMPERATURE,
                        reynolds_number: re,
                        mach_number: Some(ma),
                        speed_of_sound: Some(c),
                    }
                }
            }
        }
    };

    state.mu = state.nu * state.rho;
    state.velocity = velocity_vector(state.velocity_magnitude, &flow.axis_aligned_flow_direction)?;

    log::debug!(
        "Reconciled flow: |U| = {}, nu = {}, Re = {}",
        state.velocity_magnitude,
        state.nu,
        state.reynolds_number
    );

    Ok(state)
}
