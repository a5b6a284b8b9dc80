//! Flow properties consumed by the freestream calculator and field writer.

use glam::DVec3;

use super::reconcile::ReconciledFlow;

/// Immutable freestream description of a case.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowProperties {
    /// Inlet (freestream) velocity vector.
    pub inlet_velocity: DVec3,
    /// Kinematic viscosity.
    pub nu: f64,
    /// Reference length of the geometry.
    pub reference_length: f64,
    /// Reynolds number on the reference length, supplied by the caller.
    pub reynolds_number: f64,
    /// Freestream turbulence intensity as a fraction (0.01 = 1 %).
    pub freestream_turbulent_intensity: f64,
    /// Use the inlet state as initial field; otherwise start from rest.
    pub initial_velocity_field_is_inlet_velocity: bool,
    /// Replace the fixed inlet velocity by a coded profile.
    pub custom_velocity_inlet_profile: bool,
}

impl FlowProperties {
    /// Creates flow properties, deriving Re from `|U| L / nu`.
    pub fn new(inlet_velocity: DVec3, nu: f64, reference_length: f64, intensity: f64) -> Self {
        Self {
            inlet_velocity,
            nu,
            reference_length,
            reynolds_number: inlet_velocity.length() * reference_length / nu,
            freestream_turbulent_intensity: intensity,
            initial_velocity_field_is_inlet_velocity: true,
            custom_velocity_inlet_profile: false,
        }
    }

    /// Creates flow properties from a reconciled freestream state.
    pub fn from_reconciled(state: &ReconciledFlow, reference_length: f64, intensity: f64) -> Self {
        Self {
            inlet_velocity: state.velocity,
            nu: state.nu,
            reference_length,
            reynolds_number: state.reynolds_number,
            freestream_turbulent_intensity: intensity,
            initial_velocity_field_is_inlet_velocity: true,
            custom_velocity_inlet_profile: false,
        }
    }

    pub fn velocity_magnitude(&self) -> f64 {
        self.inlet_velocity.length()
    }
}
