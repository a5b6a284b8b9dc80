//! Flow configuration sections.

use serde::{Deserialize, Serialize};

/// Cartesian axis used to align the freestream with the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of this axis in a 3-vector.
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Whether density variations are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowType {
    Incompressible,
    Compressible,
}

/// How the flow state is specified in the case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecificationMode {
    /// Velocity, viscosity, density etc. are given; Re (and Ma) are derived.
    Dimensional,
    /// Re (and Ma) are given; a consistent set of dimensional values is derived.
    NonDimensional,
}

/// Similarity parameters used in `NON_DIMENSIONAL` mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonDimensionalProperties {
    /// Reynolds number based on the reference length.
    pub reynolds_number: f64,
    /// Mach number (compressible flow only).
    pub mach_number: f64,
}

impl Default for NonDimensionalProperties {
    fn default() -> Self {
        Self {
            reynolds_number: 6.0e6,
            mach_number: 0.15,
        }
    }
}

/// Dimensional flow state used in `DIMENSIONAL` mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionalProperties {
    /// Freestream velocity magnitude (m/s).
    pub velocity_magnitude: f64,
    /// Density (kg/m^3).
    pub rho: f64,
    /// Kinematic viscosity (m^2/s).
    pub nu: f64,
    /// Freestream pressure (Pa, kinematic for incompressible solvers).
    pub p: f64,
    /// Freestream temperature (K).
    #[serde(rename = "T")]
    pub t: f64,
}

impl Default for DimensionalProperties {
    fn default() -> Self {
        Self {
            velocity_magnitude: 6.0,
            rho: 1.0,
            nu: 1e-6,
            p: 0.0,
            t: 300.0,
        }
    }
}

/// Freestream direction relative to the mesh axes.
///
/// The velocity vector has `cos(aoa) * |U|` along `tangential` and
/// `sin(aoa) * |U|` along `normal`; the remaining component is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDirection {
    pub tangential: Axis,
    pub normal: Axis,
    /// Angle of attack in degrees.
    pub angle_of_attack: f64,
}

impl Default for FlowDirection {
    fn default() -> Self {
        Self {
            tangential: Axis::X,
            normal: Axis::Y,
            angle_of_attack: 0.0,
        }
    }
}

/// The `flow` section of a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub flow_type: FlowType,
    pub input_parameters_specification_mode: SpecificationMode,
    pub non_dimensional_properties: NonDimensionalProperties,
    pub dimensional_properties: DimensionalProperties,
    pub axis_aligned_flow_direction: FlowDirection,
    /// Initialise the domain with the inlet state instead of a fluid at rest.
    pub initial_velocity_field_is_inlet_velocity: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            flow_type: FlowType::Incompressible,
            input_parameters_specification_mode: SpecificationMode::Dimensional,
            non_dimensional_properties: NonDimensionalProperties::default(),
            dimensional_properties: DimensionalProperties::default(),
            axis_aligned_flow_direction: FlowDirection::default(),
            initial_velocity_field_is_inlet_velocity: true,
        }
    }
}
