//! Configuration for turbulence modelling and inlet turbulence.

use serde::{Deserialize, Serialize};

/// How the inlet turbulence scales are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InletTurbulence {
    /// Length scale limited by the channel height: `0.07 L`.
    Internal,
    /// Length scale limited by the boundary layer: `0.4 delta`, with
    /// `delta = 0.37 L / Re^0.2`.
    External,
    /// Prescribed turbulent-to-laminar viscosity ratio.
    Ratio,
    /// Viscosity ratio estimated from the freestream intensity.
    RatioAuto,
}

/// Near-wall resolution of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WallModelling {
    /// First cell at y+ <= 1, near-wall region resolved.
    LowRe,
    /// First cell at y+ > 30, wall functions bridge the viscous sublayer.
    HighRe,
}

/// RANS closure selected for the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RansModel {
    #[serde(rename = "kOmegaSST")]
    KOmegaSst,
    #[serde(rename = "kOmega")]
    KOmega,
    #[serde(rename = "kEpsilon")]
    KEpsilon,
    #[serde(rename = "realizableKE")]
    RealizableKe,
    #[serde(rename = "RNGkEpsilon")]
    RngKEpsilon,
    #[serde(rename = "LaunderSharmaKE")]
    LaunderSharmaKe,
    #[serde(rename = "SpalartAllmaras")]
    SpalartAllmaras,
    #[serde(rename = "kkLOmega")]
    KkLOmega,
    #[serde(rename = "kOmegaSSTLM")]
    KOmegaSstLm,
    #[serde(rename = "LienCubicKE")]
    LienCubicKe,
    #[serde(rename = "ShihQuadraticKE")]
    ShihQuadraticKe,
    #[serde(rename = "LRR")]
    Lrr,
    #[serde(rename = "SSG")]
    Ssg,
}

impl RansModel {
    /// OpenFOAM model name.
    pub fn name(&self) -> &'static str {
        match self {
            RansModel::KOmegaSst => "kOmegaSST",
            RansModel::KOmega => "kOmega",
            RansModel::KEpsilon => "kEpsilon",
            RansModel::RealizableKe => "realizableKE",
            RansModel::RngKEpsilon => "RNGkEpsilon",
            RansModel::LaunderSharmaKe => "LaunderSharmaKE",
            RansModel::SpalartAllmaras => "SpalartAllmaras",
            RansModel::KkLOmega => "kkLOmega",
            RansModel::KOmegaSstLm => "kOmegaSSTLM",
            RansModel::LienCubicKe => "LienCubicKE",
            RansModel::ShihQuadraticKe => "ShihQuadraticKE",
            RansModel::Lrr => "LRR",
            RansModel::Ssg => "SSG",
        }
    }
}

/// Turbulence settings that drive freestream and wall boundary values.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbulenceProperties {
    pub inlet: InletTurbulence,
    /// Turbulent-to-laminar viscosity ratio, only read in [`InletTurbulence::Ratio`] mode.
    pub turbulent_to_laminar_ratio: f64,
    pub wall_modelling: WallModelling,
    pub rans_model: RansModel,
}

impl Default for TurbulenceProperties {
    fn default() -> Self {
        Self {
            inlet: InletTurbulence::External,
            turbulent_to_laminar_ratio: 10.0,
            wall_modelling: WallModelling::LowRe,
            rans_model: RansModel::KOmegaSst,
        }
    }
}

/// The `turbulence` section of a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbulenceConfig {
    pub wall_modelling: WallModelling,
    pub turbulent_quantities_at_inlet: InletTurbulence,
    pub turbulent_to_laminar_ratio: f64,
    /// Freestream turbulence intensity (fraction, 0-1).
    pub freestream_turbulent_intensity: f64,
    #[serde(rename = "RANS_model")]
    pub rans_model: RansModel,
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        let properties = TurbulenceProperties::default();
        Self {
            wall_modelling: properties.wall_modelling,
            turbulent_quantities_at_inlet: properties.inlet,
            turbulent_to_laminar_ratio: properties.turbulent_to_laminar_ratio,
            freestream_turbulent_intensity: 0.00052,
            rans_model: properties.rans_model,
        }
    }
}

impl TurbulenceConfig {
    /// Extracts the settings used by the calculator and field writer.
    pub fn properties(&self) -> TurbulenceProperties {
        TurbulenceProperties {
            inlet: self.turbulent_quantities_at_inlet,
            turbulent_to_laminar_ratio: self.turbulent_to_laminar_ratio,
            wall_modelling: self.wall_modelling,
            rans_model: self.rans_model,
        }
    }
}
