//! Turbulence settings and freestream turbulence quantities.

mod config;
mod freestream;

pub use config::{InletTurbulence, RansModel, TurbulenceConfig, TurbulenceProperties, WallModelling};
pub use freestream::{
    viscosity_ratio_from_intensity, FreestreamError, FreestreamQuantities,
    FreestreamQuantityCalculator, C_MU,
};
