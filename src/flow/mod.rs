//! Freestream flow description.
//!
//! Holds the serialisable `flow` section, reconciles dimensional and
//! similarity parameters, and builds the [`FlowProperties`] consumed by the
//! turbulence and boundary-condition modules.

mod config;
mod properties;
mod reconcile;

pub use config::{
    Axis, DimensionalProperties, FlowConfig, FlowDirection, FlowType, NonDimensionalProperties,
    SpecificationMode,
};
pub use properties::FlowProperties;
pub use reconcile::{reconcile, speed_of_sound, velocity_vector, FlowError, ReconciledFlow};
