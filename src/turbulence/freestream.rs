//! Freestream turbulence quantities.
//!
//! Correlations follow the usual free-stream recommendations for two-equation
//! and one-equation models: k from the intensity, omega/epsilon from a
//! length scale or a viscosity ratio, and the Langtry-Menter transition onset
//! momentum-thickness Reynolds number.

use thiserror::Error;

use super::config::{InletTurbulence, TurbulenceProperties};
use crate::flow::FlowProperties;

/// Turbulence model constant.
pub const C_MU: f64 = 0.09;

/// Errors raised when the flow state cannot produce finite turbulence values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FreestreamError {
    #[error("{quantity} must be positive to derive freestream turbulence, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },
    #[error("Freestream {quantity} evaluated to a non-finite value")]
    NonFinite { quantity: &'static str },
}

/// Scalars prescribed far from walls, computed once per case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreestreamQuantities {
    /// Turbulent kinetic energy.
    pub k: f64,
    /// Specific dissipation rate.
    pub omega: f64,
    /// Dissipation rate.
    pub epsilon: f64,
    /// Spalart-Allmaras modified viscosity.
    pub nu_tilda: f64,
    /// Transition onset momentum-thickness Reynolds number.
    pub re_theta_t: f64,
}

/// Piecewise-linear fit of the turbulent-to-laminar viscosity ratio against
/// turbulence intensity (fraction, not percent).
pub fn viscosity_ratio_from_intensity(intensity: f64) -> f64 {
    if intensity < 0.01 {
        1.0
    } else if intensity < 0.05 {
        1.0 + 9.0 * (intensity - 0.01) / 0.04
    } else if intensity < 0.1 {
        10.0 + 90.0 * (intensity - 0.05) / 0.05
    } else {
        100.0
    }
}

fn require_positive(quantity: &'static str, value: f64) -> Result<f64, FreestreamError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FreestreamError::NonPositive { quantity, value })
    }
}

fn require_finite(quantity: &'static str, value: f64) -> Result<f64, FreestreamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FreestreamError::NonFinite { quantity })
    }
}

/// Derives freestream turbulence values from flow and turbulence settings.
#[derive(Debug, Clone, Copy)]
pub struct FreestreamQuantityCalculator<'a> {
    flow: &'a FlowProperties,
    turbulence: &'a TurbulenceProperties,
}

impl<'a> FreestreamQuantityCalculator<'a> {
    pub fn new(flow: &'a FlowProperties, turbulence: &'a TurbulenceProperties) -> Self {
        Self { flow, turbulence }
    }

    fn intensity(&self) -> f64 {
        self.flow.freestream_turbulent_intensity
    }

    /// Turbulent length scale for internal flows, `0.07 L`.
    pub fn turbulent_length_scale_internal(&self) -> Result<f64, FreestreamError> {
        let l = require_positive("reference_length", self.flow.reference_length)?;
        Ok(0.07 * l)
    }

    /// Turbulent length scale for external flows, 40 % of the turbulent
    /// boundary-layer thickness `0.37 L / Re^0.2`.
    pub fn turbulent_length_scale_external(&self) -> Result<f64, FreestreamError> {
        let l = require_positive("reference_length", self.flow.reference_length)?;
        let re = require_positive("reynolds_number", self.flow.reynolds_number)?;
        let delta = 0.37 * l / re.powf(0.2);
        Ok(0.4 * delta)
    }

    pub fn turbulent_to_laminar_viscosity_ratio(&self) -> f64 {
        viscosity_ratio_from_intensity(self.intensity())
    }

    /// Length scale for the length-scale based inlet modes, `None` for ratio modes.
    fn length_scale(&self) -> Result<Option<f64>, FreestreamError> {
        match self.turbulence.inlet {
            InletTurbulence::Internal => self.turbulent_length_scale_internal().map(Some),
            InletTurbulence::External => self.turbulent_length_scale_external().map(Some),
            InletTurbulence::Ratio | InletTurbulence::RatioAuto => Ok(None),
        }
    }

    /// Viscosity ratio for the ratio based inlet modes.
    fn viscosity_ratio(&self) -> Result<f64, FreestreamError> {
        match self.turbulence.inlet {
            InletTurbulence::Ratio => require_positive(
                "turbulent_to_laminar_ratio",
                self.turbulence.turbulent_to_laminar_ratio,
            ),
            _ => Ok(self.turbulent_to_laminar_viscosity_ratio()),
        }
    }

    pub fn freestream_k(&self) -> f64 {
        1.5 * (self.flow.velocity_magnitude() * self.intensity()).powi(2)
    }

    pub fn freestream_omega(&self) -> Result<f64, FreestreamError> {
        let k = self.freestream_k();
        let omega = match self.length_scale()? {
            Some(tls) => C_MU.powf(-0.25) * k.sqrt() / tls,
            None => {
                let nu = require_positive("nu", self.flow.nu)?;
                (k / nu) / self.viscosity_ratio()?
            }
        };
        require_finite("omega", omega)
    }

    pub fn freestream_epsilon(&self) -> Result<f64, FreestreamError> {
        let k = self.freestream_k();
        let epsilon = match self.length_scale()? {
            Some(tls) => C_MU.powf(0.75) * k.powf(1.5) / tls,
            None => {
                let nu = require_positive("nu", self.flow.nu)?;
                (C_MU * k.powi(2) / nu) / self.viscosity_ratio()?
            }
        };
        require_finite("epsilon", epsilon)
    }

    pub fn freestream_nu_tilda(&self) -> Result<f64, FreestreamError> {
        let nu_tilda = match self.length_scale()? {
            Some(tls) => 1.5 * self.flow.velocity_magnitude() * self.intensity() * tls,
            None => 5.0 * self.flow.nu,
        };
        require_finite("nuTilda", nu_tilda)
    }

    /// Transition onset Reynolds number, correlated in percent intensity.
    ///
    /// Intensities up to and including 1.3 % use the low-turbulence branch.
    pub fn freestream_re_theta_t(&self) -> Result<f64, FreestreamError> {
        let intensity = self.intensity();
        let tu = intensity * 100.0;
        let re_theta_t = if intensity <= 0.013 {
            1173.51 - 589.428 * tu + 0.2196 / tu.powi(2)
        } else {
            331.5 / (tu - 0.5658).powf(0.671)
        };
        require_finite("ReThetat", re_theta_t)
    }

    /// Evaluates all freestream quantities, failing on the first invalid one.
    pub fn compute(&self) -> Result<FreestreamQuantities, FreestreamError> {
        let intensity = self.intensity();
        if !(0.0..=1.0).contains(&intensity) {
            log::warn!("Freestream turbulence intensity {intensity} is outside [0, 1]");
        }

        let quantities = FreestreamQuantities {
            k: require_finite("k", self.freestream_k())?,
            omega: self.freestream_omega()?,
            epsilon: self.freestream_epsilon()?,
            nu_tilda: self.freestream_nu_tilda()?,
            re_theta_t: self.freestream_re_theta_t()?,
        };

        log::info!(
            "Freestream turbulence ({:?}): k = {}, omega = {}, epsilon = {}, nuTilda = {}, ReThetat = {}",
            self.turbulence.inlet,
            quantities.k,
            quantities.omega,
            quantities.epsilon,
            quantities.nu_tilda,
            quantities.re_theta_t
        );

        Ok(quantities)
    }
}
