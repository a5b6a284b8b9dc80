//! Case configuration as read from and written to JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boundary::{BoundaryError, BoundaryPatchMap, BoundaryType};
use crate::export::ExportError;
use crate::flow::{FlowConfig, FlowError, FlowType, SpecificationMode};
use crate::turbulence::{FreestreamError, InletTurbulence, TurbulenceConfig};

/// Errors that can occur while loading, resolving or writing a case.
#[derive(Error, Debug)]
pub enum CaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid case file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid flow settings: {0}")]
    Flow(#[from] FlowError),
    #[error("Invalid turbulence settings: {0}")]
    Freestream(#[from] FreestreamError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl From<BoundaryError> for CaseError {
    fn from(err: BoundaryError) -> Self {
        match err {
            BoundaryError::Freestream(err) => CaseError::Freestream(err),
            BoundaryError::Export(err) => CaseError::Export(err),
        }
    }
}

/// Where the case is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Name of the case folder.
    pub case_name: String,
    /// Folder the case folder is created in.
    pub run_directory: PathBuf,
    /// OpenFOAM version shown in file headers; does not change the output otherwise.
    pub version: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            case_name: "naca_0012".to_string(),
            run_directory: PathBuf::from("."),
            version: "v2006".to_string(),
        }
    }
}

impl FileConfig {
    /// `<run_directory>/<case_name>`.
    pub fn case_path(&self) -> PathBuf {
        self.run_directory.join(&self.case_name)
    }
}

/// Patch names (as defined by the mesh) and their boundary types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    /// Patches in the order they are written.
    pub boundary_conditions: BoundaryPatchMap,
    /// Replace the fixed inlet velocity by a coded profile.
    #[serde(default)]
    pub custom_inlet_boundary_conditions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Length used for Re and the turbulent length scales.
    pub reference_length: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            reference_length: 1.0,
        }
    }
}

/// Complete description of a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConfig {
    pub file: FileConfig,
    pub boundary: BoundaryConfig,
    pub flow: FlowConfig,
    pub turbulence: TurbulenceConfig,
    pub reference: ReferenceConfig,
}

impl Default for CaseConfig {
    /// Two-dimensional NACA 0012 airfoil in a freestream at y+ of order one.
    fn default() -> Self {
        let patches = BoundaryPatchMap::from_pairs([
            ("inlet", BoundaryType::Freestream),
            ("outlet", BoundaryType::Freestream),
            ("upper", BoundaryType::Wall),
            ("lower", BoundaryType::Wall),
            ("top_symmetry", BoundaryType::Freestream),
            ("bottom_symmetry", BoundaryType::Freestream),
            ("BaseAndTop", BoundaryType::Empty),
        ])
        .unwrap_or_default();

        Self {
            file: FileConfig::default(),
            boundary: BoundaryConfig {
                boundary_conditions: patches,
                custom_inlet_boundary_conditions: false,
            },
            flow: FlowConfig::default(),
            turbulence: TurbulenceConfig::default(),
            reference: ReferenceConfig::default(),
        }
    }
}

impl CaseConfig {
    /// Creates the NACA 0012 airfoil case.
    pub fn airfoil() -> Self {
        Self::default()
    }

    /// Creates a plane channel with walls on both sides.
    ///
    /// The inlet turbulence length scale is bounded by the channel height.
    pub fn channel() -> Self {
        let patches = BoundaryPatchMap::from_pairs([
            ("inlet", BoundaryType::Inlet),
            ("outlet", BoundaryType::Outlet),
            ("lowerWall", BoundaryType::Wall),
            ("upperWall", BoundaryType::Wall),
            ("frontAndBack", BoundaryType::Empty),
        ])
        .unwrap_or_default();

        let mut flow = FlowConfig::default();
        flow.dimensional_properties.velocity_magnitude = 1.0;
        flow.dimensional_properties.nu = 1e-5;

        Self {
            file: FileConfig {
                case_name: "channel".to_string(),
                ..Default::default()
            },
            boundary: BoundaryConfig {
                boundary_conditions: patches,
                custom_inlet_boundary_conditions: false,
            },
            flow,
            turbulence: TurbulenceConfig {
                turbulent_quantities_at_inlet: InletTurbulence::Internal,
                freestream_turbulent_intensity: 0.05,
                ..Default::default()
            },
            reference: ReferenceConfig::default(),
        }
    }

    /// Creates a fully periodic Taylor-Green vortex box specified by Re = 1600.
    pub fn taylor_green_vortex() -> Self {
        let patches = BoundaryPatchMap::from_pairs(
            ["top", "bottom", "left", "right", "front", "back"]
                .into_iter()
                .map(|name| (name, BoundaryType::Cyclic)),
        )
        .unwrap_or_default();

        let mut flow = FlowConfig {
            flow_type: FlowType::Incompressible,
            input_parameters_specification_mode: SpecificationMode::NonDimensional,
            ..Default::default()
        };
        flow.non_dimensional_properties.reynolds_number = 1600.0;

        Self {
            file: FileConfig {
                case_name: "taylor_green_vortex".to_string(),
                ..Default::default()
            },
            boundary: BoundaryConfig {
                boundary_conditions: patches,
                custom_inlet_boundary_conditions: false,
            },
            flow,
            turbulence: TurbulenceConfig {
                turbulent_quantities_at_inlet: InletTurbulence::RatioAuto,
                freestream_turbulent_intensity: 0.01,
                ..Default::default()
            },
            reference: ReferenceConfig::default(),
        }
    }

    /// Reads a case from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CaseError> {
        let string = fs::read_to_string(path)?;
        let config = serde_json::from_str(&string)?;
        log::debug!("Loaded case configuration from {}", path.display());
        Ok(config)
    }

    /// Writes the case as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CaseError> {
        let string = serde_json::to_string_pretty(self)?;
        fs::write(path, string)?;
        log::debug!("Saved case configuration to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn presets_have_expected_patches() {
        let airfoil = CaseConfig::default();
        assert_eq!(airfoil.boundary.boundary_conditions.len(), 7);
        assert_eq!(
            airfoil.boundary.boundary_conditions.names_of(BoundaryType::Wall),
            vec!["upper", "lower"]
        );

        let channel = CaseConfig::channel();
        assert!(channel.boundary.boundary_conditions.contains_type(BoundaryType::Inlet));
        assert_eq!(
            channel.turbulence.turbulent_quantities_at_inlet,
            InletTurbulence::Internal
        );

        let tgv = CaseConfig::taylor_green_vortex();
        assert_eq!(tgv.boundary.boundary_conditions.len(), 6);
        assert!(tgv
            .boundary
            .boundary_conditions
            .iter()
            .all(|(_, t)| t == BoundaryType::Cyclic));
    }

    #[test]
    fn json_uses_case_file_spelling() {
        let json = serde_json::to_string_pretty(&CaseConfig::default()).unwrap();
        assert!(json.contains("\"inlet\": \"FREESTREAM\""));
        assert!(json.contains("\"BaseAndTop\": \"EMPTY\""));
        assert!(json.contains("\"input_parameters_specification_mode\": \"DIMENSIONAL\""));
        assert!(json.contains("\"RANS_model\": \"kOmegaSST\""));
        assert!(json.contains("\"T\": 300.0"));
        assert!(json.find("\"upper\"").unwrap() < json.find("\"lower\"").unwrap());
    }

    #[test]
    fn save_then_load_keeps_configuration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("case.json");
        let config = CaseConfig::channel();
        config.save(&path).unwrap();

        let loaded = CaseConfig::load(&path).unwrap();
        assert_eq!(loaded.file, config.file);
        assert_eq!(loaded.boundary, config.boundary);
        assert_eq!(loaded.turbulence.rans_model, config.turbulence.rans_model);
        assert!(
            (loaded.turbulence.freestream_turbulent_intensity
                - config.turbulence.freestream_turbulent_intensity)
                .abs()
                < 1e-15
        );
    }

    #[test]
    fn load_rejects_duplicate_patches() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("case.json");
        let json = serde_json::to_string(&CaseConfig::default())
            .unwrap()
            .replace("\"outlet\":\"FREESTREAM\"", "\"inlet\":\"OUTLET\"");
        fs::write(&path, json).unwrap();

        match CaseConfig::load(&path) {
            Err(CaseError::Json(err)) => {
                assert!(err.to_string().contains("'inlet' is defined more than once"))
            }
            other => panic!("expected JSON error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = CaseConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(CaseError::Io(_))));
    }

    #[test]
    fn case_path_joins_run_directory() {
        let file = FileConfig {
            case_name: "wing".to_string(),
            run_directory: PathBuf::from("runs"),
            version: "v2306".to_string(),
        };
        assert_eq!(file.case_path(), Path::new("runs").join("wing"));
    }
}
