//! Resolves a case configuration and writes its field files.

use std::path::PathBuf;

use super::config::{CaseConfig, CaseError};
use crate::boundary::{BoundaryFieldWriter, BoundaryPatchMap};
use crate::export::{CaseDirectory, FileManager};
use crate::flow::{reconcile, FlowProperties, ReconciledFlow};
use crate::turbulence::{FreestreamQuantities, FreestreamQuantityCalculator, TurbulenceProperties};

/// Typed model of a case, ready to be written.
#[derive(Debug, Clone)]
pub struct ResolvedCase {
    /// Reconciled freestream state, including Re and Ma.
    pub state: ReconciledFlow,
    pub flow: FlowProperties,
    pub turbulence: TurbulenceProperties,
    pub patches: BoundaryPatchMap,
    /// OpenFOAM version used in file headers.
    pub version: String,
}

impl ResolvedCase {
    /// Evaluates the freestream turbulence quantities of this case.
    pub fn freestream_quantities(&self) -> Result<FreestreamQuantities, CaseError> {
        Ok(FreestreamQuantityCalculator::new(&self.flow, &self.turbulence).compute()?)
    }
}

impl CaseConfig {
    /// Reconciles the flow state and builds the typed case model.
    pub fn resolve(&self) -> Result<ResolvedCase, CaseError> {
        let reference_length = self.reference.reference_length;
        let state = reconcile(&self.flow, reference_length)?;

        let mut flow = FlowProperties::from_reconciled(
            &state,
            reference_length,
            self.turbulence.freestream_turbulent_intensity,
        );
        flow.initial_velocity_field_is_inlet_velocity =
            self.flow.initial_velocity_field_is_inlet_velocity;
        flow.custom_velocity_inlet_profile = self.boundary.custom_inlet_boundary_conditions;

        Ok(ResolvedCase {
            state,
            flow,
            turbulence: self.turbulence.properties(),
            patches: self.boundary.boundary_conditions.clone(),
            version: self.file.version.clone(),
        })
    }
}

/// Writes every field file of `case` through `files`.
///
/// Freestream quantities are validated before the first file is created.
pub fn generate_case<F: FileManager>(files: &mut F, case: &ResolvedCase) -> Result<(), CaseError> {
    log::info!(
        "Generating fields for {} patches (Re = {:.6e}, {} {:?})",
        case.patches.len(),
        case.state.reynolds_number,
        case.turbulence.rans_model.name(),
        case.turbulence.wall_modelling
    );
    let mut writer = BoundaryFieldWriter::new(files, &case.flow, &case.turbulence, &case.patches)?;
    writer.write_all_fields()?;
    Ok(())
}

/// Resolves `config` and writes the case below its run directory.
///
/// # Returns
/// The path of the case directory.
pub fn write_case(config: &CaseConfig) -> Result<PathBuf, CaseError> {
    let case = config.resolve()?;
    let mut directory = CaseDirectory::new(config.file.case_path(), case.version.clone());
    directory.create_directory_structure()?;
    generate_case(&mut directory, &case)?;
    log::info!("Case written to {}", directory.root().display());
    Ok(directory.root().to_path_buf())
}
