//! Writes the initial-time field files of a case.

use std::fmt::Write as _;

use thiserror::Error;

use super::field::Field;
use super::patch::{BoundaryPatchMap, BoundaryType};
use super::stanza::{CodedProfile, Stanza};
use super::table::{resolve, StanzaContext};
use super::value::FieldValue;
use crate::export::{ExportError, FileManager, FOOTER_SEPARATOR};
use crate::flow::FlowProperties;
use crate::turbulence::{
    FreestreamError, FreestreamQuantities, FreestreamQuantityCalculator, TurbulenceProperties,
};

/// Folder holding the initial conditions.
pub const INITIAL_TIME_FOLDER: &str = "0";

/// Errors that can occur while writing field files.
#[derive(Error, Debug)]
pub enum BoundaryError {
    #[error("Freestream turbulence error: {0}")]
    Freestream(#[from] FreestreamError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Emits one file per field with its internal value and a stanza per patch.
///
/// Freestream quantities are computed once at construction and reused for
/// every field and patch.
pub struct BoundaryFieldWriter<'a, F: FileManager> {
    files: &'a mut F,
    flow: &'a FlowProperties,
    patches: &'a BoundaryPatchMap,
    freestream: FreestreamQuantities,
    context: StanzaContext,
}

impl<'a, F: FileManager> BoundaryFieldWriter<'a, F> {
    /// Creates a writer, failing if the freestream quantities are not finite.
    ///
    /// # Arguments
    /// * `files` - Sink for the generated files
    /// * `flow` - Freestream flow description
    /// * `turbulence` - Turbulence settings
    /// * `patches` - Patches in emission order
    pub fn new(
        files: &'a mut F,
        flow: &'a FlowProperties,
        turbulence: &'a TurbulenceProperties,
        patches: &'a BoundaryPatchMap,
    ) -> Result<Self, FreestreamError> {
        let freestream = FreestreamQuantityCalculator::new(flow, turbulence).compute()?;
        let context = StanzaContext {
            wall_modelling: turbulence.wall_modelling,
            rans_model: turbulence.rans_model,
            nu: flow.nu,
            custom_inlet_profile: flow
                .custom_velocity_inlet_profile
                .then(CodedProfile::default),
        };

        Ok(Self {
            files,
            flow,
            patches,
            freestream,
            context,
        })
    }

    /// Replaces the coded inlet profile used when custom inlet profiles are enabled.
    pub fn with_inlet_profile(mut self, profile: CodedProfile) -> Self {
        if self.context.custom_inlet_profile.is_some() {
            self.context.custom_inlet_profile = Some(profile);
        }
        self
    }

    pub fn freestream(&self) -> &FreestreamQuantities {
        &self.freestream
    }

    /// Value prescribed at inlets and in the far field.
    pub fn freestream_value(&self, field: Field) -> FieldValue {
        let q = &self.freestream;
        match field {
            Field::U => FieldValue::Vector(self.flow.inlet_velocity),
            Field::P | Field::Nut | Field::Kl => FieldValue::ZERO_SCALAR,
            Field::K | Field::Kt => FieldValue::Scalar(q.k),
            Field::Omega => FieldValue::Scalar(q.omega),
            Field::Epsilon => FieldValue::Scalar(q.epsilon),
            Field::NuTilda => FieldValue::Scalar(q.nu_tilda),
            Field::ReThetat => FieldValue::Scalar(q.re_theta_t),
            Field::GammaInt => FieldValue::Scalar(1.0),
            Field::R => FieldValue::isotropic_stress(q.k),
        }
    }

    /// Value of `internalField`.
    ///
    /// Starting from rest zeroes U, k, kt, epsilon, nuTilda and R; omega and
    /// ReThetat keep their freestream values.
    pub fn internal_value(&self, field: Field) -> FieldValue {
        if self.flow.initial_velocity_field_is_inlet_velocity {
            return self.freestream_value(field);
        }
        match field {
            Field::U => FieldValue::ZERO_VECTOR,
            Field::K | Field::Kt | Field::Epsilon | Field::NuTilda => FieldValue::ZERO_SCALAR,
            Field::R => FieldValue::ZERO_SYMM_TENSOR,
            _ => self.freestream_value(field),
        }
    }

    /// Stanza for `field` on a patch of type `boundary`.
    pub fn stanza(&self, boundary: BoundaryType, field: Field) -> Stanza {
        resolve(boundary, field, &self.freestream_value(field), &self.context)
    }

    /// Renders the body of a field file, everything after the header.
    pub fn render_field(&self, field: Field) -> String {
        let mut body = String::new();
        let _ = write!(body, "\ndimensions      {};\n\n", field.dimensions());
        let _ = write!(body, "internalField   {};\n\n", self.internal_value(field));
        body.push_str("boundaryField\n{\n");
        for (name, boundary) in self.patches.iter() {
            let stanza = self.stanza(boundary, field);
            log::debug!("{}/{}: {}", field.name(), name, stanza.type_name());
            let _ = write!(body, "    {}\n    {{\n{}    }}\n", name, stanza);
        }
        body.push_str("}\n\n\n");
        body.push_str(FOOTER_SEPARATOR);
        body.push('\n');
        body
    }

    /// Writes `0/<field>`.
    pub fn write_field(&mut self, field: Field) -> Result<(), BoundaryError> {
        let name = field.name();
        let body = self.render_field(field);

        let mut handle = self.files.create_file(INITIAL_TIME_FOLDER, name)?;
        self.files
            .write_header(&mut handle, field.class().name(), INITIAL_TIME_FOLDER, name)?;
        self.files.write(&mut handle, &body)?;
        self.files.close_file(handle)?;
        Ok(())
    }

    /// Writes every field in [`Field::ALL`] order, stopping at the first error.
    pub fn write_all_fields(&mut self) -> Result<(), BoundaryError> {
        self.check_patches();
        for field in Field::ALL {
            self.write_field(field)?;
        }
        log::info!(
            "Wrote {} field files for {} patches",
            Field::ALL.len(),
            self.patches.len()
        );
        Ok(())
    }

    fn check_patches(&self) {
        if self.patches.is_empty() {
            log::warn!("Boundary patch map is empty; field files will have no patch entries");
            return;
        }
        if !self.patches.contains_type(BoundaryType::Wall) {
            log::warn!(
                "No WALL patch defined; {:?} wall treatment is not used",
                self.context.wall_modelling
            );
        }
        if let Some(profile) = &self.context.custom_inlet_profile {
            if !self.patches.contains_type(BoundaryType::Inlet) {
                log::warn!("Custom inlet velocity profile enabled but no INLET patch is defined");
            }
            if self.patches.get(&profile.name).is_some() {
                log::warn!(
                    "Coded profile name '{}' is also used as a patch name",
                    profile.name
                );
            }
        }
    }
}
