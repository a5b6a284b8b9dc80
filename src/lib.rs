//! OpenFOAM case-file generator.
//!
//! This crate derives freestream turbulence quantities from a small set of
//! flow and turbulence parameters, and writes the initial-time field files
//! of a case with a boundary-condition stanza per patch and field.

pub mod flow;
pub mod turbulence;
pub mod boundary;
pub mod export;
pub mod case;

pub use flow::{FlowConfig, FlowProperties};
pub use turbulence::{FreestreamQuantities, FreestreamQuantityCalculator, TurbulenceProperties};
pub use boundary::{BoundaryFieldWriter, BoundaryPatchMap, BoundaryType, Field};
pub use export::{CaseDirectory, FileManager, MemoryFiles};
pub use case::{generate_case, write_case, CaseConfig, CaseError, ResolvedCase};
