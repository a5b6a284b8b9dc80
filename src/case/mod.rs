//! Case configuration and generation.
//!
//! A [`CaseConfig`] is loaded from JSON (or built from a preset), resolved
//! into a typed [`ResolvedCase`], and written through a file manager.

mod config;
mod generate;

pub use config::{BoundaryConfig, CaseConfig, CaseError, FileConfig, ReferenceConfig};
pub use generate::{generate_case, write_case, ResolvedCase};
