//! Export module for writing case files.
//!
//! Files are produced through the [`FileManager`] trait, either into a
//! case directory on disk or into memory for dry runs.

mod foam;
mod memory;

pub use foam::{
    foam_header, CaseDirectory, CaseFile, ExportError, FileManager, CASE_FOLDERS,
    FOOTER_SEPARATOR, HEADER_SEPARATOR,
};
pub use memory::{MemoryFile, MemoryFiles};
