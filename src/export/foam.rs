//! OpenFOAM dictionary files on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Folders every case directory starts with.
pub const CASE_FOLDERS: [&str; 3] = ["0", "constant", "system"];

/// Separator written after the `FoamFile` dictionary.
pub const HEADER_SEPARATOR: &str =
    "// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //";

/// Separator closing every generated dictionary.
pub const FOOTER_SEPARATOR: &str =
    "// ************************************************************************* //";

/// Errors that can occur while writing case files.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Sink for the text files of a case.
///
/// Files are created, written and closed one at a time; a handle is only
/// valid for the manager that created it.
pub trait FileManager {
    type Handle;

    /// Creates (or truncates) `<folder>/<name>`.
    fn create_file(&mut self, folder: &str, name: &str) -> Result<Self::Handle, ExportError>;

    /// Writes the banner and `FoamFile` dictionary for an object of `class`.
    fn write_header(
        &mut self,
        handle: &mut Self::Handle,
        class: &str,
        folder: &str,
        name: &str,
    ) -> Result<(), ExportError>;

    fn write(&mut self, handle: &mut Self::Handle, text: &str) -> Result<(), ExportError>;

    /// Flushes and releases the file.
    fn close_file(&mut self, handle: Self::Handle) -> Result<(), ExportError>;
}

/// Renders the OpenFOAM banner and `FoamFile` dictionary.
pub fn foam_header(version: &str, class: &str, folder: &str, name: &str) -> String {
    let mut header = String::new();
    header.push_str(r"/*--------------------------------*- C++ -*----------------------------------*\");
    header.push('\n');
    header.push_str(r"| =========                 |                                                 |");
    header.push('\n');
    header.push_str(r"| \\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox           |");
    header.push('\n');
    header.push_str(&format!(
        r"|  \\    /   O peration     | Version:  {:<38}|",
        version
    ));
    header.push('\n');
    header.push_str(r"|   \\  /    A nd           | Web:      www.OpenFOAM.com                      |");
    header.push('\n');
    header.push_str(r"|    \\/     M anipulation  |                                                 |");
    header.push('\n');
    header.push_str(r"\*---------------------------------------------------------------------------*/");
    header.push('\n');
    header.push_str("FoamFile\n{\n");
    header.push_str("    version     2.0;\n");
    header.push_str("    format      ascii;\n");
    header.push_str(&format!("    class       {};\n", class));
    header.push_str(&format!("    location    \"{}\";\n", folder));
    header.push_str(&format!("    object      {};\n", name));
    header.push_str("}\n");
    header.push_str(HEADER_SEPARATOR);
    header.push('\n');
    header
}

/// An open file inside a [`CaseDirectory`].
pub struct CaseFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl CaseFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Case directory on disk, `<run_directory>/<case_name>`.
#[derive(Debug, Clone)]
pub struct CaseDirectory {
    root: PathBuf,
    version: String,
}

impl CaseDirectory {
    /// # Arguments
    /// * `root` - Case directory (created on demand)
    /// * `version` - OpenFOAM version string shown in file headers
    pub fn new(root: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            version: version.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the case root and its `0/`, `constant/` and `system/` folders.
    pub fn create_directory_structure(&self) -> Result<(), ExportError> {
        for folder in CASE_FOLDERS {
            let path = self.root.join(folder);
            fs::create_dir_all(&path).map_err(|source| ExportError::Create { path, source })?;
        }
        log::debug!("Created case directory structure in {}", self.root.display());
        Ok(())
    }
}

impl FileManager for CaseDirectory {
    type Handle = CaseFile;

    fn create_file(&mut self, folder: &str, name: &str) -> Result<CaseFile, ExportError> {
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).map_err(|source| ExportError::Create {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(name);
        let file = File::create(&path).map_err(|source| ExportError::Create {
            path: path.clone(),
            source,
        })?;

        Ok(CaseFile {
            path,
            writer: BufWriter::new(file),
        })
    }

    fn write_header(
        &mut self,
        handle: &mut CaseFile,
        class: &str,
        folder: &str,
        name: &str,
    ) -> Result<(), ExportError> {
        let header = foam_header(&self.version, class, folder, name);
        handle.writer.write_all(header.as_bytes())?;
        Ok(())
    }

    fn write(&mut self, handle: &mut CaseFile, text: &str) -> Result<(), ExportError> {
        handle.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn close_file(&mut self, mut handle: CaseFile) -> Result<(), ExportError> {
        handle.writer.flush()?;
        log::debug!("Wrote {}", handle.path.display());
        Ok(())
    }
}
