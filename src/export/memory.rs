//! In-memory file manager used for dry runs and tests.

use std::collections::BTreeMap;

use super::foam::{foam_header, ExportError, FileManager};

/// A file being assembled by [`MemoryFiles`].
#[derive(Debug)]
pub struct MemoryFile {
    key: String,
    contents: String,
}

/// Collects closed files as strings keyed by `<folder>/<name>`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFiles {
    version: String,
    files: BTreeMap<String, String>,
}

impl MemoryFiles {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            files: BTreeMap::new(),
        }
    }

    /// Returns the contents of a closed file.
    pub fn get(&self, folder: &str, name: &str) -> Option<&str> {
        self.files.get(&format!("{folder}/{name}")).map(String::as_str)
    }

    /// Paths of all closed files, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileManager for MemoryFiles {
    type Handle = MemoryFile;

    fn create_file(&mut self, folder: &str, name: &str) -> Result<MemoryFile, ExportError> {
        Ok(MemoryFile {
            key: format!("{folder}/{name}"),
            contents: String::new(),
        })
    }

    fn write_header(
        &mut self,
        handle: &mut MemoryFile,
        class: &str,
        folder: &str,
        name: &str,
    ) -> Result<(), ExportError> {
        handle
            .contents
            .push_str(&foam_header(&self.version, class, folder, name));
        Ok(())
    }

    fn write(&mut self, handle: &mut MemoryFile, text: &str) -> Result<(), ExportError> {
        handle.contents.push_str(text);
        Ok(())
    }

    fn close_file(&mut self, handle: MemoryFile) -> Result<(), ExportError> {
        self.files.insert(handle.key, handle.contents);
        Ok(())
    }
}
