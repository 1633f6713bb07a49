use crate::error::RunError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
#[cfg(test)]
use std::{cell::RefCell, collections::HashMap, path::PathBuf};

/// Source of whole-file byte contents
pub trait ByteSource {
    /// Read the full contents of `path`
    fn read(&self, path: &Path) -> Result<Vec<u8>, RunError>;
}

/// Destination for whole-file byte contents
pub trait ByteSink {
    /// Write exactly `bytes` to `path`, replacing any existing content
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), RunError>;
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn read(&self, path: &Path) -> Result<Vec<u8>, RunError> {
        (**self).read(path)
    }
}

impl<T: ByteSink + ?Sized> ByteSink for &T {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), RunError> {
        (**self).write(path, bytes)
    }
}

/// Local filesystem source and sink
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl ByteSource for FileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>, RunError> {
        let bytes = std::fs::read(path).map_err(|source| RunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read input");
        Ok(bytes)
    }
}

impl ByteSink for FileSystem {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), RunError> {
        let to_error = |source: std::io::Error| RunError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::create(path).map_err(to_error)?;
        file.write_all(bytes).map_err(to_error)?;
        file.flush().map_err(to_error)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote output");
        Ok(())
    }
}

/// In-memory file store for unit tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct InMemoryFiles {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

#[cfg(test)]
impl InMemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.files.borrow_mut().insert(path.into(), bytes);
    }

    /// Contents of a stored file
    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

#[cfg(test)]
impl ByteSource for InMemoryFiles {
    fn read(&self, path: &Path) -> Result<Vec<u8>, RunError> {
        self.get(path).ok_or_else(|| RunError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        })
    }
}

#[cfg(test)]
impl ByteSink for InMemoryFiles {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), RunError> {
        self.insert(path, bytes.to_vec());
        Ok(())
    }
}
