// crates/infra/src/persistence/file_reader.rs
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anhinga_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading input documents with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the whole file at `path` as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        fs::read_to_string(path).map_err(|source| InfrastructureError::SourceRead { path: path.to_path_buf(), source })
    }

    /// Read all of standard input as UTF-8 text.
    pub fn read_stdin() -> InfraResult<String> {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .map_err(|source| InfrastructureError::SourceRead { path: PathBuf::from("-"), source })?;
        Ok(buf)
    }
}
