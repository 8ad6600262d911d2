use crate::ports::outbound::BomReader;
use crate::shared::error::BomError;
use crate::shared::security::{read_bounded, validate_manifest_file, MAX_BOM_FILE_SIZE};
use crate::shared::Result;
use std::fs::File;
use std::path::Path;

/// FileSystemReader adapter for reading BOM manifests from local storage
///
/// Implements the BomReader port. Symbolic links are followed; the target
/// must be a regular file and is never read past the size limit.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_BOM_FILE_SIZE,
        }
    }

    /// Reader with a custom size limit
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomReader for FileSystemReader {
    fn read_bom(&self, bom_path: &Path) -> Result<Vec<u8>> {
        if !bom_path.exists() {
            return Err(BomError::BomNotFound {
                path: bom_path.to_path_buf(),
                suggestion: "Download the TKR BOM first, or pass the correct path with the --bom option."
                    .to_string(),
            }
            .into());
        }

        let size = validate_manifest_file(bom_path, self.max_file_size)?;

        let file = File::open(bom_path).map_err(|e| BomError::BomReadError {
            path: bom_path.to_path_buf(),
            details: e.to_string(),
        })?;

        read_bounded(file, bom_path, size, self.max_file_size)
    }
}
