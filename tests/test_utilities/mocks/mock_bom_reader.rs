use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tkr_bom::prelude::*;

/// Mock BomReader serving an in-memory document
#[derive(Clone)]
pub struct MockBomReader {
    content: Vec<u8>,
    should_fail: bool,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockBomReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.as_bytes().to_vec(),
            should_fail: false,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn from_bytes(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
            should_fail: false,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reader that fails as if the file did not exist
    pub fn with_failure() -> Self {
        Self {
            content: Vec::new(),
            should_fail: true,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl BomReader for MockBomReader {
    fn read_bom(&self, bom_path: &Path) -> Result<Vec<u8>> {
        self.requested_paths
            .lock()
            .unwrap()
            .push(bom_path.to_path_buf());

        if self.should_fail {
            return Err(BomError::BomNotFound {
                path: bom_path.to_path_buf(),
                suggestion: "Mock BOM reader configured to fail".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
