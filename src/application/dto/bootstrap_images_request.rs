use std::path::PathBuf;

/// BootstrapImagesRequest - request DTO for the bootstrap image use case
#[derive(Debug, Clone)]
pub struct BootstrapImagesRequest {
    /// Path to the BOM manifest on local storage
    pub bom_path: PathBuf,
}

impl BootstrapImagesRequest {
    pub fn new(bom_path: PathBuf) -> Self {
        Self { bom_path }
    }
}
