use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading a BOM manifest from local storage
///
/// The core never fetches a manifest over the network; whatever put the file
/// on disk runs before this port is called.
pub trait BomReader {
    /// Reads the raw manifest bytes at `bom_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The path (or the file a link points at) is not a regular file or is too large
    /// - The file cannot be read due to permissions or I/O errors
    fn read_bom(&self, bom_path: &Path) -> Result<Vec<u8>>;
}
