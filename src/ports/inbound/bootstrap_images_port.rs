use crate::application::dto::{BootstrapImagesRequest, BootstrapImagesResponse};
use crate::shared::Result;

/// BootstrapImagesPort - Inbound port for resolving bootstrap images from a BOM
///
/// This is the entry point external adapters (CLI, other tools) use to get
/// pull-ready references for the images needed to stand up a cluster.
pub trait BootstrapImagesPort {
    /// Resolves the bootstrap images described by the BOM in `request`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The BOM cannot be read or decoded
    /// - A required component or image is missing from the BOM
    /// - The image reader rejects the kapp-controller reference
    fn resolve_bootstrap_images(
        &self,
        request: BootstrapImagesRequest,
    ) -> Result<BootstrapImagesResponse>;
}
