use super::ResolvedImage;

/// BootstrapImagesResponse - response DTO carrying every resolved bootstrap image
///
/// Adapters turn this into text or JSON; it holds plain values only so
/// formatting never needs the BOM again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapImagesResponse {
    /// Opaque `apiVersion` of the BOM
    pub api_version: String,
    /// Distribution release the BOM describes
    pub release_version: String,
    /// `imageConfig.imageRepository` of the BOM
    pub default_registry: String,
    pub node_image: String,
    pub core_repo_bundle_path: String,
    /// kapp-controller image as accepted and parsed by the image reader
    pub kapp_image: ResolvedImage,
    pub additional_repo_bundle_paths: Vec<String>,
    /// RFC 3339 timestamp of the resolution
    pub resolved_at: String,
}
