/// RegistryFallback policy for choosing the registry of an image
///
/// Priority order:
/// 1. the image's own `repository` (if non-empty)
/// 2. the BOM-wide default registry (`imageConfig.imageRepository`)
///
/// The override wins outright; the two values are never merged.
pub struct RegistryFallback;

impl RegistryFallback {
    /// Resolves the registry for an image
    ///
    /// # Arguments
    /// * `override_repository` - The image's `repository` field
    /// * `default_registry` - The BOM's default registry
    pub fn resolve<'a>(override_repository: &'a str, default_registry: &'a str) -> &'a str {
        if override_repository.is_empty() {
            default_registry
        } else {
            override_repository
        }
    }
}
