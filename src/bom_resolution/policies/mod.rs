mod registry_fallback;
mod version_selection;

pub use registry_fallback::RegistryFallback;
pub use version_selection::VersionSelection;
