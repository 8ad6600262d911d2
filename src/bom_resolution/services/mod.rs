mod bom_resolver;

pub use bom_resolver::{components, images, BomResolver, TCE_REPO_URL};
