use crate::bom_resolution::domain::{ImageRef, TkrBom};
use crate::bom_resolution::policies::{RegistryFallback, VersionSelection};
use crate::ports::outbound::ImageReaderFactory;
use crate::shared::error::BomError;
use crate::shared::Result;

pub use crate::bom_resolution::domain::names::{components, images};

/// Package repository bundle that every cluster gets in addition to the core one.
///
/// TODO: read this from the BOM once the TKR API publishes additional
/// repository bundles.
pub const TCE_REPO_URL: &str = "projects.registry.vmware.com/tce/main:0.9.1";

/// BomResolver service deriving pull-ready image references from a decoded BOM
///
/// Every reference has the form `<registry>/<imagePath>:<tag>`. The entry
/// of each component is picked by the configured `VersionSelection`.
pub struct BomResolver<'a> {
    bom: &'a TkrBom,
    selection: VersionSelection,
}

impl<'a> BomResolver<'a> {
    pub fn new(bom: &'a TkrBom) -> Self {
        Self::with_selection(bom, VersionSelection::default())
    }

    pub fn with_selection(bom: &'a TkrBom, selection: VersionSelection) -> Self {
        Self { bom, selection }
    }

    /// The BOM-wide default registry
    pub fn registry(&self) -> &'a str {
        self.bom.default_registry()
    }

    /// Reference of the kind node image, honoring its registry override
    ///
    /// # Errors
    /// Returns `ComponentNotFound` / `ImageNotFound` when the BOM does not
    /// carry `kubernetes-sigs_kind` / `kindNodeImage`
    pub fn node_image(&self) -> Result<String> {
        let image = self.selected_image(components::KUBERNETES_SIGS_KIND, images::KIND_NODE_IMAGE)?;
        Ok(self.reference_with_fallback(image))
    }

    /// Reference of the core package repository bundle
    ///
    /// Always uses the default registry: a `repository` set on the bundle
    /// image is ignored.
    pub fn core_repo_bundle_path(&self) -> Result<String> {
        let image = self.selected_image(
            components::TKG_CORE_PACKAGES,
            images::TANZU_CORE_PACKAGE_REPOSITORY_IMAGE,
        )?;
        Ok(image.reference_in(self.registry()))
    }

    /// Composed reference of the kapp-controller image, honoring its registry override
    pub fn kapp_image_reference(&self) -> Result<String> {
        let image = self.selected_image(
            components::TKG_CORE_PACKAGES,
            images::KAPP_CONTROLLER_TANZU_VMWARE_COM,
        )?;
        Ok(self.reference_with_fallback(image))
    }

    /// Builds an image reader for the kapp-controller image
    ///
    /// Whatever `factory` returns for the composed reference is returned as is.
    pub fn kapp_image<F: ImageReaderFactory>(&self, factory: &F) -> Result<F::Reader> {
        let reference = self.kapp_image_reference()?;
        factory.new_reader(&reference)
    }

    /// Additional package repository bundles to install
    pub fn additional_repo_bundle_paths(&self) -> Vec<String> {
        vec![TCE_REPO_URL.to_string()]
    }

    fn reference_with_fallback(&self, image: &ImageRef) -> String {
        let registry = RegistryFallback::resolve(&image.repository, self.registry());
        image.reference_in(registry)
    }

    fn selected_image(&self, component: &str, image: &str) -> Result<&'a ImageRef> {
        let entry = self
            .bom
            .component(component)
            .and_then(|entries| self.selection.select(entries))
            .ok_or_else(|| BomError::ComponentNotFound {
                component: component.to_string(),
            })?;

        entry.image(image).ok_or_else(|| {
            BomError::ImageNotFound {
                component: component.to_string(),
                image: image.to_string(),
            }
            .into()
        })
    }
}
