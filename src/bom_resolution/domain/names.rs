//! Component and image role names read by the bootstrap accessors.
//!
//! Only these keys are decoded into typed records; every other component
//! and image role of a BOM is kept as raw YAML.

pub mod components {
    pub const KUBERNETES_SIGS_KIND: &str = "kubernetes-sigs_kind";
    pub const TKG_CORE_PACKAGES: &str = "tkg-core-packages";

    pub(crate) const TYPED: &[&str] = &[KUBERNETES_SIGS_KIND, TKG_CORE_PACKAGES];
}

pub mod images {
    pub const KIND_NODE_IMAGE: &str = "kindNodeImage";
    pub const TANZU_CORE_PACKAGE_REPOSITORY_IMAGE: &str = "tanzuCorePackageRepositoryImage";
    pub const KAPP_CONTROLLER_TANZU_VMWARE_COM: &str = "kapp-controller.tanzu.vmware.com";

    pub(crate) const TYPED: &[&str] = &[
        KIND_NODE_IMAGE,
        TANZU_CORE_PACKAGE_REPOSITORY_IMAGE,
        KAPP_CONTROLLER_TANZU_VMWARE_COM,
    ];
}
