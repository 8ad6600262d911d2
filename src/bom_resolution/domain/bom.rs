use super::component::ComponentEntry;
use super::names;
use super::selective_map::{deserialize_selected, SelectiveMap};
use crate::shared::error::BomError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Components keyed by name; only the resolver's components are typed
pub type Components = SelectiveMap<Vec<ComponentEntry>>;

/// TkrBom aggregate: the decoded Bill of Materials of one Tanzu Kubernetes Release
///
/// Decoding is forward compatible: unknown keys are ignored and absent keys
/// decode to empty values. Only the parts consumed by the resolver are typed.
/// Other components and the cloud-provider catalogs (`ova`, `ami`, `azure`)
/// are kept as generic YAML values, whatever their shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TkrBom {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub release: Release,
    /// Component name to its version entries; entries keep document order
    #[serde(deserialize_with = "deserialize_components")]
    pub components: Components,
    #[serde(rename = "kubeadmConfigSpec")]
    pub kubeadm_config_spec: KubeadmConfigSpec,
    pub ova: serde_yaml_ng::Value,
    pub ami: serde_yaml_ng::Value,
    pub azure: serde_yaml_ng::Value,
    #[serde(rename = "imageConfig")]
    pub image_config: ImageConfig,
    pub addons: BTreeMap<String, AddonSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Default registry for every image without its own `repository`
    #[serde(rename = "imageRepository")]
    pub image_repository: String,
}

/// Cluster bootstrap defaults handed to kubeadm. Not read by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubeadmConfigSpec {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    #[serde(rename = "imageRepository")]
    pub image_repository: String,
    #[serde(rename = "kubernetesVersion")]
    pub kubernetes_version: String,
    pub etcd: EtcdConfig,
    pub dns: DnsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtcdConfig {
    pub local: LocalEtcd,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalEtcd {
    #[serde(rename = "dataDir")]
    pub data_dir: String,
    #[serde(rename = "imageRepository")]
    pub image_repository: String,
    #[serde(rename = "imageTag")]
    pub image_tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsConfig {
    #[serde(rename = "type")]
    pub dns_type: String,
    #[serde(rename = "imageRepository")]
    pub image_repository: String,
    #[serde(rename = "imageTag")]
    pub image_tag: String,
}

/// Metadata describing an installable addon package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonSpec {
    pub category: String,
    #[serde(rename = "clusterTypes")]
    pub cluster_types: Vec<String>,
    #[serde(rename = "packageName")]
    pub package_name: String,
    pub repository: String,
}

fn deserialize_components<'de, D>(deserializer: D) -> std::result::Result<Components, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_selected(deserializer, names::components::TYPED)
}

impl TkrBom {
    /// Decodes a BOM from raw YAML bytes
    ///
    /// # Errors
    /// Returns `BomError::BomDecodeError` if the bytes are not a YAML document
    /// of the expected mapping/sequence shape. No partial BOM is returned.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_yaml_ng::from_slice(bytes).map_err(|e| {
            BomError::BomDecodeError {
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Decodes a BOM from a YAML string
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_slice(content.as_bytes())
    }

    /// The manifest-wide default registry (`imageConfig.imageRepository`)
    pub fn default_registry(&self) -> &str {
        &self.image_config.image_repository
    }

    pub fn release_version(&self) -> &str {
        &self.release.version
    }

    /// All version entries of a component, or `None` when the key is absent
    ///
    /// Only components read by the resolver are decoded into entries; use
    /// `raw_component` for any other one.
    pub fn component(&self, name: &str) -> Option<&[ComponentEntry]> {
        self.components.get(name).map(Vec::as_slice)
    }

    pub fn raw_component(&self, name: &str) -> Option<&serde_yaml_ng::Value> {
        self.components.raw(name)
    }

    pub fn addon(&self, name: &str) -> Option<&AddonSpec> {
        self.addons.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BOM: &str = r#"
apiVersion: run.tanzu.vmware.com/v1alpha2
release:
  version: v1.21.2+vmware.1-tkg.1
components:
  etcd:
  - version: v3.4.13+vmware.15
    images:
      etcd:
        imagePath: etcd
        tag: v3.4.13_vmware.15
  cni_plugins:
  - version: v0.9.1+vmware.6
  kubernetes-sigs_kind:
  - version: v0.11.1+vmware.1
    images:
      kindNodeImage:
        imagePath: kind/node
        tag: v1.21.2_vmware.1
kubeadmConfigSpec:
  apiVersion: kubeadm.k8s.io/v1beta2
  kind: ClusterConfiguration
  imageRepository: projects.registry.vmware.com/tkg
  kubernetesVersion: v1.21.2+vmware.1
  etcd:
    local:
      dataDir: /var/lib/etcd
      imageRepository: projects.registry.vmware.com/tkg
      imageTag: v3.4.13_vmware.15
  dns:
    type: CoreDNS
    imageRepository: projects.registry.vmware.com/tkg
    imageTag: v1.8.0_vmware.5
ova:
- name: ova-photon-3
  osinfo:
    name: photon
    version: "3"
    arch: amd64
  version: v1.21.2+vmware.1-tkg.1
ami:
  us-west-2:
  - id: ami-0123456789abcdef0
    osinfo:
      name: ubuntu
      version: "20.04"
      arch: amd64
azure:
- sku: k8s-1dot21dot2-ubuntu-2004
  publisher: vmware-inc
  offer: tkg-capi
  version: 2021.07.15
  thirdPartyImage: true
imageConfig:
  imageRepository: projects.registry.vmware.com/tkg
addons:
  calico:
    category: cni
    clusterTypes:
    - management
    - workload
    packageName: calico.tanzu.vmware.com
    repository: core
"#;

    #[test]
    fn test_parse_reads_declared_fields() {
        let bom = TkrBom::parse(SAMPLE_BOM).unwrap();

        assert_eq!(bom.api_version, "run.tanzu.vmware.com/v1alpha2");
        assert_eq!(bom.release_version(), "v1.21.2+vmware.1-tkg.1");
        assert_eq!(bom.default_registry(), "projects.registry.vmware.com/tkg");
        assert_eq!(bom.components.len(), 3);

        let kind = bom.component("kubernetes-sigs_kind").unwrap();
        assert_eq!(kind.len(), 1);
        let node = kind[0].image("kindNodeImage").unwrap();
        assert_eq!(node.image_path, "kind/node");
        assert_eq!(node.tag, "v1.21.2_vmware.1");
        assert_eq!(node.repository, "");
    }

    #[test]
    fn test_parse_reads_kubeadm_config_spec() {
        let bom = TkrBom::parse(SAMPLE_BOM).unwrap();
        let spec = &bom.kubeadm_config_spec;

        assert_eq!(spec.api_version, "kubeadm.k8s.io/v1beta2");
        assert_eq!(spec.kind, "ClusterConfiguration");
        assert_eq!(spec.kubernetes_version, "v1.21.2+vmware.1");
        assert_eq!(spec.etcd.local.data_dir, "/var/lib/etcd");
        assert_eq!(spec.etcd.local.image_tag, "v3.4.13_vmware.15");
        assert_eq!(spec.dns.dns_type, "CoreDNS");
        assert_eq!(spec.dns.image_tag, "v1.8.0_vmware.5");
    }

    #[test]
    fn test_parse_keeps_cloud_catalogs_as_values() {
        let bom = TkrBom::parse(SAMPLE_BOM).unwrap();

        let ami_id = bom.ami["us-west-2"][0]["id"].as_str();
        assert_eq!(ami_id, Some("ami-0123456789abcdef0"));
        assert_eq!(bom.ova[0]["osinfo"]["name"].as_str(), Some("photon"));
        assert_eq!(bom.azure[0]["thirdPartyImage"].as_bool(), Some(true));
    }

    #[test]
    fn test_parse_reads_addons() {
        let bom = TkrBom::parse(SAMPLE_BOM).unwrap();
        let calico = bom.addon("calico").unwrap();

        assert_eq!(calico.category, "cni");
        assert_eq!(calico.cluster_types, vec!["management", "workload"]);
        assert_eq!(calico.package_name, "calico.tanzu.vmware.com");
        assert_eq!(calico.repository, "core");
        assert!(bom.addon("antrea").is_none());
    }

    #[test]
    fn test_other_components_are_kept_raw() {
        let bom = TkrBom::parse(SAMPLE_BOM).unwrap();

        assert!(bom.component("cni_plugins").is_none());
        let cni = bom.raw_component("cni_plugins").unwrap();
        assert_eq!(cni[0]["version"].as_str(), Some("v0.9.1+vmware.6"));
        let etcd = bom.raw_component("etcd").unwrap();
        assert_eq!(etcd[0]["images"]["etcd"]["tag"].as_str(), Some("v3.4.13_vmware.15"));
    }

    #[test]
    fn test_oddly_shaped_component_next_to_kind_decodes() {
        let bom = TkrBom::parse(
            "components:\n  weird: just-a-string\n  counts: 3\n  kubernetes-sigs_kind:\n  - version: v1\n",
        )
        .unwrap();

        assert_eq!(bom.component("kubernetes-sigs_kind").unwrap()[0].version, "v1");
        assert_eq!(
            bom.raw_component("weird").and_then(|v| v.as_str()),
            Some("just-a-string")
        );
        assert_eq!(bom.raw_component("counts").and_then(|v| v.as_u64()), Some(3));
        assert_eq!(bom.components.len(), 3);
    }

    #[test]
    fn test_kind_component_without_images_has_empty_map() {
        let bom =
            TkrBom::parse("components:\n  kubernetes-sigs_kind:\n  - version: 0.11\n    images:\n")
                .unwrap();
        let kind = bom.component("kubernetes-sigs_kind").unwrap();
        assert_eq!(kind[0].version, "0.11");
        assert!(kind[0].images.is_empty());
    }

    #[test]
    fn test_null_sections_decode_to_empty_values() {
        let bom = TkrBom::parse("components: null\naddons:\nrelease:\n").unwrap();
        assert!(bom.components.is_empty());
        assert!(bom.addons.is_empty());
        assert_eq!(bom.release_version(), "");

        assert_eq!(TkrBom::parse("").unwrap(), TkrBom::default());
    }

    #[test]
    fn test_absent_fields_decode_to_empty_values() {
        let bom = TkrBom::parse("release:\n  version: v1.20.0\n").unwrap();

        assert_eq!(bom.release_version(), "v1.20.0");
        assert_eq!(bom.api_version, "");
        assert_eq!(bom.default_registry(), "");
        assert!(bom.components.is_empty());
        assert!(bom.addons.is_empty());
        assert!(bom.ova.is_null());
        assert_eq!(bom.kubeadm_config_spec, KubeadmConfigSpec::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let bom = TkrBom::parse(
            r#"
apiVersion: run.tanzu.vmware.com/v1alpha2
futureField:
  nested: true
imageConfig:
  imageRepository: registry.example.com/tkg
  mirrorHint: somewhere
"#,
        )
        .unwrap();

        assert_eq!(bom.default_registry(), "registry.example.com/tkg");
    }

    #[test]
    fn test_component_order_is_document_order() {
        let bom = TkrBom::parse(
            r#"
components:
  kubernetes-sigs_kind:
  - version: v1.21.2+vmware.1
  - version: v1.20.8+vmware.1
"#,
        )
        .unwrap();

        let versions: Vec<&str> = bom
            .component("kubernetes-sigs_kind")
            .unwrap()
            .iter()
            .map(|entry| entry.version.as_str())
            .collect();
        assert_eq!(versions, vec!["v1.21.2+vmware.1", "v1.20.8+vmware.1"]);
    }

    #[test]
    fn test_malformed_yaml_is_decode_error() {
        let result = TkrBom::parse("components: [[[broken");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BomError>(),
            Some(BomError::BomDecodeError { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_of_resolved_component_is_decode_error() {
        let result = TkrBom::parse("components:\n  tkg-core-packages: not-a-sequence\n");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to decode BOM document"));
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result = TkrBom::from_slice(b"release:\n  version: \xc3\x28\n");
        assert!(result.is_err());
    }
}
