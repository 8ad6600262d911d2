use super::names;
use super::selective_map::{deserialize_selected, SelectiveMap};
use serde::{Deserialize, Deserializer, Serialize};

/// Image roles of one entry; only the resolver's roles are typed
pub type Images = SelectiveMap<ImageRef>;

/// ImageRef value object: one image coordinate inside a component entry
///
/// An ImageRef never carries its registry inline. The registry is resolved
/// externally (see `RegistryFallback`) and joined with `reference_in`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    /// Path appended to the registry (e.g. "kind/node")
    #[serde(rename = "imagePath")]
    pub image_path: String,
    /// Image tag (e.g. "v1.21.2_vmware.1")
    pub tag: String,
    /// Component-specific registry override; empty means "use the default"
    pub repository: String,
}

impl ImageRef {
    pub fn new(image_path: &str, tag: &str, repository: &str) -> Self {
        Self {
            image_path: image_path.to_string(),
            tag: tag.to_string(),
            repository: repository.to_string(),
        }
    }

    /// Composes `<registry>/<imagePath>:<tag>` with every field used verbatim
    pub fn reference_in(&self, registry: &str) -> String {
        format!("{}/{}:{}", registry, self.image_path, self.tag)
    }
}

/// ComponentEntry: one supported version of a BOM component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentEntry {
    pub version: String,
    /// Image role name (e.g. "kindNodeImage") to image coordinate
    #[serde(deserialize_with = "deserialize_images")]
    pub images: Images,
}

fn deserialize_images<'de, D>(deserializer: D) -> Result<Images, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_selected(deserializer, names::images::TYPED)
}

impl ComponentEntry {
    pub fn image(&self, role: &str) -> Option<&ImageRef> {
        self.images.get(role)
    }

    pub fn raw_image(&self, role: &str) -> Option<&serde_yaml_ng::Value> {
        self.images.raw(role)
    }
}
