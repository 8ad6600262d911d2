use crate::application::dto::{BootstrapImagesResponse, ResolvedImage};
use crate::ports::outbound::BootstrapImagesFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BootstrapImagesDocument<'a> {
    api_version: &'a str,
    release: Release<'a>,
    images: Images<'a>,
    additional_repo_bundle_paths: &'a [String],
    metadata: Metadata<'a>,
}

#[derive(Debug, Serialize)]
struct Release<'a> {
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Images<'a> {
    default_registry: &'a str,
    node_image: &'a str,
    core_repo_bundle: &'a str,
    kapp_controller: Image<'a>,
}

/// An image reference with the parts the image reader parsed out of it
#[derive(Debug, Serialize)]
struct Image<'a> {
    reference: &'a str,
    registry: &'a str,
    repository: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<&'a str>,
}

impl<'a> From<&'a ResolvedImage> for Image<'a> {
    fn from(image: &'a ResolvedImage) -> Self {
        Self {
            reference: &image.reference,
            registry: &image.registry,
            repository: &image.repository,
            tag: image.tag.as_deref(),
            digest: image.digest.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    tool_name: &'static str,
    tool_version: &'static str,
    resolved_at: &'a str,
}

/// JsonFormatter adapter emitting the resolved images as a JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapImagesFormatter for JsonFormatter {
    fn format(&self, response: &BootstrapImagesResponse) -> Result<String> {
        let document = BootstrapImagesDocument {
            api_version: &response.api_version,
            release: Release {
                version: &response.release_version,
            },
            images: Images {
                default_registry: &response.default_registry,
                node_image: &response.node_image,
                core_repo_bundle: &response.core_repo_bundle_path,
                kapp_controller: Image::from(&response.kapp_image),
            },
            additional_repo_bundle_paths: &response.additional_repo_bundle_paths,
            metadata: Metadata {
                tool_name: env!("CARGO_PKG_NAME"),
                tool_version: env!("CARGO_PKG_VERSION"),
                resolved_at: &response.resolved_at,
            },
        };

        let mut output =
            serde_json::to_string_pretty(&document).context("Failed to serialize JSON output")?;
        output.push('\n');
        Ok(output)
    }
}
