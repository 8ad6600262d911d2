//! Local image reader that accepts a reference after parsing it.
//!
//! Parses references like `projects.registry.vmware.com/tkg/kapp-controller:v0.23.0`
//! into registry, repository, tag and digest. Nothing is fetched from the registry.

use crate::ports::outbound::{ImageReaderFactory, TkrImageReader};
use crate::shared::error::BomError;
use crate::shared::Result;

/// Registry assumed when the first path component is not a host.
const DEFAULT_REGISTRY: &str = "docker.io";

/// Tag assumed when neither a tag nor a digest is present.
const DEFAULT_TAG: &str = "latest";

/// A parsed, syntactically valid image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedImageReference {
    reference: String,
    registry: String,
    repository: String,
    tag: Option<String>,
    digest: Option<String>,
}

impl ParsedImageReference {
    /// Parse an image reference string.
    ///
    /// Supports formats:
    /// - `registry.example.com/tkg/kind/node:v1.21.2`
    /// - `localhost:5000/kapp-controller:v0.30.0`
    /// - `registry.example.com/repo@sha256:abc...`
    /// - `kapp-controller` → docker.io/library/kapp-controller:latest
    pub fn parse(reference: &str) -> Result<Self> {
        let invalid = |details: &str| -> anyhow::Error {
            BomError::ImageResolution {
                reference: reference.to_string(),
                details: details.to_string(),
            }
            .into()
        };

        if reference.is_empty() {
            return Err(invalid("empty image reference"));
        }
        if reference.chars().any(char::is_whitespace) {
            return Err(invalid("image reference contains whitespace"));
        }

        let (name_tag, digest) = match reference.split_once('@') {
            Some((name, digest)) => {
                let valid = digest
                    .split_once(':')
                    .is_some_and(|(algorithm, hex)| !algorithm.is_empty() && !hex.is_empty());
                if !valid {
                    return Err(invalid("invalid digest, expected algorithm:hex"));
                }
                (name, Some(digest.to_string()))
            }
            None => (reference, None),
        };

        // Only a colon after the last slash separates a tag; earlier ones are ports.
        let last_slash = name_tag.rfind('/').map_or(0, |pos| pos + 1);
        let (name, tag) = match name_tag[last_slash..].rfind(':') {
            Some(colon) => {
                let colon = last_slash + colon;
                let tag = &name_tag[colon + 1..];
                if tag.is_empty() {
                    return Err(invalid("empty tag"));
                }
                (&name_tag[..colon], Some(tag.to_string()))
            }
            None => (name_tag, None),
        };

        let (registry, repository) = Self::split_registry_repository(name);
        if repository.is_empty() || repository.split('/').any(str::is_empty) {
            return Err(invalid("empty path component in repository"));
        }
        if repository.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(invalid("repository must be lowercase"));
        }

        let tag = match (tag, &digest) {
            (None, None) => Some(DEFAULT_TAG.to_string()),
            (tag, _) => tag,
        };

        Ok(Self {
            reference: reference.to_string(),
            registry,
            repository,
            tag,
            digest,
        })
    }

    /// Split a name into registry and repository.
    ///
    /// The first component is a registry when it contains a dot or a port,
    /// or is `localhost`.
    fn split_registry_repository(name: &str) -> (String, String) {
        if let Some((first, rest)) = name.split_once('/') {
            if first.contains('.') || first.contains(':') || first == "localhost" {
                return (first.to_string(), rest.to_string());
            }
            return (DEFAULT_REGISTRY.to_string(), name.to_string());
        }
        (DEFAULT_REGISTRY.to_string(), format!("library/{}", name))
    }
}

impl TkrImageReader for ParsedImageReference {
    fn reference(&self) -> &str {
        &self.reference
    }

    fn registry(&self) -> &str {
        &self.registry
    }

    fn repository(&self) -> &str {
        &self.repository
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}

/// ImageReaderFactory that only checks the syntax of a reference
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceParsingReaderFactory;

impl ReferenceParsingReaderFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ImageReaderFactory for ReferenceParsingReaderFactory {
    type Reader = ParsedImageReference;

    fn new_reader(&self, reference: &str) -> Result<ParsedImageReference> {
        ParsedImageReference::parse(reference)
    }
}
