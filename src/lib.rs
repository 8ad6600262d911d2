//! tkr-bom - bootstrap image resolution for Tanzu Kubernetes Release BOMs
//!
//! This library decodes a TKR Bill of Materials and derives pull-ready image
//! references for the components needed to bootstrap a cluster: the kind node
//! image, the core package repository bundle and the kapp-controller image.
//!
//! # Architecture
//!
//! - **Domain Layer** (`bom_resolution`): BOM model, selection and registry policies, resolver
//! - **Application Layer** (`application`): Use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types, security checks and the result alias
//!
//! # Example
//!
//! ```no_run
//! use tkr_bom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ResolveBootstrapImagesUseCase::new(
//!     FileSystemReader::new(),
//!     ReferenceParsingReaderFactory::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = BootstrapImagesRequest::new(PathBuf::from("tkr-bom-v1.21.2.yaml"));
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new().format(&response)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The domain resolver can also be used directly on an in-memory document:
//!
//! ```
//! use tkr_bom::prelude::*;
//!
//! let bom = TkrBom::parse(
//!     r#"
//! imageConfig:
//!   imageRepository: registry.example.com/tkg
//! components:
//!   kubernetes-sigs_kind:
//!     - version: v0.11.1
//!       images:
//!         kindNodeImage:
//!           imagePath: kind/node
//!           tag: v1.21.2
//! "#,
//! )
//! .unwrap();
//!
//! let resolver = BomResolver::new(&bom);
//! assert_eq!(
//!     resolver.node_image().unwrap(),
//!     "registry.example.com/tkg/kind/node:v1.21.2"
//! );
//! ```

pub mod adapters;
pub mod application;
pub mod bom_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::image::{
        ParsedImageReference, ReferenceParsingReaderFactory,
    };
    pub use crate::application::dto::{
        BootstrapImagesRequest, BootstrapImagesResponse, OutputFormat, ResolvedImage,
    };
    pub use crate::application::use_cases::ResolveBootstrapImagesUseCase;
    pub use crate::bom_resolution::domain::{ComponentEntry, ImageRef, TkrBom};
    pub use crate::bom_resolution::policies::{RegistryFallback, VersionSelection};
    pub use crate::bom_resolution::services::{BomResolver, TCE_REPO_URL};
    pub use crate::ports::inbound::BootstrapImagesPort;
    pub use crate::ports::outbound::{
        BomReader, BootstrapImagesFormatter, ImageReaderFactory, OutputPresenter,
        ProgressReporter, TkrImageReader,
    };
    pub use crate::shared::error::{BomError, ExitCode};
    pub use crate::shared::Result;
}
