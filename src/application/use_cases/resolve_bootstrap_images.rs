use crate::application::dto::{BootstrapImagesRequest, BootstrapImagesResponse, ResolvedImage};
use crate::bom_resolution::domain::TkrBom;
use crate::bom_resolution::services::BomResolver;
use crate::ports::inbound::BootstrapImagesPort;
use crate::ports::outbound::{BomReader, ImageReaderFactory, ProgressReporter};
use crate::shared::Result;
use chrono::Utc;

/// Number of accessor steps reported through `report_progress`
const RESOLUTION_STEPS: usize = 4;

/// ResolveBootstrapImagesUseCase - resolves every bootstrap image of a BOM
///
/// Reads the manifest through `BomReader`, decodes it, and runs each
/// `BomResolver` accessor, delegating the kapp-controller reference to the
/// injected `ImageReaderFactory`.
///
/// # Type Parameters
/// * `BR` - BomReader implementation
/// * `IRF` - ImageReaderFactory implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveBootstrapImagesUseCase<BR, IRF, PR> {
    bom_reader: BR,
    image_reader_factory: IRF,
    progress_reporter: PR,
}

impl<BR, IRF, PR> ResolveBootstrapImagesUseCase<BR, IRF, PR>
where
    BR: BomReader,
    IRF: ImageReaderFactory,
    PR: ProgressReporter,
{
    /// Creates a new ResolveBootstrapImagesUseCase with injected dependencies
    pub fn new(bom_reader: BR, image_reader_factory: IRF, progress_reporter: PR) -> Self {
        Self {
            bom_reader,
            image_reader_factory,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Returns
    /// BootstrapImagesResponse with every resolved reference
    pub fn execute(&self, request: BootstrapImagesRequest) -> Result<BootstrapImagesResponse> {
        // Step 1: Read and decode the BOM
        let bom = self.load_bom(&request)?;

        // Step 2: Resolve the bootstrap images
        let response = self.resolve(&bom).inspect_err(|e| {
            self.progress_reporter
                .report_error(&format!("❌ Image resolution failed: {}", e));
        })?;

        self.progress_reporter
            .report_completion("✅ Bootstrap images resolved");
        Ok(response)
    }

    /// Reads and decodes the BOM, reporting what was found
    fn load_bom(&self, request: &BootstrapImagesRequest) -> Result<TkrBom> {
        self.progress_reporter.report(&format!(
            "📖 Loading BOM from: {}",
            request.bom_path.display()
        ));

        let bytes = self.bom_reader.read_bom(&request.bom_path)?;
        let bom = TkrBom::from_slice(&bytes)?;

        self.progress_reporter.report(&format!(
            "✅ Release {} with {} component(s)",
            display_or_unknown(bom.release_version()),
            bom.components.len()
        ));

        if bom.default_registry().is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: imageConfig.imageRepository is empty; images without their own repository will have no registry.",
            );
        }

        Ok(bom)
    }

    fn resolve(&self, bom: &TkrBom) -> Result<BootstrapImagesResponse> {
        let resolver = BomResolver::new(bom);

        self.progress_reporter
            .report_progress(0, RESOLUTION_STEPS, Some("node image"));
        let node_image = resolver.node_image()?;

        self.progress_reporter
            .report_progress(1, RESOLUTION_STEPS, Some("core package repository"));
        let core_repo_bundle_path = resolver.core_repo_bundle_path()?;

        self.progress_reporter
            .report_progress(2, RESOLUTION_STEPS, Some("kapp-controller image"));
        let kapp_reader = resolver.kapp_image(&self.image_reader_factory)?;

        self.progress_reporter
            .report_progress(3, RESOLUTION_STEPS, Some("additional repositories"));
        let additional_repo_bundle_paths = resolver.additional_repo_bundle_paths();

        self.progress_reporter
            .report_progress(RESOLUTION_STEPS, RESOLUTION_STEPS, None);

        Ok(BootstrapImagesResponse {
            api_version: bom.api_version.clone(),
            release_version: bom.release_version().to_string(),
            default_registry: resolver.registry().to_string(),
            node_image,
            core_repo_bundle_path,
            kapp_image: ResolvedImage::from_reader(&kapp_reader),
            additional_repo_bundle_paths,
            resolved_at: Utc::now().to_rfc3339(),
        })
    }
}

impl<BR, IRF, PR> BootstrapImagesPort for ResolveBootstrapImagesUseCase<BR, IRF, PR>
where
    BR: BomReader,
    IRF: ImageReaderFactory,
    PR: ProgressReporter,
{
    fn resolve_bootstrap_images(
        &self,
        request: BootstrapImagesRequest,
    ) -> Result<BootstrapImagesResponse> {
        self.execute(request)
    }
}

fn display_or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "<unknown>"
    } else {
        value
    }
}
