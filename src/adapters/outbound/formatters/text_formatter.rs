use crate::application::dto::BootstrapImagesResponse;
use crate::ports::outbound::BootstrapImagesFormatter;
use crate::shared::Result;

/// Width of the label column
const LABEL_WIDTH: usize = 26;

/// TextFormatter adapter rendering one `label: value` line per image
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn line(output: &mut String, label: &str, value: &str) {
        let label = format!("{}:", label);
        output.push_str(&format!("{:<width$}{}\n", label, value, width = LABEL_WIDTH));
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapImagesFormatter for TextFormatter {
    fn format(&self, response: &BootstrapImagesResponse) -> Result<String> {
        let mut output = String::new();

        Self::line(&mut output, "Release", &response.release_version);
        Self::line(&mut output, "API version", &response.api_version);
        Self::line(&mut output, "Default registry", &response.default_registry);
        Self::line(&mut output, "Node image", &response.node_image);
        Self::line(
            &mut output,
            "Core package repository",
            &response.core_repo_bundle_path,
        );
        Self::line(
            &mut output,
            "kapp-controller image",
            &response.kapp_image.reference,
        );
        output.push_str("Additional repositories:\n");
        for path in &response.additional_repo_bundle_paths {
            output.push_str(&format!("  - {}\n", path));
        }

        Ok(output)
    }
}
