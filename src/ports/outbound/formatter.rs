use crate::application::dto::BootstrapImagesResponse;
use crate::shared::Result;

/// BootstrapImagesFormatter port for rendering resolved bootstrap images
///
/// This port abstracts the output representation (plain text, JSON, etc.).
pub trait BootstrapImagesFormatter {
    /// Formats the resolved images
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &BootstrapImagesResponse) -> Result<String>;
}
