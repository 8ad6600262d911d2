/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod bootstrap_images_request;
mod bootstrap_images_response;
mod output_format;
mod resolved_image;

pub use bootstrap_images_request::BootstrapImagesRequest;
pub use bootstrap_images_response::BootstrapImagesResponse;
pub use output_format::OutputFormat;
pub use resolved_image::ResolvedImage;
