/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, image readers, console, etc.).
pub mod bom_reader;
pub mod formatter;
pub mod image_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use bom_reader::BomReader;
pub use formatter::BootstrapImagesFormatter;
pub use image_reader::{ImageReaderFactory, TkrImageReader};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
