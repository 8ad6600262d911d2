/// Mock implementations for testing
mod mock_bom_reader;
mod mock_image_reader_factory;
mod mock_progress_reporter;

pub use mock_bom_reader::MockBomReader;
pub use mock_image_reader_factory::{MockImageReader, MockImageReaderFactory};
pub use mock_progress_reporter::MockProgressReporter;
