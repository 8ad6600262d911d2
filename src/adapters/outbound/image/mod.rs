/// Image reader adapters
mod reference_parsing_reader;

pub use reference_parsing_reader::{ParsedImageReference, ReferenceParsingReaderFactory};
