use crate::ports::outbound::TkrImageReader;

/// ResolvedImage - an image reference together with the parts the image
/// reader parsed out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub reference: String,
    pub registry: String,
    pub repository: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
}

impl ResolvedImage {
    pub fn from_reader(reader: &impl TkrImageReader) -> Self {
        Self {
            reference: reader.reference().to_string(),
            registry: reader.registry().to_string(),
            repository: reader.repository().to_string(),
            tag: reader.tag().map(str::to_string),
            digest: reader.digest().map(str::to_string),
        }
    }
}
