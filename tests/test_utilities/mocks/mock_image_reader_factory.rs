use std::sync::{Arc, Mutex};
use tkr_bom::prelude::*;

/// Image reader returned by MockImageReaderFactory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockImageReader {
    pub reference: String,
}

impl TkrImageReader for MockImageReader {
    fn reference(&self) -> &str {
        &self.reference
    }

    fn registry(&self) -> &str {
        self.reference.split('/').next().unwrap_or_default()
    }

    fn repository(&self) -> &str {
        let without_registry = self
            .reference
            .split_once('/')
            .map_or("", |(_, rest)| rest);
        without_registry
            .rsplit_once(':')
            .map_or(without_registry, |(repository, _)| repository)
    }

    fn tag(&self) -> Option<&str> {
        self.reference.rsplit_once(':').map(|(_, tag)| tag)
    }

    fn digest(&self) -> Option<&str> {
        None
    }
}

/// Mock ImageReaderFactory that records every reference it is asked for
#[derive(Clone, Default)]
pub struct MockImageReaderFactory {
    failure: Option<String>,
    pub requested_references: Arc<Mutex<Vec<String>>>,
}

impl MockImageReaderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory that rejects every reference with the given details
    pub fn with_failure(details: &str) -> Self {
        Self {
            failure: Some(details.to_string()),
            requested_references: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requested_references(&self) -> Vec<String> {
        self.requested_references.lock().unwrap().clone()
    }
}

impl ImageReaderFactory for MockImageReaderFactory {
    type Reader = MockImageReader;

    fn new_reader(&self, reference: &str) -> Result<MockImageReader> {
        self.requested_references
            .lock()
            .unwrap()
            .push(reference.to_string());

        if let Some(details) = &self.failure {
            return Err(BomError::ImageResolution {
                reference: reference.to_string(),
                details: details.clone(),
            }
            .into());
        }
        Ok(MockImageReader {
            reference: reference.to_string(),
        })
    }
}
