use crate::shared::Result;

/// TkrImageReader: a fully-qualified image reference that has been accepted
/// by an image reader implementation
pub trait TkrImageReader {
    /// The reference exactly as it was handed to the factory
    fn reference(&self) -> &str;

    /// Registry host (e.g. "projects.registry.vmware.com")
    fn registry(&self) -> &str;

    /// Repository path inside the registry (e.g. "tkg/kapp-controller")
    fn repository(&self) -> &str;

    fn tag(&self) -> Option<&str>;

    fn digest(&self) -> Option<&str>;
}

/// ImageReaderFactory port for turning a composed reference into an image reader
///
/// The resolver only builds the `registry/path:tag` string; interpreting and
/// validating it belongs to the factory. Its errors are forwarded unchanged.
pub trait ImageReaderFactory {
    type Reader: TkrImageReader;

    /// Constructs a reader for `reference`
    ///
    /// # Errors
    /// Returns an error if the implementation rejects the reference
    fn new_reader(&self, reference: &str) -> Result<Self::Reader>;
}
