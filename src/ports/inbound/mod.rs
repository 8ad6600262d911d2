/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod bootstrap_images_port;

pub use bootstrap_images_port::BootstrapImagesPort;
