use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all bootstrap images were resolved
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable BOM, decode failure, missing component, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for BOM decoding and image resolution.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint-bearing messages next to the variants.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("BOM file not found: {path}\n\n💡 Hint: {suggestion}")]
    BomNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read BOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    BomReadError { path: PathBuf, details: String },

    #[error("Failed to decode BOM document\nDetails: {details}\n\n💡 Hint: Please verify that the BOM is a valid YAML document")]
    BomDecodeError { details: String },

    #[error("Component '{component}' has no version entries in the BOM\n\n💡 Hint: Check the 'components' section of the BOM for a '{component}' entry")]
    ComponentNotFound { component: String },

    #[error("Image '{image}' not found in component '{component}'\n\n💡 Hint: Check the 'images' section of the selected '{component}' entry")]
    ImageNotFound { component: String, image: String },

    #[error("Failed to resolve image reference: {reference}\nDetails: {details}")]
    ImageResolution { reference: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for CLI and config values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
