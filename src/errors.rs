use thiserror::Error;

/// Failures while acquiring a capture stream or binding it to a surface.
///
/// The bootstrap handler absorbs every variant into the same diagnostic line;
/// the variants exist so the reason can still be logged at debug level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Capture acquisition failed: {0}")]
    AcquisitionFailed(String),
    #[error("Display surface not found: {0}")]
    SurfaceMissing(String),
    #[error("Unsupported constraints: {0}")]
    Unsupported(String),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
