//! Error types for the slider host.

use thiserror::Error;

/// Host error type
#[derive(Debug, Error)]
pub enum HostError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Point sampling or figure construction error
    #[error("Computation error: {0}")]
    Cloud(#[from] tda_core::CloudError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tda_core::CloudError;

    #[test]
    fn test_error_display() {
        let err: HostError = CloudError::invalid("radius", "must be finite").into();
        assert!(err.to_string().starts_with("Computation error:"));
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = HostError::from(io);
        assert!(matches!(err, HostError::Io(_)));
    }
}
