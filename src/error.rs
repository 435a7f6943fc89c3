//! Error types for schedule configuration

use thiserror::Error;

/// Errors raised while building a schedule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Schedule parameters violate a construction invariant
    #[error("invalid schedule configuration: {0}")]
    ConfigError(String),
}

/// Result type for schedule operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::ConfigError("peak below final".to_string());
        assert!(format!("{}", err).contains("invalid schedule configuration"));
        assert!(format!("{}", err).contains("peak below final"));
    }
}
