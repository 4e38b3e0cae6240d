//! Error types for effectscan-markers
//!
//! Provides unified error handling across the crate. Resolution misses
//! (unresolvable names, empty inference, missing stubs) are not errors —
//! they are classification outcomes and stay out of this type.

use effectscan_stubs::StubError;
use thiserror::Error;

/// Main error type for marker extraction operations
#[derive(Debug, Error)]
pub enum EffectscanError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error (wrong file extension, bad stub root)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stub storage error
    #[error(transparent)]
    Stub(#[from] StubError),
}

impl EffectscanError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        EffectscanError::Parse(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        EffectscanError::Config(msg.into())
    }
}

/// Result type alias for marker extraction operations
pub type Result<T> = std::result::Result<T, EffectscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = EffectscanError::config("invalid Python file extension: *.txt");
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_stub_error_is_transparent() {
        let err: EffectscanError = StubError::config("bad extension").into();
        assert_eq!(err.to_string(), "[config] bad extension");
    }
}
