//! Calendar service error types

use thiserror::Error;

/// Calendar service error type
#[derive(Error, Debug)]
pub enum Error {
    /// Title or text exceeds its length limit
    #[error("Validation error: {0}")]
    Validation(String),

    /// Another live event already occupies the date
    #[error("An event already exists on {0}")]
    DuplicateDate(String),

    /// No live event carries the id
    #[error("Event {0} not found")]
    NotFound(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::DuplicateDate("2024-01-01".to_string()).to_string(),
            "An event already exists on 2024-01-01"
        );
        assert_eq!(Error::NotFound(7).to_string(), "Event 7 not found");
        assert!(Error::Validation("title too long".to_string())
            .to_string()
            .contains("title too long"));
    }
}
