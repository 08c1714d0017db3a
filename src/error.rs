//! Error types for the sidebar collapser

use thiserror::Error;

/// Main error type for navigation operations
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Navigation item {0} does not exist")]
    ItemOutOfRange(usize),

    #[error("Navigation item {0} is not a section header")]
    NotASectionHeader(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Browser global '{0}' is not available")]
    MissingGlobal(&'static str),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type for navigation operations
pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NavError::NotASectionHeader(3).to_string(),
            "Navigation item 3 is not a section header"
        );
        assert_eq!(
            NavError::MissingGlobal("document").to_string(),
            "Browser global 'document' is not available"
        );
        assert_eq!(NavError::Dom("busy".into()).to_string(), "DOM error: busy");
    }

    #[test]
    fn test_json_error_converts() {
        let err: NavError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(err, NavError::Serialization(_)));
    }
}
