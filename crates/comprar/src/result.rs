//! Result and error types for Comprar.

use thiserror::Error;

/// Result type for Comprar operations
pub type ComprarResult<T> = Result<T, ComprarError>;

/// Errors that can occur in Comprar
#[derive(Debug, Error)]
pub enum ComprarError {
    /// Settings file could not be located or read
    #[error("settings file not found: {path}")]
    SettingsNotFound {
        /// Path that was tried
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Settings file exists but is not valid TOML
    #[error("failed to parse settings: {message}")]
    SettingsParse {
        /// Parser message
        message: String,
    },

    /// A settings key with no documented default is absent
    #[error("required settings key missing: {key}")]
    MissingKey {
        /// Key that was looked up
        key: String,
    },

    /// Browser kind not recognized by the driver provider
    #[error("browser not supported: {name}")]
    UnsupportedBrowser {
        /// The value that failed to resolve
        name: String,
    },

    /// An element interaction failed or timed out
    #[error("{operation} failed on {target}: {message}")]
    Interaction {
        /// Primitive that failed (click, type_text, ...)
        operation: String,
        /// Human-readable target description
        target: String,
        /// What went wrong
        message: String,
    },

    /// A multi-step business flow failed at a named checkpoint
    #[error("flow failed: {message}")]
    Flow {
        /// Checkpoint description
        message: String,
    },

    /// WebDriver protocol error
    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_browser_names_the_value() {
        let err = ComprarError::UnsupportedBrowser {
            name: "netscape".to_string(),
        };
        assert_eq!(err.to_string(), "browser not supported: netscape");
    }

    #[test]
    fn interaction_error_carries_operation_and_target() {
        let err = ComprarError::Interaction {
            operation: "click".to_string(),
            target: "login button [xpath=//button[text()='Login']]".to_string(),
            message: "not clickable within 10s".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("click"));
        assert!(msg.contains("login button"));
        assert!(msg.contains("not clickable"));
    }

    #[test]
    fn missing_key_names_the_key() {
        let err = ComprarError::MissingKey {
            key: "base.url".to_string(),
        };
        assert!(err.to_string().contains("base.url"));
    }
}
