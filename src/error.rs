//! Error types and handling for the Packwise application

use thiserror::Error;

/// Main error type for the Packwise application
#[derive(Error, Debug)]
pub enum PackwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Trip form validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Malformed or inconsistent catalog data
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// View transition not allowed from the current view
    #[error("Cannot {action} from the {view} view")]
    InvalidTransition {
        action: &'static str,
        view: &'static str,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl PackwiseError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether the error was caused by user input rather than the system
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, PackwiseError::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PackwiseError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PackwiseError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PackwiseError::Catalog { .. } => {
                "The packing catalog could not be loaded. Please check the catalog file."
                    .to_string()
            }
            PackwiseError::InvalidTransition { .. } => self.to_string(),
            PackwiseError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            PackwiseError::Json { .. } => "Malformed JSON data.".to_string(),
            PackwiseError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = PackwiseError::config("bad port");
        assert!(matches!(config_err, PackwiseError::Config { .. }));

        let catalog_err = PackwiseError::catalog("duplicate item");
        assert!(matches!(catalog_err, PackwiseError::Catalog { .. }));

        let validation_err = PackwiseError::validation("destination is required");
        assert!(matches!(validation_err, PackwiseError::Validation { .. }));
        assert!(validation_err.is_user_error());
        assert!(!catalog_err.is_user_error());
    }

    #[test]
    fn test_user_messages() {
        let config_err = PackwiseError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = PackwiseError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let transition_err = PackwiseError::InvalidTransition {
            action: "go back",
            view: "form",
        };
        assert_eq!(transition_err.user_message(), "Cannot go back from the form view");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PackwiseError = io_err.into();
        assert!(matches!(err, PackwiseError::Io { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PackwiseError = json_err.into();
        assert!(matches!(err, PackwiseError::Json { .. }));
    }
}
