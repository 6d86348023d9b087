//! Error types for Folio

use thiserror::Error;

use crate::contact::ContactField;

/// Main error type for Folio operations
///
/// Page behaviors never fail: a missing element just leaves the feature
/// inert. These variants cover the edges that do parse or validate input.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration JSON could not be parsed
    #[error("Config error: {0}")]
    Config(#[source] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Profile JSON could not be parsed
    #[error("Profile error: {0}")]
    Profile(#[source] serde_json::Error),

    /// Root margin is not a 1-4 value pixel shorthand
    #[error("Invalid root margin: {0}")]
    InvalidRootMargin(String),

    /// Contact form submitted with blank fields
    #[error("Incomplete contact form, missing: {}", format_fields(.0))]
    IncompleteForm(Vec<ContactField>),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::InvalidRootMargin("10em".to_string());
        assert_eq!(format!("{}", err), "Invalid root margin: 10em");
    }

    #[test]
    fn test_incomplete_form_lists_fields() {
        let err = FolioError::IncompleteForm(vec![ContactField::Email, ContactField::Message]);
        assert_eq!(
            err.to_string(),
            "Incomplete contact form, missing: email, message"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
