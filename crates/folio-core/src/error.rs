//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// No overlay surface with this key exists in the document
    #[error("Surface not found: {0}")]
    SurfaceNotFound(String),

    /// No content record with this key exists in the registry
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Content file failed validation
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Plot generation call failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// Configuration value is unusable
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error (config or content file)
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::RecordNotFound("unknown-key".to_string());
        assert_eq!(format!("{}", err), "Record not found: unknown-key");

        let err = FolioError::SurfaceNotFound("nope-modal".to_string());
        assert_eq!(format!("{}", err), "Surface not found: nope-modal");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: FolioError = toml_err.into();
        assert!(matches!(err, FolioError::Toml(_)));
    }
}
