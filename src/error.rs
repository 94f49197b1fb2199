//! Error types for the dimension renderer and entity database

use thiserror::Error;

/// Main error type for drawing database and rendering operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// A block reference names a block that is not defined in the drawing
    #[error("Undefined block: \"{0}\"")]
    UndefinedBlock(String),

    /// A value is outside its allowed domain (unknown type code, bad template)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Degenerate construction geometry (parallel rays, zero-length vectors)
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Feature exists in the format but has no renderer
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Object not found in the entity database
    #[error("Object not found: handle {0:#X}")]
    ObjectNotFound(u64),

    /// Handle string could not be parsed
    #[error("Invalid handle: {0:?}")]
    InvalidHandle(String),

    /// Table entry name already in use
    #[error("Duplicate table entry: {0}")]
    DuplicateEntry(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UndefinedBlock("ARROW1".to_string());
        assert_eq!(err.to_string(), "Undefined block: \"ARROW1\"");
    }

    #[test]
    fn test_object_not_found_hex() {
        let err = DxfError::ObjectNotFound(0x1F);
        assert!(err.to_string().contains("0x1F"));
    }

    #[test]
    fn test_string_conversion() {
        let err: DxfError = "boom".into();
        assert!(matches!(err, DxfError::Custom(ref s) if s == "boom"));
    }
}
