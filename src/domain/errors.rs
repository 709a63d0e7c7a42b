//! Structured error types for symmap
//!
//! Using thiserror for automatic Display implementation and error chaining.
//!
//! These errors never cross the store boundary to a resolving caller; they
//! surface in logs when a load degrades, and as `Result`s from the helpers
//! that open the artifacts.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Descriptor file not found: {}", .0.display())]
    DescriptorMissing(PathBuf),

    #[error("Binary image not found: {}", .0.display())]
    ImageMissing(PathBuf),

    #[error("Failed to open descriptor {}: {}", .path.display(), .source)]
    DescriptorOpenFailed { path: PathBuf, source: std::io::Error },

    #[error("Failed to open binary image {}: {}", .path.display(), .source)]
    ImageOpenFailed { path: PathBuf, source: std::io::Error },

    #[error("Cannot locate the executable directory for {0}")]
    ExeDirUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let err = MapError::DescriptorMissing(PathBuf::from("/tmp/mapper.txt"));
        assert_eq!(err.to_string(), "Descriptor file not found: /tmp/mapper.txt");
    }

    #[test]
    fn test_open_failed_carries_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MapError::ImageOpenFailed { path: PathBuf::from("player.dll"), source };
        assert!(err.to_string().contains("player.dll"));
        assert!(err.to_string().contains("denied"));
    }
}
