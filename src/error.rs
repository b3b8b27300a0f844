//! Error and diagnostic types for the gallery transform.

use markdown::unist::Position;
use thiserror::Error;

/// Source location information for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional file identifier supplied by the host pipeline.
    pub file: Option<String>,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Derive a location from an mdast position, defaulting to 1:1 when the
    /// node carries none.
    pub fn from_position(position: Option<&Position>) -> Self {
        match position {
            Some(position) => Self::new(position.start.line, position.start.column),
            None => Self::new(1, 1),
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// Errors that can occur while rewriting gallery blocks.
///
/// Conformance to the gallery micro-syntax is a precondition: a violation
/// aborts the pass for the whole document, with no partial recovery.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The document violated the expected gallery structure.
    #[error("Structural mismatch at {location}: expected {expected}")]
    StructuralMismatch {
        /// The shape the transform expected to find.
        expected: String,
        /// Source location of the offending node.
        location: SourceLocation,
    },
}

impl GalleryError {
    /// Create a structural mismatch error located at the given node position.
    pub fn structural(expected: impl Into<String>, position: Option<&Position>) -> Self {
        Self::StructuralMismatch {
            expected: expected.into(),
            location: SourceLocation::from_position(position),
        }
    }

    /// Attach a file identifier to the error's location.
    pub fn with_file(mut self, file: &str) -> Self {
        match &mut self {
            Self::StructuralMismatch { location, .. } => location.file = Some(file.to_string()),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_file() {
        let err = GalleryError::structural("a nested row list", None);
        assert_eq!(
            err.to_string(),
            "Structural mismatch at 1:1: expected a nested row list"
        );
    }

    #[test]
    fn display_with_file() {
        let err = GalleryError::structural("a leading paragraph", None).with_file("photos.md");
        assert_eq!(
            err.to_string(),
            "Structural mismatch at photos.md:1:1: expected a leading paragraph"
        );
    }
}
