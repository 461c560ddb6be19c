//! Error kinds for nantgraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to decide how to react; the message and context
/// only explain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required input was empty or otherwise unusable
    InvalidArgument,

    /// A builder was asked to work over zero projects
    EmptyInput,

    /// The external renderer executable could not be located
    RendererNotFound,

    /// The external renderer could not be started or talked to
    RendererFailed,

    /// The external renderer did not finish in time
    Timeout,

    /// A build file could not be read or parsed
    ProjectLoadFailed,

    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Catch-all for conditions nothing else describes
    Unexpected,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether running the same operation again may succeed without changes
    /// to the inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Timeout | ErrorKind::IoFailed)
    }
}
