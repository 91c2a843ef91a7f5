//! Public error types for the octet API.
//!
//! This module defines the stable error types exposed to library users.
//! Internal errors are converted to these public types at API boundaries.

use crate::syntax::Span;
use crate::{String, Vec};

use core::fmt;

/// Public error type for all octet operations.
///
/// Running a program cannot fail, so compilation is the only source of
/// errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// The source text is not a well-bracketed program.
    ///
    /// Carries the source so diagnostics can be rendered without it being
    /// passed around separately.
    Compilation {
        source: String,
        diagnostics: Vec<Diagnostic>,
    },
}

impl Error {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            Error::Compilation { source, .. } => source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Compilation { diagnostics, .. } => {
                let error_count = diagnostics
                    .iter()
                    .filter(|d| d.severity == Severity::Error)
                    .count();
                write!(f, "Compilation failed with {} error(s)", error_count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "C001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
///
/// The compiler itself only reports [`Severity::Error`]; the other levels are
/// for callers that attach their own lints to a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation cannot succeed.
    Error,
    /// Warning - suspicious code that might be wrong.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g., "opened here").
#[derive(Debug, Clone)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl Error {
    pub(crate) fn from_compile_error(source: &str, err: crate::compiler::CompileError) -> Self {
        Error::Compilation {
            source: String::from(source),
            diagnostics: Vec::from([err.to_diagnostic()]),
        }
    }
}
