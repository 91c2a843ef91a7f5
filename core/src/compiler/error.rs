//! Bytecode compilation errors.

use crate::api::{Diagnostic, RelatedInfo, Severity};
use crate::syntax::Span;
use crate::{String, ToString, Vec, vec};

/// The two ways a source text can fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileErrorKind {
    /// A `[` has no matching `]` by the end of the source.
    UnmatchedOpen,
    /// A `]` appears while no `[` is pending.
    UnmatchedClose,
}

/// Compilation error with the location of the offending bracket.
///
/// For [`CompileErrorKind::UnmatchedOpen`] the span is the innermost
/// unclosed `[`; any other still-open brackets are listed in `unclosed`,
/// outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub span: Span,
    pub unclosed: Vec<Span>,
}

impl CompileError {
    pub fn unmatched_close(span: Span) -> Self {
        Self {
            kind: CompileErrorKind::UnmatchedClose,
            span,
            unclosed: Vec::new(),
        }
    }

    pub fn unmatched_open(span: Span, unclosed: Vec<Span>) -> Self {
        Self {
            kind: CompileErrorKind::UnmatchedOpen,
            span,
            unclosed,
        }
    }

    /// Convert to a Diagnostic for API boundary.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match self.kind {
            CompileErrorKind::UnmatchedClose => (
                "Unmatched ']' with no open loop",
                "C001",
                "Remove this ']' or add a '[' before it",
            ),
            CompileErrorKind::UnmatchedOpen => (
                "Unclosed loop '['",
                "C002",
                "Add the missing ']' to close this loop",
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message: String::from(message),
            span: self.span.clone(),
            related: self
                .unclosed
                .iter()
                .map(|span| RelatedInfo {
                    span: span.clone(),
                    message: "this loop is also never closed".to_string(),
                })
                .collect(),
            help: vec![String::from(help)],
            code: Some(String::from(code)),
        }
    }
}

impl core::fmt::Display for CompileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            CompileErrorKind::UnmatchedClose => {
                write!(f, "`]` found without corresponding `[` at {}", self.span)
            }
            CompileErrorKind::UnmatchedOpen => {
                write!(f, "`[` found without corresponding `]` at {}", self.span)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompileError {}
