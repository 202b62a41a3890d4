//! Lexical diagnostics.
//!
//! Scanning never aborts on malformed input. The scanner records a
//! [`Diagnostic`] for each problem it finds, emits a best-effort token or
//! drops the offending character, and keeps going, so a single mistake
//! cannot hide errors later in the buffer. Callers receive the full list
//! alongside the token stream and decide how to surface it.

use crate::token::Span;

/// The kinds of problems the scanner can report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagnosticKind {
    /// A string literal reached end of input before its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that cannot start any token.
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(char),
    /// A numeric literal that does not follow the number grammar.
    #[error("malformed number literal '{0}'")]
    MalformedNumberLiteral(String),
}

/// A problem found during scanning, with its location.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// The 1-based source line on which the problem begins
    pub line: u32,
    /// The offending range in the source
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(kind: DiagnosticKind, line: u32, span: Span) -> Self {
        Self { kind, line, span }
    }
}
