// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # comet-lexer
//!
//! Lexical analysis for the Comet JavaScript engine.
//!
//! ## Overview
//!
//! This crate turns raw source text into the token stream the parser
//! consumes:
//! - `Scanner` walks a source buffer one token at a time
//! - `tokenize` drives a scanner over a whole buffer at once
//! - malformed input is reported through [`Diagnostic`]s while scanning
//!   carries on, so one bad character never hides the rest of the program
//!
//! Every scan ends with exactly one [`TokenKind::Eof`] token, and the
//! token stream is never empty.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind`, and `Span` definitions
//! - `keywords.rs` - The reserved-word table
//! - `diagnostics.rs` - `Diagnostic` and `DiagnosticKind` definitions
//!
//! ## Documentation Submodules
//!
//! - `operators` - Punctuation and one-character-lookahead operators
//! - `literals` - Number, string, and identifier literals
//!
//! ## Quick Start
//!
//! ```rust
//! use comet_lexer::{tokenize, TokenKind};
//!
//! let (tokens, diagnostics) = tokenize("var answer = 42;");
//!
//! assert!(diagnostics.is_empty());
//! assert!(matches!(tokens[0].kind, TokenKind::Var));
//! assert!(matches!(tokens.last().unwrap().kind, TokenKind::Eof));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod diagnostics;
mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

// Re-exports for convenience
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Tokenizes an entire source buffer.
///
/// Scans to the end of the input and returns every token, ending with
/// exactly one [`TokenKind::Eof`], together with the diagnostics recorded
/// along the way. Tokenization never fails: malformed input produces
/// best-effort tokens plus diagnostics, and the caller decides whether to
/// keep going.
///
/// # Arguments
///
/// * `source` - The source text to tokenize
///
/// # Examples
///
/// ```rust
/// use comet_lexer::{tokenize, TokenKind};
///
/// let (tokens, diagnostics) = tokenize("pesho <= 10");
///
/// assert_eq!(tokens.len(), 4); // identifier, <=, number, end of input
/// assert!(diagnostics.is_empty());
/// ```
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    tracing::trace!("tokenizing {} bytes", source.len());

    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token();
        let done = matches!(token.kind, TokenKind::Eof);
        tokens.push(token);
        if done {
            break;
        }
    }

    let diagnostics = scanner.into_diagnostics();
    tracing::debug!(
        "tokenized {} tokens with {} diagnostics",
        tokens.len(),
        diagnostics.len()
    );

    (tokens, diagnostics)
}
