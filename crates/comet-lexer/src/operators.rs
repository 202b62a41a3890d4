//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! The lexer handles two-character operators by looking one character
//! ahead.
//!
//! ## Single-Character Tokens
//!
//! Emitted directly from the dispatch in `next_token`:
//!
//! | Lexeme | Token |
//! |--------|-------|
//! | `(` | `LeftParen` |
//! | `)` | `RightParen` |
//! | `{` | `LeftBrace` |
//! | `}` | `RightBrace` |
//! | `,` | `Comma` |
//! | `.` | `Dot` |
//! | `-` | `Minus` |
//! | `+` | `Plus` |
//! | `;` | `Semicolon` |
//! | `*` | `Star` |
//!
//! ## One-Character Lookahead
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `=` | `scan_equal` | `=`, `==` |
//! | `!` | `scan_bang` | `!`, `!=` |
//! | `<` | `scan_less_than` | `<`, `<=` |
//! | `>` | `scan_greater_than` | `>`, `>=` |
//!
//! ## Lookahead Logic
//!
//! Longest match wins, and the lookahead never extends past one
//! character:
//!
//! ```text
//! // For input "<="
//! scan_less_than():
//!   consume '<'
//!   peek() returns '='  -> it's '<='
//!   advance()
//!   return LessEqual
//! ```
//!
//! A consequence of the one-character window is that `===` scans as
//! `EqualEqual` followed by `Equal`; there is no strict-equality token in
//! this dialect.
//!
//! ## Characters Outside the Language
//!
//! There is no division operator, no comment syntax, and none of the
//! bitwise or ternary punctuation. A character that cannot start any
//! token (`/`, `%`, `?`, `@`, ...) is dropped with an
//! `UnrecognizedCharacter` diagnostic and scanning resumes at the next
//! character.

// This module serves as documentation. The actual implementation is in scanner.rs.
