//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> Number(42.0)
//! 9         -> Number(9.0)
//! 213434.24 -> Number(213434.24)
//! 007       -> Number(7.0)   (leading zeros are accepted)
//! 1e10      -> Number(1e10)
//! 1.5e-3    -> Number(0.0015)
//! ```
//!
//! The grammar is `digits [ '.' digits ] [ ('e'|'E') ['+'|'-'] digits ]`,
//! where digits are `0-9`. The decimal point is consumed only when a digit
//! follows it, so `1.` is the number `1` followed by a `Dot` token, and
//! `.5` is a `Dot` token followed by the number `5`. An exponent marker
//! with no digits after it (`3e`, `3e+`) produces a
//! `MalformedNumberLiteral` diagnostic, and the token falls back to the
//! value of the digits before the marker.
//!
//! Values are decoded with the standard double parser; very large
//! literals lose precision the way doubles do. There are no hex, octal,
//! binary, or BigInt forms in this dialect, and no sign is ever part of
//! the literal: `-5` is a `Minus` token followed by the number `5`.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ### Quote Styles
//!
//! ```text
//! 'single'  -> Single quotes
//! "double"  -> Double quotes
//! ```
//!
//! A string closes only on the same quote character that opened it, so
//! each style can embed the other freely. The token value carries the
//! decoded text with the quotes stripped; the token's span still covers
//! the full lexeme, quotes included.
//!
//! ### Escape Sequences
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\n` | Newline |
//! | `\r` | Carriage return |
//! | `\t` | Tab |
//! | `\\` | Backslash |
//! | `\'` | Single quote |
//! | `\"` | Double quote |
//! | `\0` | Null |
//!
//! Any other escaped character is taken verbatim. Raw newlines inside a
//! string are allowed and advance the line counter; the token keeps the
//! line on which it began.
//!
//! If the input ends before the closing quote, the scanner reports an
//! `UnterminatedString` diagnostic and still emits a `String` token
//! holding whatever it decoded, so downstream consumers always see a
//! complete stream.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! ### Identifier Rules
//!
//! - Start: `_`, `$`, Unicode letters
//! - Continue: Start chars plus `0-9`, Unicode digits
//!
//! ### Keyword Detection
//!
//! The scanner takes the longest identifier run first and only then looks
//! it up in the reserved-word table, so a keyword prefix never splits a
//! longer word:
//!
//! ```text
//! "for"     -> TokenKind::For
//! "fortune" -> TokenKind::Identifier("fortune")
//! "For"     -> TokenKind::Identifier("For")
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.
