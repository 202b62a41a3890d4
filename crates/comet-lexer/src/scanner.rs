//! The scanner that produces tokens from source text.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::keywords::keyword_kind;
use crate::token::{Span, Token, TokenKind};

/// A scanner that tokenizes source code.
///
/// A scanner borrows its source buffer and walks it one token at a time.
/// Problems found along the way accumulate inside the scanner and are
/// retrieved with [`diagnostics`](Scanner::diagnostics) or
/// [`into_diagnostics`](Scanner::into_diagnostics) once scanning is done.
///
/// ```rust
/// use comet_lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("pesho = 10");
///
/// loop {
///     let token = scanner.next_token();
///     if matches!(token.kind, TokenKind::Eof) {
///         break;
///     }
///     println!("{:?}", token.kind);
/// }
/// ```
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted this returns an end-of-input token, and
    /// keeps returning it on every further call.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start = self.current_pos;
            let line = self.line;

            let Some((_pos, ch)) = self.advance() else {
                return Token::new(TokenKind::Eof, Span::new(start, start), line);
            };

            let kind = match ch {
                // Single-character tokens
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '{' => TokenKind::LeftBrace,
                '}' => TokenKind::RightBrace,
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,
                '-' => TokenKind::Minus,
                '+' => TokenKind::Plus,
                ';' => TokenKind::Semicolon,
                '*' => TokenKind::Star,

                // One-character lookahead
                '=' => self.scan_equal(),
                '!' => self.scan_bang(),
                '<' => self.scan_less_than(),
                '>' => self.scan_greater_than(),

                // String literals
                '"' | '\'' => self.scan_string(ch, start, line),

                // Numbers
                '0'..='9' => self.scan_number(ch, start),

                // Identifiers and keywords
                _ if is_id_start(ch) => self.scan_identifier(ch),

                _ => {
                    self.report(
                        DiagnosticKind::UnrecognizedCharacter(ch),
                        line,
                        Span::new(start, self.current_pos),
                    );
                    continue;
                }
            };

            return Token::new(kind, Span::new(start, self.current_pos), line);
        }
    }

    /// The problems found so far, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the scanner and returns every problem it found.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.current_pos = pos + ch.len_utf8();
        }
        result
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    fn report(&mut self, kind: DiagnosticKind, line: u32, span: Span) {
        tracing::debug!("line {}: {}", line, kind);
        self.diagnostics.push(Diagnostic::new(kind, line, span));
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                _ => break,
            }
        }
    }

    fn scan_equal(&mut self) -> TokenKind {
        if self.peek() == Some('=') {
            self.advance();
            TokenKind::EqualEqual
        } else {
            TokenKind::Equal
        }
    }

    fn scan_bang(&mut self) -> TokenKind {
        if self.peek() == Some('=') {
            self.advance();
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        }
    }

    fn scan_less_than(&mut self) -> TokenKind {
        if self.peek() == Some('=') {
            self.advance();
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        }
    }

    fn scan_greater_than(&mut self) -> TokenKind {
        if self.peek() == Some('=') {
            self.advance();
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }

    fn scan_string(&mut self, quote: char, start: usize, line: u32) -> TokenKind {
        let mut value = String::new();

        loop {
            match self.advance() {
                None => {
                    self.report(
                        DiagnosticKind::UnterminatedString,
                        line,
                        Span::new(start, self.current_pos),
                    );
                    break;
                }
                Some((_, ch)) if ch == quote => break,
                Some((_, '\n')) => {
                    // Raw newlines are allowed inside strings and still
                    // count for line numbering
                    self.line += 1;
                    value.push('\n');
                }
                Some((_, '\\')) => {
                    // Handle escape sequences
                    if let Some((_, escaped)) = self.advance() {
                        match escaped {
                            'n' => value.push('\n'),
                            'r' => value.push('\r'),
                            't' => value.push('\t'),
                            '\\' => value.push('\\'),
                            '\'' => value.push('\''),
                            '"' => value.push('"'),
                            '0' => value.push('\0'),
                            '\n' => {
                                self.line += 1;
                                value.push('\n');
                            }
                            _ => value.push(escaped),
                        }
                    }
                }
                Some((_, ch)) => value.push(ch),
            }
        }

        TokenKind::String(value)
    }

    fn scan_number(&mut self, first: char, start: usize) -> TokenKind {
        let mut value = String::from(first);

        // Integer part
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Fractional part, only when a digit follows the point: "1." is
        // the number 1 followed by a Dot token
        if self.peek() == Some('.') && self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
            value.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    value.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // Exponent part
        if matches!(self.peek(), Some('e' | 'E')) {
            let mantissa_len = value.len();
            value.push('e');
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                if let Some((_, sign)) = self.advance() {
                    value.push(sign);
                }
            }
            let mut has_exponent_digits = false;
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    value.push(ch);
                    self.advance();
                    has_exponent_digits = true;
                } else {
                    break;
                }
            }
            if !has_exponent_digits {
                // Dangling marker like "3e" or "3e+": report it and fall
                // back to the digits before the marker
                let span = Span::new(start, self.current_pos);
                self.report(
                    DiagnosticKind::MalformedNumberLiteral(span.slice(self.source).to_string()),
                    self.line,
                    span,
                );
                value.truncate(mantissa_len);
            }
        }

        match value.parse::<f64>() {
            Ok(n) => TokenKind::Number(n),
            Err(_) => {
                let span = Span::new(start, self.current_pos);
                self.report(
                    DiagnosticKind::MalformedNumberLiteral(span.slice(self.source).to_string()),
                    self.line,
                    span,
                );
                TokenKind::Number(f64::NAN)
            }
        }
    }

    fn scan_identifier(&mut self, first: char) -> TokenKind {
        let mut name = String::from(first);

        while let Some(ch) = self.peek() {
            if is_id_continue(ch) {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Check for keywords
        keyword_kind(&name).unwrap_or_else(|| TokenKind::Identifier(name))
    }
}

/// Checks if a character can start an identifier.
fn is_id_start(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_start(ch)
}

/// Checks if a character can continue an identifier.
fn is_id_continue(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_continue(ch)
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
