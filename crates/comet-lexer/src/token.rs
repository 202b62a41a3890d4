//! Token definitions for the lexer.

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the exact source text this span covers, quotes and all.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The span in the source code
    pub span: Span,
    /// The 1-based source line on which the token begins
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Self { kind, span, line }
    }
}

/// The different kinds of tokens in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Numeric literal (always a double)
    Number(f64),
    /// String literal, with escapes decoded and the quotes stripped
    String(String),

    // Identifiers
    /// Identifier
    Identifier(String),

    // Keywords
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Export,
    Extends,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,

    // Punctuation
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// -
    Minus,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// *
    Star,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// !
    Bang,
    /// !=
    BangEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Break
                | TokenKind::Case
                | TokenKind::Catch
                | TokenKind::Class
                | TokenKind::Const
                | TokenKind::Continue
                | TokenKind::Debugger
                | TokenKind::Default
                | TokenKind::Delete
                | TokenKind::Do
                | TokenKind::Else
                | TokenKind::Export
                | TokenKind::Extends
                | TokenKind::Finally
                | TokenKind::For
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::Import
                | TokenKind::In
                | TokenKind::Instanceof
                | TokenKind::New
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::Switch
                | TokenKind::This
                | TokenKind::Throw
                | TokenKind::Try
                | TokenKind::Typeof
                | TokenKind::Var
                | TokenKind::Void
                | TokenKind::While
                | TokenKind::With
                | TokenKind::Yield
        )
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Number(_) | TokenKind::String(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(0, 10);
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 10);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        let empty = Span::new(5, 5);
        let non_empty = Span::new(5, 10);

        assert!(empty.is_empty());
        assert!(!non_empty.is_empty());
    }

    #[test]
    fn test_span_slice() {
        let source = "var pesho = 10";
        assert_eq!(Span::new(0, 3).slice(source), "var");
        assert_eq!(Span::new(4, 9).slice(source), "pesho");
        assert_eq!(Span::new(14, 14).slice(source), "");
    }

    #[test]
    fn test_span_equality() {
        let span1 = Span::new(0, 10);
        let span2 = Span::new(0, 10);
        let span3 = Span::new(0, 5);

        assert_eq!(span1, span2);
        assert_ne!(span1, span3);
    }

    #[test]
    fn test_token_new() {
        let token = Token::new(TokenKind::Number(42.0), Span::new(0, 2), 1);
        assert_eq!(token.kind, TokenKind::Number(42.0));
        assert_eq!(token.span, Span::new(0, 2));
        assert_eq!(token.line, 1);
    }

    #[test]
    fn test_token_equality() {
        let t1 = Token::new(TokenKind::Plus, Span::new(0, 1), 1);
        let t2 = Token::new(TokenKind::Plus, Span::new(0, 1), 1);
        let t3 = Token::new(TokenKind::Minus, Span::new(0, 1), 1);
        let t4 = Token::new(TokenKind::Plus, Span::new(0, 1), 2);

        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
        assert_ne!(t1, t4);
    }

    #[test]
    fn test_token_clone() {
        let token = Token::new(TokenKind::Identifier("x".to_string()), Span::new(0, 1), 1);
        let cloned = token.clone();
        assert_eq!(token, cloned);
    }

    #[test]
    fn test_is_keyword_true() {
        assert!(TokenKind::Break.is_keyword());
        assert!(TokenKind::Case.is_keyword());
        assert!(TokenKind::Catch.is_keyword());
        assert!(TokenKind::Class.is_keyword());
        assert!(TokenKind::Const.is_keyword());
        assert!(TokenKind::Continue.is_keyword());
        assert!(TokenKind::Debugger.is_keyword());
        assert!(TokenKind::Default.is_keyword());
        assert!(TokenKind::Delete.is_keyword());
        assert!(TokenKind::Do.is_keyword());
        assert!(TokenKind::Else.is_keyword());
        assert!(TokenKind::Export.is_keyword());
        assert!(TokenKind::Extends.is_keyword());
        assert!(TokenKind::Finally.is_keyword());
        assert!(TokenKind::For.is_keyword());
        assert!(TokenKind::Function.is_keyword());
        assert!(TokenKind::If.is_keyword());
        assert!(TokenKind::Import.is_keyword());
        assert!(TokenKind::In.is_keyword());
        assert!(TokenKind::Instanceof.is_keyword());
        assert!(TokenKind::New.is_keyword());
        assert!(TokenKind::Return.is_keyword());
        assert!(TokenKind::Super.is_keyword());
        assert!(TokenKind::Switch.is_keyword());
        assert!(TokenKind::This.is_keyword());
        assert!(TokenKind::Throw.is_keyword());
        assert!(TokenKind::Try.is_keyword());
        assert!(TokenKind::Typeof.is_keyword());
        assert!(TokenKind::Var.is_keyword());
        assert!(TokenKind::Void.is_keyword());
        assert!(TokenKind::While.is_keyword());
        assert!(TokenKind::With.is_keyword());
        assert!(TokenKind::Yield.is_keyword());
    }

    #[test]
    fn test_is_keyword_false() {
        assert!(!TokenKind::Plus.is_keyword());
        assert!(!TokenKind::Number(42.0).is_keyword());
        assert!(!TokenKind::String("hello".to_string()).is_keyword());
        assert!(!TokenKind::Identifier("x".to_string()).is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_is_literal_true() {
        assert!(TokenKind::Number(42.0).is_literal());
        assert!(TokenKind::String("hello".to_string()).is_literal());
    }

    #[test]
    fn test_is_literal_false() {
        assert!(!TokenKind::Plus.is_literal());
        assert!(!TokenKind::If.is_literal());
        assert!(!TokenKind::Identifier("x".to_string()).is_literal());
        assert!(!TokenKind::LeftBrace.is_literal());
        assert!(!TokenKind::Eof.is_literal());
    }

    #[test]
    fn test_all_punctuation_tokens() {
        // Punctuation tokens are neither keywords nor literals
        let tokens = vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ];

        for token in tokens {
            assert!(!token.is_keyword());
            assert!(!token.is_literal());
        }
    }

    #[test]
    fn test_special_tokens() {
        assert!(!TokenKind::Eof.is_keyword());
        assert!(!TokenKind::Eof.is_literal());
    }

    #[test]
    fn test_token_kind_debug() {
        let kind = TokenKind::Number(42.0);
        let debug = format!("{:?}", kind);
        assert!(debug.contains("Number"));
        assert!(debug.contains("42"));
    }
}
