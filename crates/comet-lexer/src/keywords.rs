//! The reserved-word table.
//!
//! The scanner classifies identifier runs by looking them up here. The
//! table is built once, on first use, and is never mutated afterwards, so
//! concurrent scanners can share it without synchronization.
//!
//! Reserved words in the language:
//!
//! ```text
//! break     case      catch     class     const     continue
//! debugger  default   delete    do        else      export
//! extends   finally   for       function  if        import
//! in        instanceof new      return    super     switch
//! this      throw     try       typeof    var       void
//! while     with      yield
//! ```

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("break", TokenKind::Break),
        ("case", TokenKind::Case),
        ("catch", TokenKind::Catch),
        ("class", TokenKind::Class),
        ("const", TokenKind::Const),
        ("continue", TokenKind::Continue),
        ("debugger", TokenKind::Debugger),
        ("default", TokenKind::Default),
        ("delete", TokenKind::Delete),
        ("do", TokenKind::Do),
        ("else", TokenKind::Else),
        ("export", TokenKind::Export),
        ("extends", TokenKind::Extends),
        ("finally", TokenKind::Finally),
        ("for", TokenKind::For),
        ("function", TokenKind::Function),
        ("if", TokenKind::If),
        ("import", TokenKind::Import),
        ("in", TokenKind::In),
        ("instanceof", TokenKind::Instanceof),
        ("new", TokenKind::New),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("switch", TokenKind::Switch),
        ("this", TokenKind::This),
        ("throw", TokenKind::Throw),
        ("try", TokenKind::Try),
        ("typeof", TokenKind::Typeof),
        ("var", TokenKind::Var),
        ("void", TokenKind::Void),
        ("while", TokenKind::While),
        ("with", TokenKind::With),
        ("yield", TokenKind::Yield),
    ])
});

/// Returns the keyword kind for an identifier run, if it is a reserved word.
///
/// Lookup is case-sensitive: `For` and `FOR` are plain identifiers.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(KEYWORDS.len(), 33);
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_kind("for"), Some(TokenKind::For));
        assert_eq!(keyword_kind("var"), Some(TokenKind::Var));
        assert_eq!(keyword_kind("function"), Some(TokenKind::Function));
        assert_eq!(keyword_kind("instanceof"), Some(TokenKind::Instanceof));
        assert_eq!(keyword_kind("debugger"), Some(TokenKind::Debugger));
        assert_eq!(keyword_kind("yield"), Some(TokenKind::Yield));
    }

    #[test]
    fn test_every_keyword_is_a_keyword_kind() {
        for kind in KEYWORDS.values() {
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_non_keywords() {
        assert_eq!(keyword_kind("fortune"), None);
        assert_eq!(keyword_kind("pesho"), None);
        assert_eq!(keyword_kind("lets"), None);
        assert_eq!(keyword_kind(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(keyword_kind("For"), None);
        assert_eq!(keyword_kind("VAR"), None);
        assert_eq!(keyword_kind("Function"), None);
    }
}
