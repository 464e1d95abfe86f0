//! Token shapes shared by the scanner, context tracker, and emitter.

/// A reserved word the minifier cares about. Contextual names such as
/// `async`, `of`, `get`, `set`, `static`, `from`, and `as` are treated as
/// plain identifiers; nothing in the whitespace rules distinguishes them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Keyword {
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
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    Let,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
}

impl Keyword {
    pub fn from_word(word: &str) -> Option<Keyword> {
        let kw = match word {
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "debugger" => Keyword::Debugger,
            "default" => Keyword::Default,
            "delete" => Keyword::Delete,
            "do" => Keyword::Do,
            "else" => Keyword::Else,
            "export" => Keyword::Export,
            "extends" => Keyword::Extends,
            "false" => Keyword::False,
            "finally" => Keyword::Finally,
            "for" => Keyword::For,
            "function" => Keyword::Function,
            "if" => Keyword::If,
            "import" => Keyword::Import,
            "in" => Keyword::In,
            "instanceof" => Keyword::Instanceof,
            "let" => Keyword::Let,
            "new" => Keyword::New,
            "null" => Keyword::Null,
            "return" => Keyword::Return,
            "super" => Keyword::Super,
            "switch" => Keyword::Switch,
            "this" => Keyword::This,
            "throw" => Keyword::Throw,
            "true" => Keyword::True,
            "try" => Keyword::Try,
            "typeof" => Keyword::Typeof,
            "var" => Keyword::Var,
            "void" => Keyword::Void,
            "while" => Keyword::While,
            "with" => Keyword::With,
            "yield" => Keyword::Yield,
            _ => return None,
        };
        Some(kw)
    }

    /// Keywords that are themselves values: a `/` after one of these is a
    /// division operator, and a newline after one may end a statement.
    pub fn is_value(self) -> bool {
        matches!(
            self,
            Keyword::This | Keyword::Super | Keyword::True | Keyword::False | Keyword::Null
        )
    }

    /// Keywords whose following `(` encloses a condition or head rather
    /// than an expression value.
    pub fn opens_control_paren(self) -> bool {
        matches!(
            self,
            Keyword::If
                | Keyword::For
                | Keyword::While
                | Keyword::Switch
                | Keyword::Catch
                | Keyword::With
        )
    }

    /// Binary operator keywords: the only keywords that never start a
    /// statement.
    pub fn is_binary(self) -> bool {
        matches!(self, Keyword::In | Keyword::Instanceof)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Ident,
    Keyword(Keyword),
    Number,
    Str,
    Regex,
    /// A complete template literal with no interpolation: `` `a` ``.
    TemplateFull,
    /// Template text from the opening backtick through `${`.
    TemplateHead,
    /// Template text from a closing `}` through the next `${`.
    TemplateMiddle,
    /// Template text from a closing `}` through the closing backtick.
    TemplateTail,
    /// Operators and delimiters, interned as static strings.
    Punct(&'static str),
    /// A character the lexical grammar has no rule for; passed through.
    Unknown,
}

#[derive(Clone, Copy, Debug)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Characters that can continue an identifier. `\` is included so that
/// `\uXXXX` escape sequences ride along verbatim.
pub fn is_ident_char(ch: char) -> bool {
    ch == '$' || ch == '_' || ch == '\\' || ch.is_alphanumeric()
}

pub fn is_ident_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch == '\\' || ch.is_alphabetic()
}

pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_covers_value_keywords() {
        for word in ["this", "super", "true", "false", "null"] {
            let kw = Keyword::from_word(word).expect("value keyword should be recognized");
            assert!(kw.is_value(), "{word} should count as a value");
        }
        assert!(Keyword::from_word("async").is_none());
        assert!(Keyword::from_word("await").is_none());
        assert!(Keyword::from_word("of").is_none());
    }

    #[test]
    fn identifier_chars_include_unicode_and_escapes() {
        assert!(is_ident_start('ŝ'));
        assert!(is_ident_char('ŝ'));
        assert!(is_ident_start('\\'));
        assert!(is_ident_char('7'));
        assert!(!is_ident_start('7'));
        assert!(!is_ident_char('-'));
    }
}
