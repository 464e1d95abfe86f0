//! The lexer: significant tokens out, whitespace and comments gone.
//!
//! Scanning is context-sensitive, so [`Lexer::next`] takes the current
//! [`Context`]: it decides whether `/` starts a regex and whether `}`
//! resumes template text. Each returned token is paired with a [`Gap`]
//! saying whether a line terminator was crossed since the previous token.

use crate::context::Context;
use crate::error::MinifyError;
use crate::token::{Keyword, Token, TokenKind, is_ident_char, is_ident_start, is_line_terminator};

/// The insignificant stretch before a token.
#[derive(Clone, Copy, Debug)]
pub struct Gap {
    pub newline: bool,
}

/// Longest match wins; within a length group order is irrelevant.
const PUNCTUATORS: &[&str] = &[
    ">>>=",
    "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=",
    "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**", "<<", ">>",
    "{", "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-", "*", "/",
    "%", "&", "|", "^", "!", "~", "?", ":", "=", ".",
];

enum TemplateFrom {
    Backtick,
    InterpClose,
}

pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Nothing significant has been scanned on the current input line.
    /// Gates the `-->` line comment form.
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            at_line_start: true,
        }
    }

    /// The next significant token, or `None` at end of input.
    pub fn next(&mut self, ctx: &Context) -> Result<Option<(Gap, Token<'a>)>, MinifyError> {
        let newline = self.skip_insignificant();
        if self.pos >= self.bytes.len() {
            return Ok(None);
        }
        let tok = self.scan_token(ctx)?;
        self.at_line_start = false;
        Ok(Some((Gap { newline }, tok)))
    }

    fn peek_char(&self, pos: usize) -> char {
        self.src[pos..].chars().next().unwrap_or('\u{0}')
    }

    fn step_char(&mut self) {
        self.pos += self.peek_char(self.pos).len_utf8();
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume whitespace and comments; report whether a line terminator
    /// was crossed.
    fn skip_insignificant(&mut self) -> bool {
        let mut newline = false;
        loop {
            while self.pos < self.bytes.len() {
                match self.bytes[self.pos] {
                    b' ' | b'\t' | 0x0b | 0x0c => self.pos += 1,
                    b'\n' | b'\r' => {
                        newline = true;
                        self.at_line_start = true;
                        self.pos += 1;
                    }
                    b if b < 0x80 => break,
                    _ => match self.peek_char(self.pos) {
                        ch @ ('\u{a0}' | '\u{feff}') => self.pos += ch.len_utf8(),
                        ch @ ('\u{2028}' | '\u{2029}') => {
                            newline = true;
                            self.at_line_start = true;
                            self.pos += ch.len_utf8();
                        }
                        _ => break,
                    },
                }
            }
            let rest = self.rest();
            if rest.starts_with("//") || rest.starts_with("<!--") {
                self.skip_to_line_end();
            } else if rest.starts_with("-->") && self.at_line_start {
                self.skip_to_line_end();
            } else if rest.starts_with("/*") {
                let body_start = self.pos + 2;
                match self.src[body_start..].find("*/") {
                    Some(offset) => {
                        let end = body_start + offset + 2;
                        if self.src[self.pos..end].chars().any(is_line_terminator) {
                            newline = true;
                            self.at_line_start = true;
                        }
                        self.pos = end;
                    }
                    // Unterminated: the rest of the input is comment.
                    None => self.pos = self.bytes.len(),
                }
            } else {
                return newline;
            }
        }
    }

    fn skip_to_line_end(&mut self) {
        while self.pos < self.bytes.len() {
            if is_line_terminator(self.peek_char(self.pos)) {
                return;
            }
            self.step_char();
        }
    }

    fn scan_token(&mut self, ctx: &Context) -> Result<Token<'a>, MinifyError> {
        match self.bytes[self.pos] {
            b'\'' | b'"' => Ok(self.scan_string()),
            b'`' => Ok(self.scan_template(TemplateFrom::Backtick)),
            b'}' if ctx.in_template_interp() => Ok(self.scan_template(TemplateFrom::InterpClose)),
            b'/' if ctx.regex_allowed() => Ok(self.scan_regex()),
            b'0'..=b'9' => self.scan_number(),
            b'.' if self
                .bytes
                .get(self.pos + 1)
                .is_some_and(u8::is_ascii_digit) =>
            {
                self.scan_number()
            }
            _ if is_ident_start(self.peek_char(self.pos)) => Ok(self.scan_word()),
            _ => Ok(self.scan_punct()),
        }
    }

    fn scan_string(&mut self) -> Token<'a> {
        let start = self.pos;
        let quote = self.bytes[self.pos];
        self.pos += 1;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\\' => {
                    self.pos += 1;
                    if self.pos < self.bytes.len() {
                        self.step_char();
                    }
                }
                b if b == quote => {
                    self.pos += 1;
                    break;
                }
                _ => self.step_char(),
            }
        }
        // Running off the end leaves the string unterminated; it is passed
        // through untouched.
        Token {
            text: &self.src[start..self.pos],
            kind: TokenKind::Str,
        }
    }

    /// Template text is scanned verbatim: no escape handling, so `\` does
    /// not protect a backtick. Interpolations are tracked by the context
    /// stack, not here.
    fn scan_template(&mut self, from: TemplateFrom) -> Token<'a> {
        let start = self.pos;
        self.pos += 1;
        let mut closed = false;
        let mut interp = false;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'`' => {
                    self.pos += 1;
                    closed = true;
                    break;
                }
                b'$' if self.bytes.get(self.pos + 1) == Some(&b'{') => {
                    self.pos += 2;
                    interp = true;
                    break;
                }
                _ => self.step_char(),
            }
        }
        let kind = match (from, interp, closed) {
            (TemplateFrom::Backtick, true, _) => TokenKind::TemplateHead,
            (TemplateFrom::Backtick, false, _) => TokenKind::TemplateFull,
            (TemplateFrom::InterpClose, true, _) => TokenKind::TemplateMiddle,
            (TemplateFrom::InterpClose, false, _) => TokenKind::TemplateTail,
        };
        Token {
            text: &self.src[start..self.pos],
            kind,
        }
    }

    fn scan_regex(&mut self) -> Token<'a> {
        let start = self.pos;
        self.pos += 1;
        let mut in_class = false;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\\' => {
                    self.pos += 1;
                    if self.pos < self.bytes.len() {
                        self.step_char();
                    }
                }
                b'[' => {
                    in_class = true;
                    self.pos += 1;
                }
                b']' => {
                    in_class = false;
                    self.pos += 1;
                }
                b'/' if !in_class => {
                    self.pos += 1;
                    while self.pos < self.bytes.len() && is_ident_char(self.peek_char(self.pos)) {
                        self.step_char();
                    }
                    break;
                }
                _ => self.step_char(),
            }
        }
        Token {
            text: &self.src[start..self.pos],
            kind: TokenKind::Regex,
        }
    }

    fn span_while(&self, mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
        let start = pos;
        while pos < self.bytes.len() && pred(self.bytes[pos]) {
            pos += 1;
        }
        pos - start
    }

    fn scan_number(&mut self) -> Result<Token<'a>, MinifyError> {
        let start = self.pos;
        if self.bytes[self.pos] == b'0'
            && matches!(self.bytes.get(self.pos + 1), Some(&(b'x' | b'X')))
        {
            self.pos += 2;
            let digits = self.span_while(self.pos, |b| b.is_ascii_hexdigit());
            if digits == 0 {
                return Err(MinifyError::IncompleteHexLiteral);
            }
            self.pos += digits;
            return Ok(Token {
                text: &self.src[start..self.pos],
                kind: TokenKind::Number,
            });
        }

        self.pos += self.span_while(self.pos, |b| b.is_ascii_digit());
        // Up to two consecutive dots belong to the number (`5..toString`);
        // three or more cannot re-lex as anything sane.
        let dots = self.span_while(self.pos, |b| b == b'.');
        if dots > 2 {
            return Err(MinifyError::TooManyDecimalPoints);
        }
        self.pos += dots;
        if dots > 0 {
            self.pos += self.span_while(self.pos, |b| b.is_ascii_digit());
        }
        if matches!(self.bytes.get(self.pos), Some(&(b'e' | b'E'))) {
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(&(b'+' | b'-'))) {
                self.pos += 1;
            }
            let digits = self.span_while(self.pos, |b| b.is_ascii_digit());
            if digits == 0 {
                return Err(MinifyError::MissingExponentDigits);
            }
            self.pos += digits;
        }
        Ok(Token {
            text: &self.src[start..self.pos],
            kind: TokenKind::Number,
        })
    }

    fn scan_word(&mut self) -> Token<'a> {
        let start = self.pos;
        while self.pos < self.bytes.len() && is_ident_char(self.peek_char(self.pos)) {
            self.step_char();
        }
        let text = &self.src[start..self.pos];
        let kind = match Keyword::from_word(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident,
        };
        Token { text, kind }
    }

    fn scan_punct(&mut self) -> Token<'a> {
        let rest = self.rest();
        for p in PUNCTUATORS {
            if rest.starts_with(p) {
                // `?.` followed by a digit is a ternary with a leading-dot
                // number, not optional chaining.
                if *p == "?."
                    && rest.as_bytes().get(2).is_some_and(u8::is_ascii_digit)
                {
                    continue;
                }
                let start = self.pos;
                self.pos += p.len();
                return Token {
                    text: &self.src[start..self.pos],
                    kind: TokenKind::Punct(p),
                };
            }
        }
        // No rule for this character; pass it through.
        let start = self.pos;
        self.step_char();
        Token {
            text: &self.src[start..self.pos],
            kind: TokenKind::Unknown,
        }
    }
}
