//! Token emission: minimal separators and line packing.

use crate::token::{TokenKind, is_ident_char};

pub struct Emitter {
    out: String,
    max_line_length: usize,
    line_len: usize,
    last_char: char,
    prev_regex: bool,
    /// Previous token was a decimal integer with no dot, exponent, or hex
    /// marker: a directly following `.` would become its decimal point.
    prev_plain_int: bool,
}

impl Emitter {
    pub fn new(max_line_length: usize, capacity_hint: usize) -> Self {
        Emitter {
            out: String::with_capacity(capacity_hint),
            max_line_length,
            line_len: 0,
            last_char: '\0',
            prev_regex: false,
            prev_plain_int: false,
        }
    }

    /// Append one token. `forced_newline` replays a semantically required
    /// line terminator; `break_allowed` says whether the packer may start
    /// a new line here on its own.
    pub fn emit(&mut self, text: &str, kind: TokenKind, forced_newline: bool, break_allowed: bool) {
        if forced_newline {
            self.push_newline();
        } else {
            let sep = !self.out.is_empty() && self.needs_space(text);
            if self.line_len + usize::from(sep) + text.len() > self.max_line_length
                && break_allowed
            {
                self.push_newline();
            } else if sep {
                self.out.push(' ');
                self.line_len += 1;
            }
        }

        self.out.push_str(text);
        match text.rfind('\n') {
            Some(idx) => self.line_len = text.len() - idx - 1,
            None => self.line_len += text.len(),
        }
        if let Some(ch) = text.chars().last() {
            self.last_char = ch;
        }
        self.prev_regex = kind == TokenKind::Regex;
        self.prev_plain_int = kind == TokenKind::Number
            && !text.contains(['.', 'e', 'E', 'x', 'X']);
    }

    fn push_newline(&mut self) {
        self.out.push('\n');
        self.line_len = 0;
        self.last_char = '\n';
    }

    /// A space is required exactly where gluing the tokens together would
    /// change how the output re-lexes.
    fn needs_space(&self, text: &str) -> bool {
        let Some(first) = text.chars().next() else {
            return false;
        };
        let last = self.last_char;
        (is_ident_char(last) && is_ident_char(first))
            || (last == '+' && first == '+')
            || (last == '-' && first == '-')
            || (last == '/' && first == '/')
            || (self.prev_regex && is_ident_char(first))
            || (self.prev_plain_int && first == '.')
            || (last == '<' && first == '!')
            || (last == '?' && first == '.')
    }

    pub fn finish(self) -> String {
        self.out
    }
}
