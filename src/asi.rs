//! Which line terminators survive minification.
//!
//! A newline between two tokens is semantically meaningful when removing
//! it would glue a statement onto the previous one (automatic semicolon
//! insertion) or when the grammar forbids a line terminator at that point
//! (the restricted productions). The same restrictions bound where the
//! line packer may insert a newline of its own.

use crate::context::{BraceKind, Prev, ends_value};
use crate::token::{Keyword, Token, TokenKind};

/// No line terminator may follow these; a newline after one ends the
/// statement and must be kept.
fn restricted_after(prev: Prev) -> bool {
    matches!(
        prev,
        Prev::YieldOp
            | Prev::Keyword(
                Keyword::Return | Keyword::Throw | Keyword::Continue | Keyword::Break
            )
    )
}

/// Can this token begin a statement? Used to decide whether a newline
/// after a completed expression separates two statements.
fn starts_statement(next: &Token<'_>) -> bool {
    match next.kind {
        TokenKind::Ident
        | TokenKind::Number
        | TokenKind::Str
        | TokenKind::Regex
        | TokenKind::TemplateFull
        | TokenKind::TemplateHead => true,
        TokenKind::Keyword(k) => !k.is_binary(),
        TokenKind::Punct("{" | "++" | "--" | "!" | "~") => true,
        _ => false,
    }
}

/// Decide the fate of a line terminator crossed between `prev` and `next`.
pub fn keep_newline(prev: Prev, next: &Token<'_>) -> bool {
    if restricted_after(prev) {
        return true;
    }
    // An arrow body is an expression whose `}` usually ends the statement:
    // keep the newline unless the next token plainly continues the
    // surrounding construct.
    if prev == Prev::BraceClose(BraceKind::ArrowBody) {
        return !matches!(next.kind, TokenKind::Punct(")" | "]" | "}" | "," | ";" | ":"));
    }
    ends_value(prev) && starts_statement(next)
}

/// May the line packer insert a newline between `prev` and `next`?
pub fn can_break_before(prev: Prev, next: &Token<'_>) -> bool {
    if restricted_after(prev) {
        return false;
    }
    !matches!(next.kind, TokenKind::Punct("++" | "--" | "=>"))
}
