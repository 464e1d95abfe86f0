//! The minification loop tying scanner, context, newline logic, and
//! emitter together.

use crate::asi;
use crate::context::{Context, Prev};
use crate::emitter::Emitter;
use crate::error::MinifyError;
use crate::scanner::Lexer;
use crate::token::{Keyword, TokenKind};

/// Line limit used by [`minify`]. Some old consumers hard-fail on very
/// long lines, so the convenience entry point wraps conservatively.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1000;

/// Minify `source`, wrapping output lines at [`DEFAULT_MAX_LINE_LENGTH`].
pub fn minify(source: &str) -> Result<String, MinifyError> {
    minify_with_limit(source, DEFAULT_MAX_LINE_LENGTH)
}

/// Minify `source`, wrapping output lines at `max_line_length` where a
/// break cannot change meaning. A single token longer than the limit is
/// emitted unbroken on its own line.
pub fn minify_with_limit(source: &str, max_line_length: usize) -> Result<String, MinifyError> {
    let mut lexer = Lexer::new(source);
    let mut ctx = Context::new();
    let mut emitter = Emitter::new(max_line_length, source.len());

    while let Some((gap, tok)) = lexer.next(&ctx)? {
        let forced = gap.newline && asi::keep_newline(ctx.prev(), &tok);
        let break_allowed = asi::can_break_before(ctx.prev(), &tok);
        let text = match tok.kind {
            TokenKind::Keyword(Keyword::True) if rewrite_boolean(&ctx) => "!0",
            TokenKind::Keyword(Keyword::False) if rewrite_boolean(&ctx) => "!1",
            _ => tok.text,
        };
        emitter.emit(text, tok.kind, forced, break_allowed);
        ctx.update(&tok);
    }
    Ok(emitter.finish())
}

/// `true`/`false` shrink to `!0`/`!1` except where they are property
/// names: after `.` or `?.`, or in member-key position of an object
/// literal or class body.
fn rewrite_boolean(ctx: &Context) -> bool {
    !matches!(ctx.prev(), Prev::Punct("." | "?.")) && !ctx.at_member_key()
}
