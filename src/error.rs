use thiserror::Error;

/// The only inputs the minifier refuses outright are numeric literals that
/// cannot be carried through verbatim without changing how they re-lex.
/// Everything else malformed (unterminated strings, regexes, comments)
/// passes through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MinifyError {
    #[error("invalid numeric literal: `0x` with no hexadecimal digits")]
    IncompleteHexLiteral,
    #[error("invalid numeric literal: exponent with no digits")]
    MissingExponentDigits,
    #[error("invalid numeric literal: too many decimal points")]
    TooManyDecimalPoints,
}
