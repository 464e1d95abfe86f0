//! A single-pass lexical JavaScript minifier.
//!
//! Strips insignificant whitespace and comments without building an AST,
//! while tracking just enough context to survive the hazards of the
//! lexical grammar: regex-vs-division `/`, automatic semicolon insertion,
//! the five meanings of `{`, nested template literals, and generator
//! `yield`. Output lines are wrapped at a configurable maximum length at
//! points where a newline cannot change meaning.
//!
//! ```
//! let out = jscrunch::minify("var answer  =  42 ;  // the usual\n").unwrap();
//! assert_eq!(out, "var answer=42;");
//! ```

mod asi;
mod context;
mod emitter;
mod error;
mod minifier;
mod scanner;
mod token;

pub use crate::error::MinifyError;
pub use crate::minifier::{DEFAULT_MAX_LINE_LENGTH, minify, minify_with_limit};
