//! Context tracking for the scanner and emitter.
//!
//! JavaScript cannot be tokenized without remembering what came before: a
//! `/` is either a division operator or the start of a regex literal, `{`
//! opens one of five different constructs, a `:` may belong to a ternary,
//! a property, or a label, and `yield` is an operator only inside generator
//! bodies. This module keeps a stack of frames describing the enclosing
//! syntactic regions plus a classification of the last significant token,
//! and answers those questions for the rest of the pipeline.

use crate::token::{Keyword, Token, TokenKind};

/// What a `{` opened.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BraceKind {
    Block,
    ObjectLiteral,
    ClassBody,
    FunctionBody { generator: bool, expression: bool },
    ArrowBody,
}

/// What a `(` opened.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParenKind {
    /// Condition or head after `if`, `for`, `while`, `switch`, `catch`,
    /// `with`. Its `)` does not end a value.
    Control,
    /// Function or method parameter list. Its `)` announces a body `{`.
    Params { generator: bool, expression: bool },
    /// Grouping or call arguments. Its `)` ends a value.
    Expr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameKind {
    TopLevel,
    Brace(BraceKind),
    Paren(ParenKind),
    Bracket,
    TemplateInterp,
}

#[derive(Clone, Copy, Debug)]
struct PendingFunction {
    generator: bool,
    expression: bool,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    /// Open `?`s of conditional expressions within this frame.
    ternary_depth: u32,
    /// For object literals and class bodies: whether the scan position is
    /// still reading a member name (and whether a `*` preceded it).
    at_member_head: bool,
    member_star: bool,
    /// A `function` keyword seen in this frame whose parameter list has
    /// not been reached yet.
    pending_function: Option<PendingFunction>,
    /// A `class` keyword seen in this frame whose body `{` has not been
    /// reached yet. Survives the `extends` expression.
    pending_class: bool,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        let at_member_head = matches!(
            kind,
            FrameKind::Brace(BraceKind::ObjectLiteral | BraceKind::ClassBody)
        );
        Frame {
            kind,
            ternary_depth: 0,
            at_member_head,
            member_star: false,
            pending_function: None,
            pending_class: false,
        }
    }
}

/// Classification of the last significant token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Prev {
    None,
    Ident,
    Number,
    Str,
    /// A closed template literal (full or tail part).
    Template,
    /// A template head or middle part: an interpolation expression begins.
    TemplateExprStart,
    Regex,
    Keyword(Keyword),
    /// `yield` in operator position (inside a generator body).
    YieldOp,
    /// `++` or `--` attached to the value before it.
    PostfixIncDec,
    Colon { value: bool },
    BraceOpen(BraceKind),
    BraceClose(BraceKind),
    ParenOpen(ParenKind),
    ParenClose(ParenKind),
    BracketOpen,
    BracketClose,
    Punct(&'static str),
    Unknown,
}

/// True when the token ends a value: a following `/` is division and a
/// following newline may terminate a statement.
pub fn ends_value(prev: Prev) -> bool {
    match prev {
        Prev::Ident
        | Prev::Number
        | Prev::Str
        | Prev::Template
        | Prev::Regex
        | Prev::PostfixIncDec
        | Prev::BracketClose => true,
        Prev::Keyword(k) => k.is_value(),
        Prev::ParenClose(ParenKind::Expr) => true,
        Prev::BraceClose(BraceKind::ObjectLiteral | BraceKind::ArrowBody) => true,
        Prev::BraceClose(BraceKind::FunctionBody { expression, .. }) => expression,
        _ => false,
    }
}

pub struct Context {
    stack: Vec<Frame>,
    prev: Prev,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Context {
            stack: vec![Frame::new(FrameKind::TopLevel)],
            prev: Prev::None,
        }
    }

    pub fn prev(&self) -> Prev {
        self.prev
    }

    fn top(&self) -> &Frame {
        self.stack.last().expect("frame stack is never empty")
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.stack.last_mut().expect("frame stack is never empty")
    }

    /// A `}` here resumes template text rather than closing a brace.
    pub fn in_template_interp(&self) -> bool {
        matches!(self.top().kind, FrameKind::TemplateInterp)
    }

    /// A `/` here starts a regex literal rather than a division operator.
    pub fn regex_allowed(&self) -> bool {
        !ends_value(self.prev)
    }

    /// `yield` is an operator iff the nearest enclosing function body is a
    /// generator. Blocks, parens, object literals, and arrow bodies in
    /// between do not change that; a non-generator function body does.
    fn yield_is_operator(&self) -> bool {
        for frame in self.stack.iter().rev() {
            if let FrameKind::Brace(BraceKind::FunctionBody { generator, .. }) = frame.kind {
                return generator;
            }
        }
        false
    }

    /// True while reading a member name of an object literal or class
    /// body. `true`/`false` must not be rewritten here.
    pub fn at_member_key(&self) -> bool {
        let top = self.top();
        matches!(
            top.kind,
            FrameKind::Brace(BraceKind::ObjectLiteral | BraceKind::ClassBody)
        ) && top.at_member_head
    }

    /// True when the next token continues or starts an expression, as
    /// opposed to starting a statement. Decides `{` (object literal vs
    /// block) and `function` (expression vs declaration).
    fn expression_follows(&self) -> bool {
        match self.prev {
            // `for( ; ; { ... } )`: inside parens a `;` separates clauses
            // that are themselves expressions.
            Prev::Punct(";") => matches!(self.top().kind, FrameKind::Paren(_)),
            Prev::Punct(_) => true,
            Prev::Colon { value } => value,
            Prev::ParenOpen(_)
            | Prev::BracketOpen
            | Prev::TemplateExprStart
            | Prev::YieldOp => true,
            Prev::Keyword(k) => matches!(
                k,
                Keyword::Return
                    | Keyword::Throw
                    | Keyword::Case
                    | Keyword::Default
                    | Keyword::New
                    | Keyword::In
                    | Keyword::Instanceof
                    | Keyword::Typeof
                    | Keyword::Void
                    | Keyword::Delete
            ),
            _ => false,
        }
    }

    fn classify_paren(&self) -> ParenKind {
        let top = self.top();
        if let Some(pending) = top.pending_function {
            return ParenKind::Params {
                generator: pending.generator,
                expression: pending.expression,
            };
        }
        // Method definition: a name at member-head position followed by a
        // parameter list, e.g. `{ *f() {} }` or `class C { get x() {} }`.
        if matches!(
            top.kind,
            FrameKind::Brace(BraceKind::ObjectLiteral | BraceKind::ClassBody)
        ) && top.at_member_head
            && matches!(
                self.prev,
                Prev::Ident | Prev::Str | Prev::Number | Prev::BracketClose | Prev::Keyword(_)
            )
        {
            return ParenKind::Params {
                generator: top.member_star,
                expression: true,
            };
        }
        if let Prev::Keyword(k) = self.prev
            && k.opens_control_paren()
        {
            return ParenKind::Control;
        }
        ParenKind::Expr
    }

    fn classify_brace(&self) -> BraceKind {
        if let Prev::ParenClose(ParenKind::Params {
            generator,
            expression,
        }) = self.prev
        {
            return BraceKind::FunctionBody {
                generator,
                expression,
            };
        }
        if self.top().pending_class {
            return BraceKind::ClassBody;
        }
        if self.prev == Prev::Punct("=>") {
            return BraceKind::ArrowBody;
        }
        if self.expression_follows() {
            return BraceKind::ObjectLiteral;
        }
        BraceKind::Block
    }

    /// Fold one significant token into the tracked state. Called after the
    /// token has been emitted, so emission decisions see the state as it
    /// was *before* the token.
    pub fn update(&mut self, tok: &Token<'_>) {
        let prev_before = self.prev;

        match tok.kind {
            TokenKind::Punct("(") => {
                let kind = self.classify_paren();
                self.top_mut().pending_function = None;
                self.stack.push(Frame::new(FrameKind::Paren(kind)));
                self.prev = Prev::ParenOpen(kind);
            }
            TokenKind::Punct(")") => {
                let kind = match self.top().kind {
                    FrameKind::Paren(kind) => {
                        self.stack.pop();
                        kind
                    }
                    // Unbalanced input; tolerated.
                    _ => ParenKind::Expr,
                };
                self.prev = Prev::ParenClose(kind);
            }
            TokenKind::Punct("{") => {
                let kind = self.classify_brace();
                if kind == BraceKind::ClassBody {
                    self.top_mut().pending_class = false;
                }
                self.stack.push(Frame::new(FrameKind::Brace(kind)));
                self.prev = Prev::BraceOpen(kind);
            }
            TokenKind::Punct("}") => {
                let kind = match self.top().kind {
                    FrameKind::Brace(kind) => {
                        self.stack.pop();
                        kind
                    }
                    _ => BraceKind::Block,
                };
                self.prev = Prev::BraceClose(kind);
            }
            TokenKind::Punct("[") => {
                self.stack.push(Frame::new(FrameKind::Bracket));
                self.prev = Prev::BracketOpen;
            }
            TokenKind::Punct("]") => {
                if matches!(self.top().kind, FrameKind::Bracket) {
                    self.stack.pop();
                }
                self.prev = Prev::BracketClose;
            }
            TokenKind::Punct("?") => {
                self.top_mut().ternary_depth += 1;
                self.prev = Prev::Punct("?");
            }
            TokenKind::Punct(":") => {
                let top = self.top_mut();
                let value = if top.ternary_depth > 0 {
                    top.ternary_depth -= 1;
                    true
                } else {
                    matches!(
                        top.kind,
                        FrameKind::Brace(BraceKind::ObjectLiteral | BraceKind::ClassBody)
                    )
                };
                self.prev = Prev::Colon { value };
            }
            TokenKind::Punct(p @ ("++" | "--")) => {
                self.prev = if ends_value(prev_before) {
                    Prev::PostfixIncDec
                } else {
                    Prev::Punct(p)
                };
            }
            TokenKind::Punct(p) => self.prev = Prev::Punct(p),
            TokenKind::Keyword(Keyword::Yield) => {
                self.prev = if self.yield_is_operator() {
                    Prev::YieldOp
                } else {
                    Prev::Ident
                };
            }
            TokenKind::Keyword(Keyword::Function) => {
                let expression = self.expression_follows();
                self.top_mut().pending_function = Some(PendingFunction {
                    generator: false,
                    expression,
                });
                self.prev = Prev::Keyword(Keyword::Function);
            }
            TokenKind::Keyword(Keyword::Class) => {
                self.top_mut().pending_class = true;
                self.prev = Prev::Keyword(Keyword::Class);
            }
            TokenKind::Keyword(k) => self.prev = Prev::Keyword(k),
            TokenKind::Ident => self.prev = Prev::Ident,
            TokenKind::Number => self.prev = Prev::Number,
            TokenKind::Str => self.prev = Prev::Str,
            TokenKind::Regex => self.prev = Prev::Regex,
            TokenKind::TemplateHead => {
                self.stack.push(Frame::new(FrameKind::TemplateInterp));
                self.prev = Prev::TemplateExprStart;
            }
            TokenKind::TemplateMiddle => self.prev = Prev::TemplateExprStart,
            TokenKind::TemplateTail => {
                if matches!(self.top().kind, FrameKind::TemplateInterp) {
                    self.stack.pop();
                }
                self.prev = Prev::Template;
            }
            TokenKind::TemplateFull => self.prev = Prev::Template,
            TokenKind::Unknown => self.prev = Prev::Unknown,
        }

        // `function *` marks the pending function as a generator.
        if tok.kind == TokenKind::Punct("*")
            && prev_before == Prev::Keyword(Keyword::Function)
            && let Some(pending) = &mut self.top_mut().pending_function
        {
            pending.generator = true;
        }

        // A pending `function` survives only through the optional `*` and
        // name; anything else abandons it.
        let keeps_pending_function = matches!(
            tok.kind,
            TokenKind::Ident | TokenKind::Keyword(Keyword::Function) | TokenKind::Punct("(")
        ) || (tok.kind == TokenKind::Punct("*")
            && prev_before == Prev::Keyword(Keyword::Function));
        if !keeps_pending_function {
            self.top_mut().pending_function = None;
        }
        if tok.kind == TokenKind::Punct(";") {
            self.top_mut().pending_class = false;
        }

        self.update_member_position(tok);
    }

    fn update_member_position(&mut self, tok: &Token<'_>) {
        let after_method_body = tok.kind == TokenKind::Punct("}")
            && matches!(self.prev, Prev::BraceClose(BraceKind::FunctionBody { .. }));
        let top = self.top_mut();
        if !matches!(
            top.kind,
            FrameKind::Brace(BraceKind::ObjectLiteral | BraceKind::ClassBody)
        ) {
            return;
        }
        match tok.kind {
            TokenKind::Punct(",") | TokenKind::Punct(";") => {
                top.at_member_head = true;
                top.member_star = false;
            }
            TokenKind::Punct("}") => {
                // A method body just closed: the next token begins a new
                // member (classes allow it without a separating comma).
                if after_method_body {
                    top.at_member_head = true;
                    top.member_star = false;
                } else {
                    top.at_member_head = false;
                }
            }
            // The opening brace of this very frame; its head state was
            // initialized on push.
            TokenKind::Punct("{") => {}
            TokenKind::Punct("*") if top.at_member_head => top.member_star = true,
            // Closing bracket of a computed member name.
            TokenKind::Punct("]") => {}
            TokenKind::Ident | TokenKind::Str | TokenKind::Number | TokenKind::Keyword(_)
                if top.at_member_head => {}
            _ => {
                top.at_member_head = false;
                top.member_star = false;
            }
        }
    }
}
