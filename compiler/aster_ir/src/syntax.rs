//! Untyped syntax tree produced by the parser.
//!
//! Nodes own their children (`Box`/`Vec`); there is no arena because a
//! submission is a single statement and is discarded after binding.

use crate::{Span, TokenKind, Value};

/// An identifier occurrence.
///
/// `name` is empty when the parser fabricated the identifier during error
/// recovery; the binder skips such names without a second diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.name.is_empty()
    }
}

/// An operator token: its kind and where it was written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Operator {
    pub kind: TokenKind,
    pub span: Span,
}

impl Operator {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Operator { kind, span }
    }

    pub fn text(self) -> &'static str {
        self.kind.text().unwrap_or("?")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// `42`, `true`, `"text"`.
    Literal(Value),
    /// `x`.
    Name(Ident),
    /// `x = value`.
    Assignment { target: Ident, value: Box<Expr> },
    /// `-x`, `!flag`.
    Unary { op: Operator, operand: Box<Expr> },
    /// `a + b`.
    Binary {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
    /// `(inner)`.
    Parenthesized(Box<Expr>),
    /// `callee(arg, ...)`; also the syntax of explicit conversions.
    Call { callee: Ident, arguments: Vec<Expr> },
}

/// Which keyword introduced a declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeclKeyword {
    Var,
    Let,
}

impl DeclKeyword {
    pub fn is_read_only(self) -> bool {
        matches!(self, DeclKeyword::Let)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    /// `{ stmt* }`.
    Block(Vec<Stmt>),
    /// `var name = initializer` / `let name = initializer`.
    VariableDeclaration {
        keyword: DeclKeyword,
        name: Ident,
        initializer: Expr,
    },
    /// `if condition then [else otherwise]`.
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while condition body`.
    While { condition: Expr, body: Box<Stmt> },
    /// `for variable = lower to upper body`; both bounds inclusive.
    For {
        variable: Ident,
        lower_bound: Expr,
        upper_bound: Expr,
        body: Box<Stmt>,
    },
    Expression(Expr),
}

/// Root of one submission: a single statement followed by end of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilationUnit {
    pub statement: Stmt,
    pub end_of_file: Span,
}
