//! Bound (type-checked) tree.
//!
//! The binder produces this tree from syntax; lowering rewrites it into the
//! flat label/goto form the evaluator runs. Statement and expression kinds
//! are closed enums, and every expression knows its type.
//!
//! Nodes carry no spans: all diagnostics are reported during binding, while
//! the syntax is still at hand.

mod display;

use std::fmt;

use crate::{FunctionSymbol, TokenKind, TypeSymbol, Value, VariableSymbol};

/// Jump target minted by lowering.
///
/// Labels are compared by number only; a lowering pass mints them from a
/// private counter, so they are unique within one lowered program.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label(u32);

impl Label {
    pub const fn new(id: u32) -> Self {
        Label(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label{}", self.0)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOpKind {
    Identity,
    Negation,
    LogicalNegation,
    OnesComplement,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOpKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Equals,
    NotEquals,
    Less,
    LessOrEquals,
    Greater,
    GreaterOrEquals,
}

/// A resolved unary operator: which token, what it does, and its types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoundUnaryOperator {
    pub token: TokenKind,
    pub kind: UnaryOpKind,
    pub operand_ty: TypeSymbol,
    pub ty: TypeSymbol,
}

impl BoundUnaryOperator {
    /// Operator whose result type equals its operand type.
    pub const fn new(token: TokenKind, kind: UnaryOpKind, operand_ty: TypeSymbol) -> Self {
        BoundUnaryOperator {
            token,
            kind,
            operand_ty,
            ty: operand_ty,
        }
    }
}

/// A resolved binary operator.
///
/// The same `kind` can appear with several operand types (`Addition` on
/// ints and on strings); evaluation dispatches on the pair.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoundBinaryOperator {
    pub token: TokenKind,
    pub kind: BinaryOpKind,
    pub left_ty: TypeSymbol,
    pub right_ty: TypeSymbol,
    pub ty: TypeSymbol,
}

impl BoundBinaryOperator {
    /// Operator over two operands of `operand_ty` producing `ty`.
    pub const fn new(
        token: TokenKind,
        kind: BinaryOpKind,
        operand_ty: TypeSymbol,
        ty: TypeSymbol,
    ) -> Self {
        BoundBinaryOperator {
            token,
            kind,
            left_ty: operand_ty,
            right_ty: operand_ty,
            ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundExpression {
    Literal(Value),
    Variable(VariableSymbol),
    Assignment {
        variable: VariableSymbol,
        expression: Box<BoundExpression>,
    },
    Unary {
        op: BoundUnaryOperator,
        operand: Box<BoundExpression>,
    },
    Binary {
        left: Box<BoundExpression>,
        op: BoundBinaryOperator,
        right: Box<BoundExpression>,
    },
    Conversion {
        ty: TypeSymbol,
        expression: Box<BoundExpression>,
    },
    Call {
        function: FunctionSymbol,
        arguments: Vec<BoundExpression>,
    },
    /// Stand-in for an expression that failed to bind.
    Error,
}

impl BoundExpression {
    /// The single resolved type of this expression.
    pub fn ty(&self) -> TypeSymbol {
        match self {
            BoundExpression::Literal(value) => value.ty(),
            BoundExpression::Variable(variable) => variable.ty(),
            BoundExpression::Assignment { expression, .. } => expression.ty(),
            BoundExpression::Unary { op, .. } => op.ty,
            BoundExpression::Binary { op, .. } => op.ty,
            BoundExpression::Conversion { ty, .. } => *ty,
            BoundExpression::Call { function, .. } => function.ty,
            BoundExpression::Error => TypeSymbol::Error,
        }
    }

    pub fn unary(op: BoundUnaryOperator, operand: BoundExpression) -> Self {
        BoundExpression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: BoundExpression, op: BoundBinaryOperator, right: BoundExpression) -> Self {
        BoundExpression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn assignment(variable: VariableSymbol, expression: BoundExpression) -> Self {
        BoundExpression::Assignment {
            variable,
            expression: Box::new(expression),
        }
    }

    pub fn conversion(ty: TypeSymbol, expression: BoundExpression) -> Self {
        BoundExpression::Conversion {
            ty,
            expression: Box::new(expression),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundStatement {
    Block(Vec<BoundStatement>),
    VariableDeclaration {
        variable: VariableSymbol,
        initializer: BoundExpression,
    },
    If {
        condition: BoundExpression,
        then_statement: Box<BoundStatement>,
        else_statement: Option<Box<BoundStatement>>,
    },
    While {
        condition: BoundExpression,
        body: Box<BoundStatement>,
    },
    For {
        variable: VariableSymbol,
        lower_bound: BoundExpression,
        upper_bound: BoundExpression,
        body: Box<BoundStatement>,
    },
    Expression(BoundExpression),
    Label(Label),
    Goto(Label),
    /// Jump to `label` when `condition` evaluates to `jump_if_true`.
    ConditionalGoto {
        label: Label,
        condition: BoundExpression,
        jump_if_true: bool,
    },
}

impl BoundStatement {
    /// Short kind name for logs and invariant messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BoundStatement::Block(_) => "block",
            BoundStatement::VariableDeclaration { .. } => "variable declaration",
            BoundStatement::If { .. } => "if",
            BoundStatement::While { .. } => "while",
            BoundStatement::For { .. } => "for",
            BoundStatement::Expression(_) => "expression",
            BoundStatement::Label(_) => "label",
            BoundStatement::Goto(_) => "goto",
            BoundStatement::ConditionalGoto { .. } => "conditional goto",
        }
    }

    /// Whether this statement survives lowering unchanged in kind.
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            BoundStatement::If { .. } | BoundStatement::While { .. } | BoundStatement::For { .. }
        )
    }

    pub fn declaration(variable: VariableSymbol, initializer: BoundExpression) -> Self {
        BoundStatement::VariableDeclaration {
            variable,
            initializer,
        }
    }

    pub fn conditional_goto(label: Label, condition: BoundExpression, jump_if_true: bool) -> Self {
        BoundStatement::ConditionalGoto {
            label,
            condition,
            jump_if_true,
        }
    }
}
