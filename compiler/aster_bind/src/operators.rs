//! Operator resolution tables.
//!
//! Each entry maps a token and operand type(s) to an operator kind and a
//! result type. There is no implicit promotion: a combination missing from
//! the table is undefined.

use aster_ir::{BinaryOpKind, BoundBinaryOperator, BoundUnaryOperator, TokenKind, TypeSymbol, UnaryOpKind};

use TypeSymbol::{Bool, Int, String};

static UNARY_OPERATORS: &[BoundUnaryOperator] = &[
    BoundUnaryOperator::new(TokenKind::Bang, UnaryOpKind::LogicalNegation, Bool),
    BoundUnaryOperator::new(TokenKind::Plus, UnaryOpKind::Identity, Int),
    BoundUnaryOperator::new(TokenKind::Minus, UnaryOpKind::Negation, Int),
    BoundUnaryOperator::new(TokenKind::Tilde, UnaryOpKind::OnesComplement, Int),
];

static BINARY_OPERATORS: &[BoundBinaryOperator] = &[
    // int
    BoundBinaryOperator::new(TokenKind::Plus, BinaryOpKind::Addition, Int, Int),
    BoundBinaryOperator::new(TokenKind::Minus, BinaryOpKind::Subtraction, Int, Int),
    BoundBinaryOperator::new(TokenKind::Star, BinaryOpKind::Multiplication, Int, Int),
    BoundBinaryOperator::new(TokenKind::Slash, BinaryOpKind::Division, Int, Int),
    BoundBinaryOperator::new(TokenKind::Amp, BinaryOpKind::BitwiseAnd, Int, Int),
    BoundBinaryOperator::new(TokenKind::Pipe, BinaryOpKind::BitwiseOr, Int, Int),
    BoundBinaryOperator::new(TokenKind::Caret, BinaryOpKind::BitwiseXor, Int, Int),
    BoundBinaryOperator::new(TokenKind::EqEq, BinaryOpKind::Equals, Int, Bool),
    BoundBinaryOperator::new(TokenKind::BangEq, BinaryOpKind::NotEquals, Int, Bool),
    BoundBinaryOperator::new(TokenKind::Lt, BinaryOpKind::Less, Int, Bool),
    BoundBinaryOperator::new(TokenKind::LtEq, BinaryOpKind::LessOrEquals, Int, Bool),
    BoundBinaryOperator::new(TokenKind::Gt, BinaryOpKind::Greater, Int, Bool),
    BoundBinaryOperator::new(TokenKind::GtEq, BinaryOpKind::GreaterOrEquals, Int, Bool),
    // bool
    BoundBinaryOperator::new(TokenKind::AmpAmp, BinaryOpKind::LogicalAnd, Bool, Bool),
    BoundBinaryOperator::new(TokenKind::PipePipe, BinaryOpKind::LogicalOr, Bool, Bool),
    BoundBinaryOperator::new(TokenKind::Amp, BinaryOpKind::BitwiseAnd, Bool, Bool),
    BoundBinaryOperator::new(TokenKind::Pipe, BinaryOpKind::BitwiseOr, Bool, Bool),
    BoundBinaryOperator::new(TokenKind::Caret, BinaryOpKind::BitwiseXor, Bool, Bool),
    BoundBinaryOperator::new(TokenKind::EqEq, BinaryOpKind::Equals, Bool, Bool),
    BoundBinaryOperator::new(TokenKind::BangEq, BinaryOpKind::NotEquals, Bool, Bool),
    // string
    BoundBinaryOperator::new(TokenKind::Plus, BinaryOpKind::Addition, String, String),
    BoundBinaryOperator::new(TokenKind::EqEq, BinaryOpKind::Equals, String, Bool),
    BoundBinaryOperator::new(TokenKind::BangEq, BinaryOpKind::NotEquals, String, Bool),
];

/// Resolve a prefix operator applied to an operand of type `operand`.
pub fn bind_unary(token: TokenKind, operand: TypeSymbol) -> Option<BoundUnaryOperator> {
    UNARY_OPERATORS
        .iter()
        .find(|op| op.token == token && op.operand_ty == operand)
        .copied()
}

/// Resolve an infix operator applied to operands of types `left` and `right`.
pub fn bind_binary(token: TokenKind, left: TypeSymbol, right: TypeSymbol) -> Option<BoundBinaryOperator> {
    BINARY_OPERATORS
        .iter()
        .find(|op| op.token == token && op.left_ty == left && op.right_ty == right)
        .copied()
}
