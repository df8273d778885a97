//! Statement and expression grammar.

use aster_diagnostic::DiagnosticBag;
use aster_ir::syntax::{
    CompilationUnit, DeclKeyword, Expr, ExprKind, Ident, Operator, Stmt, StmtKind,
};
use aster_ir::{Token, TokenKind, Value};
use aster_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;

pub(crate) struct Parser {
    cursor: Cursor,
    diagnostics: DiagnosticBag,
}

impl Parser {
    pub(crate) fn new(cursor: Cursor) -> Self {
        Parser {
            cursor,
            diagnostics: DiagnosticBag::new(),
        }
    }

    pub(crate) fn into_diagnostics(self) -> DiagnosticBag {
        self.diagnostics
    }

    fn expect(&mut self, kind: TokenKind) -> Token {
        self.cursor.expect(kind, &mut self.diagnostics)
    }

    fn expect_ident(&mut self) -> Ident {
        let token = self.expect(TokenKind::Identifier);
        Ident::new(token.text, token.span)
    }

    pub(crate) fn parse_compilation_unit(&mut self) -> CompilationUnit {
        let statement = self.parse_statement();
        let end = self.expect(TokenKind::EndOfFile);
        CompilationUnit {
            statement,
            end_of_file: end.span,
        }
    }

    // Statements

    fn parse_statement(&mut self) -> Stmt {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Var => self.parse_declaration(DeclKeyword::Var),
            TokenKind::Let => self.parse_declaration(DeclKeyword::Let),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            _ => {
                let expr = self.parse_expression();
                let span = expr.span;
                Stmt::new(StmtKind::Expression(expr), span)
            }
        })
    }

    fn parse_block(&mut self) -> Stmt {
        let open = self.expect(TokenKind::LBrace);
        let mut statements = Vec::new();

        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.position();
            statements.push(self.parse_statement());
            // A statement built only from fabricated tokens consumed nothing;
            // skip the offending token so the loop terminates.
            if self.cursor.position() == start {
                self.cursor.advance();
            }
        }

        let close = self.expect(TokenKind::RBrace);
        Stmt::new(StmtKind::Block(statements), open.span.merge(close.span))
    }

    fn parse_declaration(&mut self, keyword: DeclKeyword) -> Stmt {
        let start = self.cursor.advance().span;
        let name = self.expect_ident();
        self.expect(TokenKind::Eq);
        let initializer = self.parse_expression();
        let span = start.merge(initializer.span);
        Stmt::new(
            StmtKind::VariableDeclaration {
                keyword,
                name,
                initializer,
            },
            span,
        )
    }

    fn parse_if(&mut self) -> Stmt {
        let start = self.cursor.advance().span;
        let condition = self.parse_expression();
        let then_branch = Box::new(self.parse_statement());
        let else_branch = if self.cursor.check(TokenKind::Else) {
            self.cursor.advance();
            Some(Box::new(self.parse_statement()))
        } else {
            None
        };
        let end = else_branch.as_ref().map_or(then_branch.span, |e| e.span);
        Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            start.merge(end),
        )
    }

    fn parse_while(&mut self) -> Stmt {
        let start = self.cursor.advance().span;
        let condition = self.parse_expression();
        let body = Box::new(self.parse_statement());
        let span = start.merge(body.span);
        Stmt::new(StmtKind::While { condition, body }, span)
    }

    fn parse_for(&mut self) -> Stmt {
        let start = self.cursor.advance().span;
        let variable = self.expect_ident();
        self.expect(TokenKind::Eq);
        let lower_bound = self.parse_expression();
        self.expect(TokenKind::To);
        let upper_bound = self.parse_expression();
        let body = Box::new(self.parse_statement());
        let span = start.merge(body.span);
        Stmt::new(
            StmtKind::For {
                variable,
                lower_bound,
                upper_bound,
                body,
            },
            span,
        )
    }

    // Expressions

    fn parse_expression(&mut self) -> Expr {
        self.parse_assignment()
    }

    /// `name = value` is right associative and binds loosest.
    fn parse_assignment(&mut self) -> Expr {
        if self.cursor.check(TokenKind::Identifier)
            && self.cursor.peek(1).kind == TokenKind::Eq
        {
            let target = self.expect_ident();
            self.cursor.advance();
            let value = ensure_sufficient_stack(|| self.parse_assignment());
            let span = target.span.merge(value.span);
            return Expr::new(
                ExprKind::Assignment {
                    target,
                    value: Box::new(value),
                },
                span,
            );
        }
        self.parse_binary(0)
    }

    /// Precedence climbing. Operators of equal precedence associate left.
    fn parse_binary(&mut self, parent_precedence: u8) -> Expr {
        ensure_sufficient_stack(|| {
            let unary_precedence = self.cursor.current_kind().unary_precedence();
            let mut left = if unary_precedence != 0 && unary_precedence >= parent_precedence {
                let token = self.cursor.advance();
                let operand = self.parse_binary(unary_precedence);
                let span = token.span.merge(operand.span);
                Expr::new(
                    ExprKind::Unary {
                        op: Operator::new(token.kind, token.span),
                        operand: Box::new(operand),
                    },
                    span,
                )
            } else {
                self.parse_primary()
            };

            loop {
                let precedence = self.cursor.current_kind().binary_precedence();
                if precedence == 0 || precedence <= parent_precedence {
                    break;
                }
                let token = self.cursor.advance();
                let right = self.parse_binary(precedence);
                let span = left.span.merge(right.span);
                left = Expr::new(
                    ExprKind::Binary {
                        left: Box::new(left),
                        op: Operator::new(token.kind, token.span),
                        right: Box::new(right),
                    },
                    span,
                );
            }
            left
        })
    }

    fn parse_primary(&mut self) -> Expr {
        match self.cursor.current_kind() {
            TokenKind::LParen => self.parse_parenthesized(),
            TokenKind::True | TokenKind::False => {
                let token = self.cursor.advance();
                let value = token.kind == TokenKind::True;
                Expr::new(ExprKind::Literal(Value::Bool(value)), token.span)
            }
            TokenKind::Number => {
                let token = self.cursor.advance();
                let value = token.value.unwrap_or(Value::Int(0));
                Expr::new(ExprKind::Literal(value), token.span)
            }
            TokenKind::String => {
                let token = self.cursor.advance();
                let value = token.value.unwrap_or_else(|| Value::from(""));
                Expr::new(ExprKind::Literal(value), token.span)
            }
            TokenKind::Identifier if self.cursor.peek(1).kind == TokenKind::LParen => {
                self.parse_call()
            }
            _ => {
                // Anything else must be a name; this reports when it is not.
                let ident = self.expect_ident();
                let span = ident.span;
                Expr::new(ExprKind::Name(ident), span)
            }
        }
    }

    fn parse_parenthesized(&mut self) -> Expr {
        let open = self.cursor.advance();
        let inner = self.parse_expression();
        let close = self.expect(TokenKind::RParen);
        Expr::new(
            ExprKind::Parenthesized(Box::new(inner)),
            open.span.merge(close.span),
        )
    }

    fn parse_call(&mut self) -> Expr {
        let callee = self.expect_ident();
        self.expect(TokenKind::LParen);
        let mut arguments = Vec::new();
        if !self.cursor.check(TokenKind::RParen) && !self.cursor.is_at_end() {
            loop {
                arguments.push(self.parse_expression());
                if !self.cursor.check(TokenKind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        let close = self.expect(TokenKind::RParen);
        let span = callee.span.merge(close.span);
        Expr::new(ExprKind::Call { callee, arguments }, span)
    }
}
