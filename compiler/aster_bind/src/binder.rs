//! Statement and expression binding.
//!
//! The binder turns one submission's syntax into a bound tree. It never
//! fails: every problem is appended to the diagnostic bag and a best-effort
//! node is returned so independent mistakes are all reported in one pass.
//! Expressions that failed to bind become [`BoundExpression::Error`], and
//! operators, conversions and calls consuming an `Error` stay silent.

use std::rc::Rc;

use aster_diagnostic::{Diagnostic, DiagnosticBag};
use aster_ir::syntax::{CompilationUnit, DeclKeyword, Expr, ExprKind, Ident, Operator, Stmt, StmtKind};
use aster_ir::{BoundExpression, BoundStatement, Symbol, TypeSymbol, VariableSymbol};
use aster_stack::ensure_sufficient_stack;

use crate::builtins::builtin_functions;
use crate::conversion::Conversion;
use crate::operators::{bind_binary, bind_unary};
use crate::scope::{ScopeArena, ScopeId};

/// The persisted result of binding one submission.
///
/// Snapshots form a chain through `previous`; they are never mutated once
/// built, and the next submission replays their variables into fresh scopes.
#[derive(Debug)]
pub struct GlobalScope {
    pub previous: Option<Rc<GlobalScope>>,
    /// Earlier submissions' diagnostics followed by this one's.
    pub diagnostics: Vec<Diagnostic>,
    /// Variables declared at the submission's outermost level.
    pub variables: Vec<VariableSymbol>,
    pub statement: BoundStatement,
}

impl GlobalScope {
    /// Snapshots from oldest to newest, ending with `self`.
    pub fn chain(self: &Rc<Self>) -> Vec<Rc<GlobalScope>> {
        let mut chain = Vec::new();
        let mut current = Some(Rc::clone(self));
        while let Some(scope) = current {
            current = scope.previous.clone();
            chain.push(scope);
        }
        chain.reverse();
        chain
    }
}

/// Bind one submission on top of every earlier one.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bind_global_scope(previous: Option<Rc<GlobalScope>>, unit: &CompilationUnit) -> GlobalScope {
    let mut arena = ScopeArena::new();
    let scope = build_scope_chain(&mut arena, previous.as_ref());

    let mut binder = Binder {
        arena,
        scope,
        diagnostics: DiagnosticBag::new(),
    };
    let statement = binder.bind_statement(&unit.statement);
    let variables = binder.arena.declared_variables(scope);

    let mut diagnostics = previous
        .as_ref()
        .map(|p| p.diagnostics.clone())
        .unwrap_or_default();
    diagnostics.extend(binder.diagnostics);

    tracing::debug!(
        variables = variables.len(),
        diagnostics = diagnostics.len(),
        "bound submission"
    );
    GlobalScope {
        previous,
        diagnostics,
        variables,
        statement,
    }
}

/// Rebuild the scope chain a new submission binds in.
///
/// The very first submission binds directly in the scope holding the
/// builtins. Later ones get a builtins root, then one layer per earlier
/// snapshot (oldest first), then a fresh scope of their own.
fn build_scope_chain(arena: &mut ScopeArena, previous: Option<&Rc<GlobalScope>>) -> ScopeId {
    let root = arena.root();
    for function in builtin_functions() {
        arena.try_declare(root, Symbol::Function(function));
    }

    let Some(previous) = previous else {
        return root;
    };

    let mut parent = root;
    for snapshot in previous.chain() {
        let layer = arena.child(parent);
        for variable in &snapshot.variables {
            arena.try_declare(layer, Symbol::Variable(variable.clone()));
        }
        parent = layer;
    }
    arena.child(parent)
}

struct Binder {
    arena: ScopeArena,
    scope: ScopeId,
    diagnostics: DiagnosticBag,
}

impl Binder {
    fn push_scope(&mut self) {
        self.scope = self.arena.child(self.scope);
    }

    fn pop_scope(&mut self) {
        if let Some(parent) = self.arena.parent(self.scope) {
            self.scope = parent;
        }
    }

    /// Declare `variable`, reporting a same-scope duplicate. The new symbol
    /// replaces the old one either way.
    fn declare_variable(&mut self, name: &Ident, variable: &VariableSymbol) {
        if name.is_missing() {
            return;
        }
        let symbol = Symbol::Variable(variable.clone());
        if !self.arena.try_declare(self.scope, symbol.clone()) {
            self.diagnostics.report_duplicate_declaration(name.span, &name.name);
            self.arena.declare_or_replace(self.scope, symbol);
        }
    }

    // Statements

    fn bind_statement(&mut self, stmt: &Stmt) -> BoundStatement {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Block(statements) => {
                self.push_scope();
                let bound = statements.iter().map(|s| self.bind_statement(s)).collect();
                self.pop_scope();
                BoundStatement::Block(bound)
            }
            StmtKind::VariableDeclaration {
                keyword,
                name,
                initializer,
            } => self.bind_variable_declaration(*keyword, name, initializer),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.bind_expression_of_type(condition, TypeSymbol::Bool);
                let then_statement = Box::new(self.bind_statement(then_branch));
                let else_statement = else_branch
                    .as_ref()
                    .map(|stmt| Box::new(self.bind_statement(stmt)));
                BoundStatement::If {
                    condition,
                    then_statement,
                    else_statement,
                }
            }
            StmtKind::While { condition, body } => {
                let condition = self.bind_expression_of_type(condition, TypeSymbol::Bool);
                let body = Box::new(self.bind_statement(body));
                BoundStatement::While { condition, body }
            }
            StmtKind::For {
                variable,
                lower_bound,
                upper_bound,
                body,
            } => {
                let lower_bound = self.bind_expression_of_type(lower_bound, TypeSymbol::Int);
                let upper_bound = self.bind_expression_of_type(upper_bound, TypeSymbol::Int);

                self.push_scope();
                let symbol = VariableSymbol::new(variable.name.clone(), true, TypeSymbol::Int);
                self.declare_variable(variable, &symbol);
                let body = Box::new(self.bind_statement(body));
                self.pop_scope();

                BoundStatement::For {
                    variable: symbol,
                    lower_bound,
                    upper_bound,
                    body,
                }
            }
            StmtKind::Expression(expr) => {
                BoundStatement::Expression(self.bind_expression(expr, true))
            }
        })
    }

    fn bind_variable_declaration(
        &mut self,
        keyword: DeclKeyword,
        name: &Ident,
        initializer: &Expr,
    ) -> BoundStatement {
        let initializer = self.bind_expression(initializer, false);
        let variable = VariableSymbol::new(name.name.clone(), keyword.is_read_only(), initializer.ty());
        self.declare_variable(name, &variable);
        BoundStatement::declaration(variable, initializer)
    }

    // Expressions

    /// Bind `expr`; unless `can_be_void`, a `void` result is reported and
    /// replaced by `Error`.
    fn bind_expression(&mut self, expr: &Expr, can_be_void: bool) -> BoundExpression {
        let bound = ensure_sufficient_stack(|| self.bind_expression_inner(expr));
        if !can_be_void && bound.ty() == TypeSymbol::Void {
            self.diagnostics.report_expression_must_have_value(expr.span);
            return BoundExpression::Error;
        }
        bound
    }

    /// Bind `expr` and check it has type `expected`.
    ///
    /// A mismatch is reported but the expression is returned unconverted.
    fn bind_expression_of_type(&mut self, expr: &Expr, expected: TypeSymbol) -> BoundExpression {
        let bound = self.bind_expression(expr, false);
        let actual = bound.ty();
        if !expected.is_error() && !actual.is_error() && actual != expected {
            self.diagnostics.report_cannot_convert(expr.span, actual, expected);
        }
        bound
    }

    fn bind_expression_inner(&mut self, expr: &Expr) -> BoundExpression {
        match &expr.kind {
            ExprKind::Literal(value) => BoundExpression::Literal(value.clone()),
            ExprKind::Parenthesized(inner) => self.bind_expression(inner, false),
            ExprKind::Name(ident) => self.bind_name(ident),
            ExprKind::Assignment { target, value } => self.bind_assignment(target, value),
            ExprKind::Unary { op, operand } => self.bind_unary(*op, operand),
            ExprKind::Binary { left, op, right } => self.bind_binary(left, *op, right),
            ExprKind::Call { callee, arguments } => self.bind_call(expr, callee, arguments),
        }
    }

    fn bind_name(&mut self, ident: &Ident) -> BoundExpression {
        // Fabricated by the parser, which already reported it.
        if ident.is_missing() {
            return BoundExpression::Error;
        }
        match self.arena.lookup_variable(self.scope, &ident.name) {
            Some(variable) => BoundExpression::Variable(variable),
            None => {
                self.diagnostics.report_undefined_name(ident.span, &ident.name);
                BoundExpression::Error
            }
        }
    }

    fn bind_assignment(&mut self, target: &Ident, value: &Expr) -> BoundExpression {
        let bound = self.bind_expression(value, false);

        let Some(variable) = self.arena.lookup_variable(self.scope, &target.name) else {
            self.diagnostics.report_undefined_name(target.span, &target.name);
            return bound;
        };

        if variable.is_read_only() {
            self.diagnostics.report_cannot_assign(target.span, variable.name());
        }

        let actual = bound.ty();
        if !actual.is_error() && !variable.ty().is_error() && actual != variable.ty() {
            self.diagnostics.report_cannot_convert(value.span, actual, variable.ty());
            return bound;
        }

        BoundExpression::assignment(variable, bound)
    }

    fn bind_unary(&mut self, op: Operator, operand: &Expr) -> BoundExpression {
        let operand = self.bind_expression(operand, false);
        if operand.ty().is_error() {
            return BoundExpression::Error;
        }
        match bind_unary(op.kind, operand.ty()) {
            Some(bound_op) => BoundExpression::unary(bound_op, operand),
            None => {
                self.diagnostics
                    .report_undefined_unary_operator(op.span, op.text(), operand.ty());
                BoundExpression::Error
            }
        }
    }

    fn bind_binary(&mut self, left: &Expr, op: Operator, right: &Expr) -> BoundExpression {
        let left = self.bind_expression(left, false);
        let right = self.bind_expression(right, false);
        if left.ty().is_error() || right.ty().is_error() {
            return BoundExpression::Error;
        }
        match bind_binary(op.kind, left.ty(), right.ty()) {
            Some(bound_op) => BoundExpression::binary(left, bound_op, right),
            None => {
                self.diagnostics.report_undefined_binary_operator(
                    op.span,
                    op.text(),
                    left.ty(),
                    right.ty(),
                );
                BoundExpression::Error
            }
        }
    }

    fn bind_call(&mut self, call: &Expr, callee: &Ident, arguments: &[Expr]) -> BoundExpression {
        // `int(x)`, `bool(x)` and `string(x)` are conversions, not calls.
        if let [argument] = arguments {
            if let Some(ty) = TypeSymbol::from_name(&callee.name) {
                return self.bind_conversion(argument, ty);
            }
        }

        let bound_arguments: Vec<_> = arguments
            .iter()
            .map(|argument| self.bind_expression(argument, false))
            .collect();

        let Some(function) = self.arena.lookup_function(self.scope, &callee.name) else {
            self.diagnostics.report_undefined_function(callee.span, &callee.name);
            return BoundExpression::Error;
        };

        if bound_arguments.len() != function.parameters.len() {
            self.diagnostics.report_wrong_argument_count(
                call.span,
                &function.name,
                function.parameters.len(),
                bound_arguments.len(),
            );
            return BoundExpression::Error;
        }

        let mut well_typed = true;
        for ((argument, parameter), syntax) in bound_arguments
            .iter()
            .zip(&function.parameters)
            .zip(arguments)
        {
            let actual = argument.ty();
            if actual.is_error() {
                well_typed = false;
            } else if actual != parameter.ty {
                self.diagnostics.report_wrong_argument_type(
                    syntax.span,
                    &parameter.name,
                    parameter.ty,
                    actual,
                );
                well_typed = false;
            }
        }
        if !well_typed {
            return BoundExpression::Error;
        }

        BoundExpression::Call {
            function,
            arguments: bound_arguments,
        }
    }

    fn bind_conversion(&mut self, syntax: &Expr, ty: TypeSymbol) -> BoundExpression {
        let expression = self.bind_expression(syntax, false);
        let from = expression.ty();
        if from.is_error() {
            return BoundExpression::Error;
        }
        match Conversion::classify(from, ty) {
            Conversion::None => {
                self.diagnostics.report_cannot_convert(syntax.span, from, ty);
                BoundExpression::Error
            }
            Conversion::Identity => expression,
            Conversion::Explicit => BoundExpression::conversion(ty, expression),
        }
    }
}
