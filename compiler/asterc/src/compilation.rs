//! One submission and the chain of submissions before it.

use std::cell::OnceCell;
use std::rc::Rc;

use aster_bind::{bind_global_scope, GlobalScope};
use aster_diagnostic::Diagnostic;
use aster_eval::{evaluate, Runtime, VariableStore};
use aster_ir::{BoundStatement, Value};
use aster_parse::SyntaxTree;

/// Outcome of evaluating a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Value of the last statement run; `None` when there were
    /// diagnostics or the submission produced no value.
    pub value: Option<Value>,
}

impl EvaluationResult {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A parsed submission chained to the compilations before it.
///
/// Binding happens on first use and at most once; it binds against the
/// previous compilation's global scope, binding that one first if needed.
pub struct Compilation {
    previous: Option<Rc<Compilation>>,
    tree: SyntaxTree,
    global_scope: OnceCell<Rc<GlobalScope>>,
}

impl Compilation {
    pub fn new(tree: SyntaxTree) -> Self {
        Compilation {
            previous: None,
            tree,
            global_scope: OnceCell::new(),
        }
    }

    /// Start a compilation that sees every declaration made so far.
    pub fn continue_with(self: &Rc<Self>, tree: SyntaxTree) -> Compilation {
        Compilation {
            previous: Some(Rc::clone(self)),
            tree,
            global_scope: OnceCell::new(),
        }
    }

    pub fn previous(&self) -> Option<&Rc<Compilation>> {
        self.previous.as_ref()
    }

    pub fn syntax_tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn global_scope(&self) -> &Rc<GlobalScope> {
        self.global_scope.get_or_init(|| {
            let previous = self
                .previous
                .as_ref()
                .map(|previous| Rc::clone(previous.global_scope()));
            Rc::new(bind_global_scope(previous, &self.tree.root))
        })
    }

    /// Syntax diagnostics first, then everything the binder reported.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.tree
            .diagnostics
            .iter()
            .cloned()
            .chain(self.global_scope().diagnostics.iter().cloned())
            .collect()
    }

    /// Bind, lower and run this submission against `store`.
    ///
    /// Nothing runs if any diagnostic was reported. A runtime fault comes
    /// back as a single E6xxx diagnostic spanning the submission.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&self, store: &mut VariableStore, runtime: &mut Runtime) -> EvaluationResult {
        let diagnostics = self.diagnostics();
        if !diagnostics.is_empty() {
            tracing::debug!(count = diagnostics.len(), "skipping evaluation");
            return EvaluationResult {
                diagnostics,
                value: None,
            };
        }

        let program = aster_lower::lower(self.global_scope().statement.clone());
        match evaluate(&program, store, runtime) {
            Ok(value) => EvaluationResult {
                diagnostics,
                value,
            },
            Err(error) => {
                tracing::debug!(%error, "runtime fault");
                EvaluationResult {
                    diagnostics: vec![error.to_diagnostic(self.tree.root.statement.span)],
                    value: None,
                }
            }
        }
    }

    /// The bound statement as indented text.
    pub fn bound_tree(&self) -> String {
        self.global_scope().statement.to_string()
    }

    /// The lowered, flattened program as indented text.
    pub fn lowered_program(&self) -> String {
        let program = aster_lower::lower(self.global_scope().statement.clone());
        BoundStatement::Block(program).to_string()
    }
}
