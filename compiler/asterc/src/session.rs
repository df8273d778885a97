//! A sequence of submissions sharing declarations and variable values.

use std::rc::Rc;

use aster_eval::{Runtime, VariableStore};
use aster_ir::VariableSymbol;
use rustc_hash::FxHashSet;

use crate::compilation::{Compilation, EvaluationResult};
use crate::config::SessionConfig;

/// Interactive session state.
///
/// Owns the latest successful compilation, whose global scope chain holds
/// every declaration so far, and the store holding their values.
pub struct Session {
    previous: Option<Rc<Compilation>>,
    store: VariableStore,
    runtime: Runtime,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let runtime = Runtime::new(&config.eval_config());
        Session {
            previous: None,
            store: VariableStore::default(),
            runtime,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parse `text` as the next submission without running it.
    pub fn compile(&self, text: &str) -> Rc<Compilation> {
        let tree = aster_parse::parse(text);
        let compilation = match &self.previous {
            Some(previous) => previous.continue_with(tree),
            None => Compilation::new(tree),
        };
        Rc::new(compilation)
    }

    /// Run a compiled submission.
    ///
    /// Only a submission without diagnostics becomes the base for the next
    /// one; a rejected submission leaves no declarations behind. Afterwards
    /// the store holds values only for variables the next submission can see.
    pub fn run(&mut self, compilation: Rc<Compilation>) -> EvaluationResult {
        let result = compilation.evaluate(&mut self.store, &mut self.runtime);
        if result.is_ok() {
            self.previous = Some(compilation);
        }
        self.prune_store();
        tracing::debug!(
            ok = result.is_ok(),
            variables = self.store.len(),
            "submission finished"
        );
        result
    }

    /// Drop values of block locals, loop variables and declarations from
    /// rejected submissions; none of them is in the global scope chain.
    fn prune_store(&mut self) {
        let live: FxHashSet<VariableSymbol> = match &self.previous {
            Some(previous) => previous
                .global_scope()
                .chain()
                .iter()
                .flat_map(|scope| scope.variables.iter().cloned())
                .collect(),
            None => FxHashSet::default(),
        };
        let before = self.store.len();
        self.store.retain(|variable, _| live.contains(variable));
        tracing::trace!(dropped = before - self.store.len(), "pruned store");
    }

    pub fn submit(&mut self, text: &str) -> EvaluationResult {
        let compilation = self.compile(text);
        self.run(compilation)
    }

    /// Everything `print` captured since the last call; empty unless
    /// printing goes to a buffer.
    pub fn take_output(&self) -> String {
        self.runtime.print_handler().take()
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }
}
