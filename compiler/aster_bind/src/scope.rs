//! Lexical scopes as an arena of records linked by parent index.
//!
//! The binder pushes a child scope for every block and `for` body and pops
//! back to the parent when it ends. Scopes are never freed during one bind,
//! so a [`ScopeId`] stays valid for the arena's lifetime.

use aster_ir::{FunctionSymbol, Symbol, VariableSymbol};
use rustc_hash::FxHashMap;

/// Handle to a scope in a [`ScopeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default)]
struct ScopeData {
    parent: Option<ScopeId>,
    symbols: FxHashMap<String, Symbol>,
    /// Names in first-declaration order.
    order: Vec<String>,
}

/// Arena of scopes.
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<ScopeData>,
}

impl ScopeArena {
    pub fn new() -> Self {
        ScopeArena::default()
    }

    /// Allocate a scope with no parent.
    pub fn root(&mut self) -> ScopeId {
        self.alloc(None)
    }

    /// Allocate a scope whose lookups fall back to `parent`.
    pub fn child(&mut self, parent: ScopeId) -> ScopeId {
        self.alloc(Some(parent))
    }

    fn alloc(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = u32::try_from(self.scopes.len()).unwrap_or(u32::MAX);
        self.scopes.push(ScopeData {
            parent,
            ..ScopeData::default()
        });
        ScopeId(id)
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.index()].parent
    }

    /// Declare `symbol` in `scope`.
    ///
    /// Returns `false`, leaving the scope unchanged, when `scope` itself
    /// already holds the name. Ancestors do not count: shadowing is legal.
    pub fn try_declare(&mut self, scope: ScopeId, symbol: Symbol) -> bool {
        let data = &mut self.scopes[scope.index()];
        if data.symbols.contains_key(symbol.name()) {
            return false;
        }
        let name = symbol.name().to_owned();
        data.order.push(name.clone());
        data.symbols.insert(name, symbol);
        true
    }

    /// Declare `symbol` in `scope`, replacing any symbol of the same name.
    pub fn declare_or_replace(&mut self, scope: ScopeId, symbol: Symbol) {
        let data = &mut self.scopes[scope.index()];
        let name = symbol.name().to_owned();
        if !data.symbols.contains_key(&name) {
            data.order.push(name.clone());
        }
        data.symbols.insert(name, symbol);
    }

    /// Find the nearest symbol named `name`, starting at `scope`.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let data = &self.scopes[id.index()];
            if let Some(symbol) = data.symbols.get(name) {
                return Some(symbol);
            }
            current = data.parent;
        }
        None
    }

    /// Nearest variable named `name`.
    ///
    /// The walk stops at the first scope holding the name at all, so a
    /// function declared closer in hides an outer variable.
    pub fn lookup_variable(&self, scope: ScopeId, name: &str) -> Option<VariableSymbol> {
        match self.lookup(scope, name) {
            Some(Symbol::Variable(variable)) => Some(variable.clone()),
            _ => None,
        }
    }

    /// Nearest function named `name`; see [`ScopeArena::lookup_variable`].
    pub fn lookup_function(&self, scope: ScopeId, name: &str) -> Option<FunctionSymbol> {
        match self.lookup(scope, name) {
            Some(Symbol::Function(function)) => Some(function.clone()),
            _ => None,
        }
    }

    /// Variables declared directly in `scope`, in declaration order.
    pub fn declared_variables(&self, scope: ScopeId) -> Vec<VariableSymbol> {
        let data = &self.scopes[scope.index()];
        data.order
            .iter()
            .filter_map(|name| match data.symbols.get(name) {
                Some(Symbol::Variable(variable)) => Some(variable.clone()),
                _ => None,
            })
            .collect()
    }

    /// Functions declared directly in `scope`, in declaration order.
    pub fn declared_functions(&self, scope: ScopeId) -> Vec<FunctionSymbol> {
        let data = &self.scopes[scope.index()];
        data.order
            .iter()
            .filter_map(|name| match data.symbols.get(name) {
                Some(Symbol::Function(function)) => Some(function.clone()),
                _ => None,
            })
            .collect()
    }
}
