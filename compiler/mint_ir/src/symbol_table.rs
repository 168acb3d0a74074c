//! Global symbol table.
//!
//! Single mapping from name to the one `Symbol` for that name, created on
//! demand. The table only grows; symbols live until process exit.

use rustc_hash::FxHashMap;

use crate::symbol::{FunctionDef, Symbol, SymbolId, SymbolKind};
use crate::{ExprId, Name};

/// Global mapping from interned name to symbol.
///
/// Created at program start, threaded explicitly into the evaluator, and
/// discarded at process end; there is no ambient global instance.
#[derive(Default)]
pub struct SymbolTable {
    /// Map from name to handle.
    map: FxHashMap<Name, SymbolId>,
    /// Symbol storage (indexed by `SymbolId`).
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the existing symbol for `name`, or create one in `Unbound`
    /// state and insert it.
    ///
    /// This is how every symbol comes into being: parse-time references,
    /// assignment targets, and declarations all funnel through here.
    pub fn lookup_or_create(&mut self, name: Name) -> SymbolId {
        if let Some(&id) = self.map.get(&name) {
            return id;
        }
        let id = SymbolId::new(self.symbols.len() as u32);
        self.symbols.push(Symbol::unbound(name));
        self.map.insert(name, id);
        id
    }

    /// Look up a symbol without creating it.
    ///
    /// Used by the runtime entry point to find `main`; absence there is the
    /// evaluator's `UndefinedSymbol` fatal error.
    pub fn get(&self, name: Name) -> Option<SymbolId> {
        self.map.get(&name).copied()
    }

    /// Get a symbol by handle.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this table.
    #[inline]
    #[track_caller]
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// Get a symbol mutably by handle.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this table.
    #[inline]
    #[track_caller]
    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    /// Register a function declaration.
    ///
    /// Called by the parser once per declaration, before execution begins.
    /// The symbol is expected to still be `Unbound`; redefinition is a
    /// parser bug, not a runtime condition.
    pub fn define_function(&mut self, id: SymbolId, params: Vec<SymbolId>, body: ExprId) {
        let symbol = self.symbol_mut(id);
        debug_assert!(
            matches!(symbol.kind, SymbolKind::Unbound),
            "function defined over a bound symbol"
        );
        symbol.kind = SymbolKind::Function(FunctionDef { params, body });
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    #[test]
    fn lookup_or_create_returns_same_handle() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();
        let x = interner.intern("x");
        let a = table.lookup_or_create(x);
        let b = table.lookup_or_create(x);
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
        assert_eq!(table.symbol(a).kind, SymbolKind::Unbound);
    }

    #[test]
    fn get_does_not_create() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();
        let missing = interner.intern("missing");
        assert!(table.get(missing).is_none());
        let id = table.lookup_or_create(missing);
        assert_eq!(table.get(missing), Some(id));
    }

    #[test]
    fn kind_labels_describe_capability() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();
        let x = table.lookup_or_create(interner.intern("x"));
        assert_eq!(table.symbol(x).kind.label(), "unbound symbol");
        table.symbol_mut(x).kind = SymbolKind::Value(1);
        assert_eq!(table.symbol(x).kind.label(), "variable");
    }

    #[test]
    fn define_function_sets_kind() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();
        let f = table.lookup_or_create(interner.intern("f"));
        let p = table.lookup_or_create(interner.intern("p"));
        table.define_function(f, vec![p], ExprId::new(0));
        match &table.symbol(f).kind {
            SymbolKind::Function(def) => {
                assert_eq!(def.params, vec![p]);
            }
            other => panic!("expected function, got {other:?}"),
        }
    }
}
