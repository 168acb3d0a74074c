//! Symbol model.
//!
//! One `Symbol` exists per distinct name for the whole program run. A
//! symbol's kind moves along a one-directional path, `Unbound` to exactly
//! one of `Value`, `Array`, or `Function`, and never reverts; the evaluator
//! enforces the legal transitions.

use std::fmt;

use crate::{ExprId, Name};

/// Index into the symbol table's storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create a new `SymbolId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    /// Get the index into the table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// A function definition: ordered parameters and a `Block` body.
///
/// Registered once, at AST-build time; the body is evaluated on every call.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDef {
    /// Parameter symbols, in binding order.
    pub params: Vec<SymbolId>,
    /// Body block (an `Expr::Block` in the arena).
    pub body: ExprId,
}

/// The current capability of a symbol.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SymbolKind {
    /// Looked up but never assigned, declared as an array, or defined as a
    /// function. Referencing an `Unbound` symbol is a runtime error.
    Unbound,
    /// Plain integer variable.
    Value(i64),
    /// Fixed-size, zero-initialized integer buffer.
    Array(Vec<i64>),
    /// Callable function.
    Function(FunctionDef),
}

impl SymbolKind {
    /// Short label for error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            SymbolKind::Unbound => "unbound symbol",
            SymbolKind::Value(_) => "variable",
            SymbolKind::Array(_) => "array",
            SymbolKind::Function(_) => "function",
        }
    }
}

/// The single named binding cell for an identifier.
#[derive(Clone, Debug)]
pub struct Symbol {
    /// Interned name (unique within the table).
    pub name: Name,
    /// Current capability.
    pub kind: SymbolKind,
}

impl Symbol {
    /// Create a fresh `Unbound` symbol.
    pub fn unbound(name: Name) -> Self {
        Symbol {
            name,
            kind: SymbolKind::Unbound,
        }
    }
}
