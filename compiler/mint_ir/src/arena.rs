//! Arena allocation for the flat AST.
//!
//! All expressions for a program live in one contiguous arena, owned by the
//! arena root for the whole run. Nodes are immutable after allocation; the
//! tree is never mutated or partially freed during execution.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::{ExprId, ExprRange, SymbolId};

/// Contiguous storage for all expressions in a program.
#[derive(Clone, Default)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (for `Block` statements and `Call` args).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds or `ExprId::INVALID`.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of allocated expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate an expression list, returning its range.
    ///
    /// # Panics
    /// Panics if the list exceeds `u16::MAX` entries, the capacity of an
    /// `ExprRange`.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len() as u32;
        self.expr_lists.extend(exprs);
        let len = self.expr_lists.len() as u32 - start;
        let Ok(len) = u16::try_from(len) else {
            panic!("expression list of {len} entries exceeds ExprRange capacity");
        };
        ExprRange::new(start, len)
    }

    /// Get an expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // Parser-facing constructors.
    //
    // These are the construction helpers the (out-of-scope) parser drives;
    // they never fail short of allocation exhaustion.

    /// `n`
    pub fn int(&mut self, n: i64) -> ExprId {
        self.alloc_expr(Expr::Int(n))
    }

    /// `x`
    pub fn var(&mut self, sym: SymbolId) -> ExprId {
        self.alloc_expr(Expr::Var(sym))
    }

    /// `lhs <op> rhs`
    pub fn binary(&mut self, op: BinaryOp, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.alloc_expr(Expr::Binary { op, lhs, rhs })
    }

    /// `print e` / `println e` / `return e`
    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc_expr(Expr::Unary { op, operand })
    }

    /// `return;`
    pub fn bare_return(&mut self) -> ExprId {
        self.alloc_expr(Expr::Unary {
            op: UnaryOp::Return,
            operand: ExprId::INVALID,
        })
    }

    /// `target = value`
    pub fn assign(&mut self, target: SymbolId, value: ExprId) -> ExprId {
        self.alloc_expr(Expr::Assign { target, value })
    }

    /// `target[index]`
    pub fn index(&mut self, target: SymbolId, index: ExprId) -> ExprId {
        self.alloc_expr(Expr::Index { target, index })
    }

    /// `target[index] = value`
    pub fn index_assign(&mut self, target: SymbolId, index: ExprId, value: ExprId) -> ExprId {
        self.alloc_expr(Expr::IndexAssign {
            target,
            index,
            value,
        })
    }

    /// `callee(args...)`
    pub fn call(&mut self, callee: SymbolId, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let args = self.alloc_expr_list(args);
        self.alloc_expr(Expr::Call { callee, args })
    }

    /// `{ stmts... }`
    pub fn block(&mut self, stmts: impl IntoIterator<Item = ExprId>) -> ExprId {
        let range = self.alloc_expr_list(stmts);
        self.alloc_expr(Expr::Block(range))
    }

    /// `for (init; cond; update) body`
    pub fn for_loop(&mut self, init: ExprId, cond: ExprId, update: ExprId, body: ExprId) -> ExprId {
        self.alloc_expr(Expr::For {
            init,
            cond,
            update,
            body,
        })
    }

    /// `var sym = init;` (`init` may be `ExprId::INVALID`)
    pub fn var_decl(&mut self, sym: SymbolId, init: ExprId) -> ExprId {
        self.alloc_expr(Expr::VarDecl { sym, init })
    }

    /// `array sym[size];`
    pub fn array_decl(&mut self, sym: SymbolId, size: ExprId) -> ExprId {
        self.alloc_expr(Expr::ArrayDecl { sym, size })
    }
}
