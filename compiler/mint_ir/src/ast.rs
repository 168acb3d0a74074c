//! AST node types.
//!
//! `Expr` is a closed sum covering every node the evaluator consumes, with
//! named variant fields and index-based children. Whether a node is legal in
//! expression position or statement position is the evaluator's concern;
//! the data model is uniform.

use crate::{ExprId, ExprRange, SymbolId};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison (yield 1 or 0)
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
        }
    }
}

/// Unary statement operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Emit the operand followed by a newline.
    Print,
    /// Emit the operand followed by a newline.
    Println,
    /// Unwind to the enclosing call boundary with the operand as result.
    /// The operand may be `ExprId::INVALID` for a bare `return`.
    Return,
}

/// Expression node.
///
/// All children are `ExprId` indices into the owning [`ExprArena`];
/// sequences are `ExprRange`s into the arena's list storage.
///
/// [`ExprArena`]: crate::ExprArena
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Integer literal: `42`
    Int(i64),

    /// Symbol reference: `x`
    Var(SymbolId),

    /// Binary operation: `a + b`, `a < b`
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },

    /// Unary statement: `print e`, `println e`, `return e`
    Unary { op: UnaryOp, operand: ExprId },

    /// Assignment: `x = e` (usable as a sub-expression)
    Assign { target: SymbolId, value: ExprId },

    /// Array element assignment: `a[i] = e`
    IndexAssign {
        target: SymbolId,
        index: ExprId,
        value: ExprId,
    },

    /// Array element read: `a[i]`
    Index { target: SymbolId, index: ExprId },

    /// Function call: `f(a, b)`
    Call { callee: SymbolId, args: ExprRange },

    /// Ordered statement sequence: `{ s1; s2; ... }`
    Block(ExprRange),

    /// `for (init; cond; update) body`
    For {
        init: ExprId,
        cond: ExprId,
        update: ExprId,
        body: ExprId,
    },

    /// Variable declaration: `var x;` / `var x = e;`
    /// `init` may be `ExprId::INVALID`.
    VarDecl { sym: SymbolId, init: ExprId },

    /// Array declaration: `array a[n];`
    ArrayDecl { sym: SymbolId, size: ExprId },
}
