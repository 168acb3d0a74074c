//! Tree-walking interpreter for mint programs.
//!
//! The interpreter consumes a fully built [`ExprArena`] and a populated
//! [`SymbolTable`] (the lexer and parser live elsewhere) and executes the
//! program rooted at the zero-parameter `main` function.
//!
//! # Architecture
//!
//! - `eval` computes integer values from expression nodes; it recurses
//!   through [`mint_stack::ensure_sufficient_stack`] so deep programs grow
//!   the host stack instead of overflowing it.
//! - `exec_stmt` / `exec_block` drive statements and loops; early `return`
//!   is the [`Flow::Return`] signal, which unwinds every enclosing block
//!   and `for` loop until the call boundary captures it.
//! - `eval_call` (in `call.rs`) implements the call protocol; the frame
//!   guard in `scope_guard.rs` pops exactly the pushed parameter bindings
//!   on every exit path, errors included.
//!
//! All state is threaded explicitly through the struct; there are no
//! ambient globals.

mod builder;
mod call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::CallFrames;

use mint_ir::{
    Expr, ExprArena, ExprId, ExprRange, StringInterner, SymbolId, SymbolKind, SymbolTable, UnaryOp,
};
use mint_stack::ensure_sufficient_stack;

use crate::environment::{Binding, Environment};
use crate::errors::{
    index_out_of_range, invalid_array_size, invalid_expression, not_a_value, not_an_array,
    not_assignable, unbound_symbol, undefined_symbol, EvalError, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::print_handler::PrintHandler;

/// Control signal produced by statement execution.
///
/// `Return` is the only control-flow short-circuit in the language; it
/// propagates outward until the enclosing function call captures the value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Unwind to the call boundary with this result.
    Return(i64),
}

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: &'a ExprArena,
    pub(crate) table: &'a mut SymbolTable,
    pub(crate) env: Environment,
    pub(crate) print_handler: PrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter that prints to stdout.
    pub fn new(
        interner: &'a StringInterner,
        arena: &'a ExprArena,
        table: &'a mut SymbolTable,
    ) -> Self {
        InterpreterBuilder::new(interner, arena, table).build()
    }

    /// Execute the program rooted at `main`.
    ///
    /// `main` must exist in the symbol table (`UndefinedSymbol` otherwise)
    /// and be a zero-parameter function (`NotCallable` / `ArityMismatch`
    /// otherwise). Returns `main`'s result; any error is fatal to the run.
    pub fn run(&mut self) -> EvalResult {
        let main_name = self.interner.intern("main");
        let Some(main) = self.table.get(main_name) else {
            return Err(undefined_symbol("main"));
        };
        self.eval_call(main, ExprRange::EMPTY)
    }

    /// Output captured by the print handler (empty for stdout).
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Current environment stack depth.
    ///
    /// Zero between top-level statements; the frame-balance invariant says
    /// every completed call restores the depth it found.
    pub fn env_depth(&self) -> usize {
        self.env.depth()
    }

    // Expression evaluation

    /// Evaluate an expression node to an integer.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr(id))
    }

    fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        match *self.arena.get_expr(id) {
            Expr::Int(n) => Ok(n),
            Expr::Var(sym) => self.resolve_var(sym),
            Expr::Binary { op, lhs, rhs } => {
                // Eager, left before right, no short-circuiting.
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                evaluate_binary(lhs, rhs, op)
            }
            Expr::Assign { target, value } => {
                let value = self.eval(value)?;
                self.assign(target, value)
            }
            Expr::IndexAssign {
                target,
                index,
                value,
            } => self.eval_index_assign(target, index, value),
            Expr::Index { target, index } => self.eval_index(target, index),
            Expr::Call { callee, args } => self.eval_call(callee, args),
            Expr::Unary { op, .. } => Err(invalid_expression(match op {
                UnaryOp::Print => "print",
                UnaryOp::Println => "println",
                UnaryOp::Return => "return",
            })),
            Expr::Block(_) => Err(invalid_expression("a block")),
            Expr::For { .. } => Err(invalid_expression("a for loop")),
            Expr::VarDecl { .. } | Expr::ArrayDecl { .. } => {
                Err(invalid_expression("a declaration"))
            }
        }
    }

    /// Resolve a symbol reference: environment stack first, then the
    /// global symbol table.
    fn resolve_var(&mut self, sym: SymbolId) -> EvalResult {
        let name = self.table.symbol(sym).name;
        let name_str = self.interner.lookup(name);
        if let Some(binding) = self.env.resolve(name) {
            return match binding {
                Binding::Value(value) => Ok(*value),
                Binding::Array(_) => Err(not_a_value(name_str)),
            };
        }
        match &self.table.symbol(sym).kind {
            SymbolKind::Unbound => Err(unbound_symbol(name_str)),
            SymbolKind::Value(value) => Ok(*value),
            SymbolKind::Array(_) | SymbolKind::Function(_) => Err(not_a_value(name_str)),
        }
    }

    /// Assign to a symbol, returning the assigned value so assignment can
    /// be used as a sub-expression.
    ///
    /// A live environment binding for the name is updated in place (the
    /// callee's own parameter, not the global). Otherwise the table symbol
    /// must be `Unbound` or `Value`; its kind becomes `Value` permanently.
    fn assign(&mut self, target: SymbolId, value: i64) -> EvalResult {
        let name = self.table.symbol(target).name;
        let name_str = self.interner.lookup(name);
        if let Some(binding) = self.env.resolve_mut(name) {
            return match binding {
                Binding::Value(slot) => {
                    *slot = value;
                    Ok(value)
                }
                Binding::Array(_) => Err(not_assignable(name_str)),
            };
        }
        let symbol = self.table.symbol_mut(target);
        if matches!(symbol.kind, SymbolKind::Unbound | SymbolKind::Value(_)) {
            symbol.kind = SymbolKind::Value(value);
            Ok(value)
        } else {
            Err(not_assignable(name_str))
        }
    }

    /// Read `target[index]`.
    fn eval_index(&mut self, target: SymbolId, index: ExprId) -> EvalResult {
        let index = self.eval(index)?;
        let name = self.table.symbol(target).name;
        let name_str = self.interner.lookup(name);
        if let Some(binding) = self.env.resolve(name) {
            return match binding {
                Binding::Array(elements) => read_element(name_str, elements, index),
                Binding::Value(_) => Err(not_an_array(name_str)),
            };
        }
        match &self.table.symbol(target).kind {
            SymbolKind::Array(elements) => read_element(name_str, elements, index),
            _ => Err(not_an_array(name_str)),
        }
    }

    /// Write `target[index] = value`, returning the written value.
    fn eval_index_assign(&mut self, target: SymbolId, index: ExprId, value: ExprId) -> EvalResult {
        let index = self.eval(index)?;
        let value = self.eval(value)?;
        let name = self.table.symbol(target).name;
        let name_str = self.interner.lookup(name);
        if let Some(binding) = self.env.resolve_mut(name) {
            return match binding {
                Binding::Array(elements) => {
                    write_element(name_str, elements, index, value)?;
                    Ok(value)
                }
                Binding::Value(_) => Err(not_an_array(name_str)),
            };
        }
        match &mut self.table.symbol_mut(target).kind {
            SymbolKind::Array(elements) => {
                write_element(name_str, elements, index, value)?;
                Ok(value)
            }
            _ => Err(not_an_array(name_str)),
        }
    }

    /// Declare a fixed-size, zero-initialized array.
    fn declare_array(&mut self, sym: SymbolId, size: ExprId) -> Result<(), EvalError> {
        let size = self.eval(size)?;
        let name = self.table.symbol(sym).name;
        let name_str = self.interner.lookup(name);
        let len = usize::try_from(size).map_err(|_| invalid_array_size(name_str, size))?;
        let symbol = self.table.symbol_mut(sym);
        if matches!(symbol.kind, SymbolKind::Unbound) {
            symbol.kind = SymbolKind::Array(vec![0; len]);
            Ok(())
        } else {
            Err(not_assignable(name_str))
        }
    }

    // Statement execution

    /// Execute the statements of a block in order, stopping at the first
    /// `Return`.
    pub(crate) fn exec_block(&mut self, range: ExprRange) -> Result<Flow, EvalError> {
        let arena = self.arena;
        for &stmt in arena.get_expr_list(range) {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Normal)
    }

    /// Execute a single statement.
    ///
    /// Any expression is a legal statement; its value is discarded.
    pub(crate) fn exec_stmt(&mut self, id: ExprId) -> Result<Flow, EvalError> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: ExprId) -> Result<Flow, EvalError> {
        match *self.arena.get_expr(id) {
            Expr::Block(range) => self.exec_block(range),
            Expr::Unary {
                op: UnaryOp::Print | UnaryOp::Println,
                operand,
            } => {
                let value = self.eval(operand)?;
                self.print_handler.println(&value.to_string());
                Ok(Flow::Normal)
            }
            Expr::Unary {
                op: UnaryOp::Return,
                operand,
            } => {
                // Bare `return` yields the call's default result.
                let value = if operand.is_present() {
                    self.eval(operand)?
                } else {
                    0
                };
                Ok(Flow::Return(value))
            }
            Expr::For {
                init,
                cond,
                update,
                body,
            } => self.exec_for(init, cond, update, body),
            Expr::VarDecl { sym, init } => {
                // Without an initializer the symbol stays `Unbound` until
                // its first assignment.
                if init.is_present() {
                    let value = self.eval(init)?;
                    self.assign(sym, value)?;
                }
                Ok(Flow::Normal)
            }
            Expr::ArrayDecl { sym, size } => {
                self.declare_array(sym, size)?;
                Ok(Flow::Normal)
            }
            _ => {
                self.eval(id)?;
                Ok(Flow::Normal)
            }
        }
    }

    /// `for (init; cond; update) body` — init once, body then update while
    /// the condition is non-zero. A `Return` in the body (or init/update)
    /// aborts the loop and propagates outward.
    fn exec_for(
        &mut self,
        init: ExprId,
        cond: ExprId,
        update: ExprId,
        body: ExprId,
    ) -> Result<Flow, EvalError> {
        match self.exec_stmt(init)? {
            Flow::Normal => {}
            ret @ Flow::Return(_) => return Ok(ret),
        }
        while self.eval(cond)? != 0 {
            match self.exec_stmt(body)? {
                Flow::Normal => {}
                ret @ Flow::Return(_) => return Ok(ret),
            }
            match self.exec_stmt(update)? {
                Flow::Normal => {}
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Normal)
    }
}

/// Bounds-checked array read.
fn read_element(name: &str, elements: &[i64], index: i64) -> EvalResult {
    match usize::try_from(index).ok().filter(|&i| i < elements.len()) {
        Some(i) => Ok(elements[i]),
        None => Err(index_out_of_range(name, index, elements.len())),
    }
}

/// Bounds-checked array write.
fn write_element(name: &str, elements: &mut [i64], index: i64, value: i64) -> Result<(), EvalError> {
    match usize::try_from(index).ok().filter(|&i| i < elements.len()) {
        Some(i) => {
            elements[i] = value;
            Ok(())
        }
        None => Err(index_out_of_range(name, index, elements.len())),
    }
}
