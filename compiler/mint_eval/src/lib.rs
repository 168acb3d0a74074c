//! Mint Eval - tree-walking evaluator for the mint runtime.
//!
//! This crate executes programs built by the (out-of-scope) parser: a flat
//! AST in a `mint_ir::ExprArena` plus a `mint_ir::SymbolTable` with every
//! function declaration already registered. Execution is single-threaded,
//! purely synchronous recursion.
//!
//! # Architecture
//!
//! - [`Environment`]: the explicit stack of parameter frames that
//!   implements call scoping and shadowing
//! - [`evaluate_binary`]: direct enum-based binary operator dispatch
//! - [`Interpreter`]: expression evaluation, statement sequencing, the
//!   function call protocol, and array state
//! - [`PrintHandler`]: configurable destination for `print`/`println`
//!   output, the run's only observable artifact
//!
//! # Errors
//!
//! Every [`EvalError`] is fatal; it unwinds out of [`Interpreter::run`]
//! with all environment frames released along the way. A host embedding
//! the runtime maps `Ok` to a zero exit status and any error to a non-zero
//! one after printing the diagnostic.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;

#[cfg(test)]
mod tests;

pub use environment::{Binding, Environment};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandler, StdoutPrintHandler,
};

// Error constructors (canonical path is `mint_eval::errors::*`)
pub use errors::{
    arity_mismatch, division_by_zero, index_out_of_range, invalid_array_size, invalid_expression,
    not_a_value, not_an_array, not_assignable, not_callable, unbound_symbol, undefined_symbol,
};
