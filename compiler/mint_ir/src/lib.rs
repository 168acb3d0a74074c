//! Mint IR - data model for the mint runtime core.
//!
//! This crate contains the data structures the evaluator operates on:
//! - `Name` for interned identifiers
//! - Flat AST (`Expr`, `ExprArena`) with index-based child references
//! - The symbol model (`Symbol`, `SymbolKind`) and global `SymbolTable`
//!
//! # Design Philosophy
//!
//! - **Intern everything**: identifiers are `Name(u32)`, symbols are
//!   `SymbolId(u32)`
//! - **Flatten everything**: no `Box<Expr>`, children are `ExprId(u32)`
//!   indices into a contiguous arena
//!
//! The AST is immutable after construction and owned by the arena for the
//! whole program run. The lexer and parser live elsewhere; they build the
//! tree through the constructors on [`ExprArena`] and register function
//! declarations through [`SymbolTable::define_function`] before execution
//! begins.

mod arena;
mod ast;
mod expr_id;
mod interner;
mod name;
mod symbol;
mod symbol_table;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, UnaryOp};
pub use expr_id::{ExprId, ExprRange};
pub use interner::StringInterner;
pub use name::Name;
pub use symbol::{FunctionDef, Symbol, SymbolId, SymbolKind};
pub use symbol_table::SymbolTable;
