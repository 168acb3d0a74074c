//! Evaluator test suites.
//!
//! The `Program` harness below stands in for the out-of-scope parser: it
//! owns the interner, arena, and symbol table, builds ASTs through the
//! arena constructors, registers function declarations, and runs the
//! program with a capturing print handler.

#![allow(clippy::unwrap_used)]

mod array_tests;

use mint_ir::{ExprArena, ExprId, StringInterner, SymbolId, SymbolTable};

use crate::{buffer_handler, EvalResult, InterpreterBuilder};

/// A program under construction.
pub(crate) struct Program {
    pub interner: StringInterner,
    pub arena: ExprArena,
    pub table: SymbolTable,
}

/// Everything observable about a completed run.
pub(crate) struct RunOutcome {
    pub result: EvalResult,
    pub output: String,
    pub env_depth: usize,
}

impl Program {
    pub fn new() -> Self {
        Program {
            interner: StringInterner::new(),
            arena: ExprArena::new(),
            table: SymbolTable::new(),
        }
    }

    /// Intern a name and get (or lazily create) its symbol.
    pub fn sym(&mut self, name: &str) -> SymbolId {
        let name = self.interner.intern(name);
        self.table.lookup_or_create(name)
    }

    /// Register a function declaration, as the parser would.
    pub fn define(&mut self, name: &str, params: &[SymbolId], body: ExprId) -> SymbolId {
        let id = self.sym(name);
        self.table.define_function(id, params.to_vec(), body);
        id
    }

    /// Register a zero-parameter `main` with the given body statements.
    pub fn define_main(&mut self, stmts: Vec<ExprId>) {
        let body = self.arena.block(stmts);
        self.define("main", &[], body);
    }

    /// Execute the program, capturing print output.
    pub fn run(&mut self) -> RunOutcome {
        let mut interp = InterpreterBuilder::new(&self.interner, &self.arena, &mut self.table)
            .print_handler(buffer_handler())
            .build();
        let result = interp.run();
        RunOutcome {
            result,
            output: interp.output(),
            env_depth: interp.env_depth(),
        }
    }
}
