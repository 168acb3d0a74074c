//! `InterpreterBuilder` for creating interpreter instances.

use mint_ir::{ExprArena, StringInterner, SymbolTable};

use super::Interpreter;
use crate::environment::Environment;
use crate::print_handler::{stdout_handler, PrintHandler};

/// Builder for creating [`Interpreter`] instances.
///
/// The interner, arena, and symbol table are required; the environment and
/// print handler default to empty and stdout. Tests swap in
/// [`buffer_handler`] to capture output.
///
/// [`buffer_handler`]: crate::print_handler::buffer_handler
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    table: &'a mut SymbolTable,
    env: Option<Environment>,
    print_handler: Option<PrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    /// Create a new builder.
    pub fn new(
        interner: &'a StringInterner,
        arena: &'a ExprArena,
        table: &'a mut SymbolTable,
    ) -> Self {
        Self {
            interner,
            arena,
            table,
            env: None,
            print_handler: None,
        }
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the print handler.
    #[must_use]
    pub fn print_handler(mut self, handler: PrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            table: self.table,
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
