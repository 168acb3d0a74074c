//! Function call protocol.
//!
//! 1. The callee's kind must be `Function`.
//! 2. Argument count must equal parameter count.
//! 3. Arguments evaluate left-to-right in the *caller's* environment —
//!    they must not see the callee's about-to-be-pushed frames.
//! 4. One frame is pushed per parameter, in order; the body block runs.
//! 5. Exactly the pushed frames are popped, in reverse order, on every
//!    exit path (the guard's `Drop` covers the error path).
//! 6. A `Return` flow supplies the result; fall-through yields `0`.

use mint_ir::{Expr, ExprId, ExprRange, Name, SymbolId, SymbolKind};

use super::{Flow, Interpreter};
use crate::environment::Binding;
use crate::errors::{arity_mismatch, not_callable, unbound_symbol, EvalError, EvalResult};

impl Interpreter<'_> {
    /// Call a function symbol with the given argument list.
    pub(crate) fn eval_call(&mut self, callee: SymbolId, args: ExprRange) -> EvalResult {
        let name_str = self.interner.lookup(self.table.symbol(callee).name);
        let def = match &self.table.symbol(callee).kind {
            SymbolKind::Function(def) => def.clone(),
            SymbolKind::Unbound => return Err(unbound_symbol(name_str)),
            SymbolKind::Value(_) | SymbolKind::Array(_) => return Err(not_callable(name_str)),
        };
        if args.len() != def.params.len() {
            return Err(arity_mismatch(name_str, def.params.len(), args.len()));
        }

        let arena = self.arena;
        let mut bindings: Vec<(Name, Binding)> = Vec::with_capacity(args.len());
        for (&arg, &param) in arena.get_expr_list(args).iter().zip(&def.params) {
            let param_name = self.table.symbol(param).name;
            bindings.push((param_name, self.eval_argument(arg)?));
        }

        let mut call = self.bind_parameters(bindings);
        let flow = call.exec_stmt(def.body)?;
        Ok(match flow {
            Flow::Return(value) => value,
            Flow::Normal => 0,
        })
    }

    /// Evaluate one call argument in the caller's environment.
    ///
    /// A direct reference to an array (an array frame or an `Array` symbol)
    /// binds an array snapshot; any other expression evaluates to an
    /// integer.
    fn eval_argument(&mut self, arg: ExprId) -> Result<Binding, EvalError> {
        if let Expr::Var(sym) = *self.arena.get_expr(arg) {
            let name = self.table.symbol(sym).name;
            match self.env.resolve(name) {
                Some(Binding::Array(elements)) => {
                    return Ok(Binding::Array(elements.clone()));
                }
                Some(Binding::Value(_)) => {}
                None => {
                    if let SymbolKind::Array(elements) = &self.table.symbol(sym).kind {
                        return Ok(Binding::Array(elements.clone()));
                    }
                }
            }
        }
        Ok(Binding::Value(self.eval(arg)?))
    }
}
