//! RAII frame guard for call scoping.
//!
//! [`Interpreter::bind_parameters`] pushes one environment frame per
//! parameter and returns a guard; dropping the guard pops exactly that many
//! frames. Because `Drop` runs during `?` unwinding too, the push/pop
//! balance holds on every exit path — normal fall-through, early `return`,
//! and fatal evaluation errors alike.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`,
//! so the call body executes through the guard exactly as it would through
//! the interpreter itself.

use std::ops::{Deref, DerefMut};

use mint_ir::Name;

use super::Interpreter;
use crate::environment::Binding;

/// Guard over the parameter frames of one active call.
pub struct CallFrames<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
    pushed: usize,
}

impl Drop for CallFrames<'_, '_> {
    fn drop(&mut self) {
        for _ in 0..self.pushed {
            self.interpreter.env.pop_binding();
        }
    }
}

impl<'a> Deref for CallFrames<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallFrames<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push the given bindings as frames, in parameter order, returning a
    /// guard that pops them all when dropped.
    pub(crate) fn bind_parameters(
        &mut self,
        bindings: Vec<(Name, Binding)>,
    ) -> CallFrames<'_, 'a> {
        let pushed = bindings.len();
        for (name, binding) in bindings {
            match binding {
                Binding::Value(value) => self.env.push_binding(name, value),
                Binding::Array(elements) => self.env.push_array_binding(name, elements),
            }
        }
        CallFrames {
            interpreter: self,
            pushed,
        }
    }
}
