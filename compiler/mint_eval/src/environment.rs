//! Environment stack for function-call scoping.
//!
//! A single explicit stack of (name, binding) frames rides alongside the
//! host call stack. A function call pushes one frame per parameter and pops
//! exactly that many when it returns; lookup scans from the most recently
//! pushed frame toward the oldest, so the innermost call's bindings shadow
//! outer calls and the global symbol table.
//!
//! Frames are matched by interned name value, not symbol identity, which is
//! what makes a callee parameter shadow a same-named global correctly.

use mint_ir::Name;

/// A transient binding for one parameter of one active call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    /// Integer parameter.
    Value(i64),
    /// Array snapshot parameter.
    Array(Vec<i64>),
}

/// One frame on the environment stack.
#[derive(Clone, Debug)]
struct Frame {
    name: Name,
    binding: Binding,
}

/// Stack of transient parameter bindings.
///
/// Mutated only by the single execution thread; lookup is O(depth), where
/// depth is the number of live parameters across the active call chain.
#[derive(Default)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stack depth (number of live frames).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push an integer binding.
    #[inline]
    pub fn push_binding(&mut self, name: Name, value: i64) {
        self.frames.push(Frame {
            name,
            binding: Binding::Value(value),
        });
    }

    /// Push an array-snapshot binding.
    #[inline]
    pub fn push_array_binding(&mut self, name: Name, elements: Vec<i64>) {
        self.frames.push(Frame {
            name,
            binding: Binding::Array(elements),
        });
    }

    /// Remove the most recently pushed frame (LIFO).
    #[inline]
    pub fn pop_binding(&mut self) {
        self.frames.pop();
    }

    /// Find the innermost binding for `name`, scanning top-down.
    pub fn resolve(&self, name: Name) -> Option<&Binding> {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.name == name)
            .map(|frame| &frame.binding)
    }

    /// Find the innermost binding for `name` for mutation.
    pub fn resolve_mut(&mut self, name: Name) -> Option<&mut Binding> {
        self.frames
            .iter_mut()
            .rev()
            .find(|frame| frame.name == name)
            .map(|frame| &mut frame.binding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_ir::StringInterner;

    #[test]
    fn innermost_frame_shadows_outer() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let mut env = Environment::new();
        env.push_binding(x, 1);
        env.push_binding(x, 2);
        assert_eq!(env.resolve(x), Some(&Binding::Value(2)));
        env.pop_binding();
        assert_eq!(env.resolve(x), Some(&Binding::Value(1)));
        env.pop_binding();
        assert_eq!(env.resolve(x), None);
    }

    #[test]
    fn resolve_matches_by_name_not_position() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let y = interner.intern("y");
        let mut env = Environment::new();
        env.push_binding(x, 10);
        env.push_binding(y, 20);
        assert_eq!(env.resolve(x), Some(&Binding::Value(10)));
        assert_eq!(env.resolve(y), Some(&Binding::Value(20)));
    }

    #[test]
    fn resolve_mut_updates_in_place() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let mut env = Environment::new();
        env.push_binding(x, 1);
        if let Some(Binding::Value(slot)) = env.resolve_mut(x) {
            *slot = 9;
        }
        assert_eq!(env.resolve(x), Some(&Binding::Value(9)));
    }

    #[test]
    fn array_bindings_hold_snapshots() {
        let interner = StringInterner::new();
        let a = interner.intern("a");
        let mut env = Environment::new();
        env.push_array_binding(a, vec![1, 2, 3]);
        assert_eq!(env.resolve(a), Some(&Binding::Array(vec![1, 2, 3])));
        assert_eq!(env.depth(), 1);
    }
}
