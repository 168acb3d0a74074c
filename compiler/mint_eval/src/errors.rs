//! Runtime error types for the evaluator.
//!
//! Every error here is fatal: it propagates out of [`Interpreter::run`]
//! unhandled, because the language defines no recovery. Environment frames
//! are still released on the error path by the call guard, so a host
//! embedding the runtime can shut down cleanly.
//!
//! Factory functions (e.g. `undefined_symbol(..)`) are the public API for
//! constructing errors; they keep message wording in one place.
//!
//! [`Interpreter::run`]: crate::Interpreter::run

use std::fmt;

/// Result of evaluating an expression.
pub type EvalResult = Result<i64, EvalError>;

/// Typed error category.
///
/// Each variant carries the data for its condition, so callers can match on
/// the kind instead of parsing message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A name that was never declared or assigned was required to exist
    /// (only the `main` entry point triggers this today).
    UndefinedSymbol { name: String },
    /// A symbol was referenced while its kind is still `Unbound`.
    UnboundSymbol { name: String },
    /// Call target is not a function.
    NotCallable { name: String },
    /// Wrong number of call arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Assignment to a function or array symbol.
    NotAssignable { name: String },
    /// An array or function was used where an integer is required.
    NotAValue { name: String },
    /// Indexed access on a non-array symbol.
    NotAnArray { name: String },
    /// Array index outside `0..len`.
    IndexOutOfRange { name: String, index: i64, len: usize },
    /// Array declared with a negative size.
    InvalidArraySize { name: String, size: i64 },
    /// Integer division by zero.
    DivisionByZero,
    /// A statement-only node reached expression position.
    InvalidExpression { what: &'static str },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedSymbol { name } => write!(f, "undefined symbol: {name}"),
            Self::UnboundSymbol { name } => {
                write!(f, "used undefined or uninitialized symbol: {name}")
            }
            Self::NotCallable { name } => write!(f, "'{name}' is not a function"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::NotAssignable { name } => {
                write!(f, "attempt to assign to the unassignable symbol '{name}'")
            }
            Self::NotAValue { name } => {
                write!(f, "'{name}' is not an integer value")
            }
            Self::NotAnArray { name } => write!(f, "'{name}' is not an array"),
            Self::IndexOutOfRange { name, index, len } => {
                write!(f, "index {index} out of range for '{name}' (size {len})")
            }
            Self::InvalidArraySize { name, size } => {
                write!(f, "invalid size {size} for array '{name}'")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidExpression { what } => {
                write!(f, "{what} is not valid in expression position")
            }
        }
    }
}

/// A fatal evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
}

impl EvalError {
    /// Create an error from a kind.
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

// Error constructors

/// A required name was never declared or assigned.
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedSymbol { name: name.into() })
}

/// A symbol was referenced while still `Unbound`.
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UnboundSymbol { name: name.into() })
}

/// Call target is not a function.
pub fn not_callable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { name: name.into() })
}

/// Wrong number of call arguments.
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.into(),
        expected,
        got,
    })
}

/// Assignment to a function or array symbol.
pub fn not_assignable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotAssignable { name: name.into() })
}

/// An array or function was used where an integer is required.
pub fn not_a_value(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotAValue { name: name.into() })
}

/// Indexed access on a non-array symbol.
pub fn not_an_array(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotAnArray { name: name.into() })
}

/// Array index outside `0..len`.
pub fn index_out_of_range(name: &str, index: i64, len: usize) -> EvalError {
    EvalError::new(EvalErrorKind::IndexOutOfRange {
        name: name.into(),
        index,
        len,
    })
}

/// Array declared with a negative size.
pub fn invalid_array_size(name: &str, size: i64) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidArraySize {
        name: name.into(),
        size,
    })
}

/// Integer division by zero.
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

/// A statement-only node reached expression position.
pub fn invalid_expression(what: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidExpression { what })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_identifies_the_offending_symbol() {
        assert_eq!(
            unbound_symbol("x").to_string(),
            "used undefined or uninitialized symbol: x"
        );
        assert_eq!(
            index_out_of_range("a", 3, 3).to_string(),
            "index 3 out of range for 'a' (size 3)"
        );
        assert_eq!(
            arity_mismatch("f", 1, 2).to_string(),
            "f expects 1 argument, got 2"
        );
    }
}
