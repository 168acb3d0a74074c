//! Tests for array declaration, indexed access, and array-snapshot
//! parameter bindings.

use mint_ir::{SymbolKind, UnaryOp};

use super::Program;
use crate::errors::EvalErrorKind;

#[test]
fn write_then_read_round_trips() {
    // main() { array a[3]; a[2] = 40 + 2; println a[2]; }
    let mut p = Program::new();
    let a = p.sym("a");
    let three = p.arena.int(3);
    let decl = p.arena.array_decl(a, three);
    let idx = p.arena.int(2);
    let forty_two = p.arena.int(42);
    let write = p.arena.index_assign(a, idx, forty_two);
    let idx2 = p.arena.int(2);
    let read = p.arena.index(a, idx2);
    let print_it = p.arena.unary(UnaryOp::Println, read);
    p.define_main(vec![decl, write, print_it]);

    let outcome = p.run();
    assert_eq!(outcome.result, Ok(0));
    assert_eq!(outcome.output, "42\n");
}

#[test]
fn elements_are_zero_initialized() {
    // main() { array a[2]; println a[1]; }
    let mut p = Program::new();
    let a = p.sym("a");
    let two = p.arena.int(2);
    let decl = p.arena.array_decl(a, two);
    let one = p.arena.int(1);
    let read = p.arena.index(a, one);
    let print_it = p.arena.unary(UnaryOp::Println, read);
    p.define_main(vec![decl, print_it]);

    let outcome = p.run();
    assert_eq!(outcome.output, "0\n");
}

#[test]
fn read_past_the_end_is_out_of_range() {
    // main() { array a[3]; a[3]; }
    let mut p = Program::new();
    let a = p.sym("a");
    let three = p.arena.int(3);
    let decl = p.arena.array_decl(a, three);
    let idx = p.arena.int(3);
    let read = p.arena.index(a, idx);
    p.define_main(vec![decl, read]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::IndexOutOfRange {
            name: "a".into(),
            index: 3,
            len: 3
        }
    );
}

#[test]
fn negative_index_is_out_of_range() {
    let mut p = Program::new();
    let a = p.sym("a");
    let three = p.arena.int(3);
    let decl = p.arena.array_decl(a, three);
    let idx = p.arena.int(-1);
    let seven = p.arena.int(7);
    let write = p.arena.index_assign(a, idx, seven);
    p.define_main(vec![decl, write]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::IndexOutOfRange {
            name: "a".into(),
            index: -1,
            len: 3
        }
    );
}

#[test]
fn negative_size_is_invalid() {
    // main() { array a[-2]; }
    let mut p = Program::new();
    let a = p.sym("a");
    let size = p.arena.int(-2);
    let decl = p.arena.array_decl(a, size);
    p.define_main(vec![decl]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::InvalidArraySize {
            name: "a".into(),
            size: -2
        }
    );
}

#[test]
fn zero_size_array_rejects_any_index() {
    let mut p = Program::new();
    let a = p.sym("a");
    let zero = p.arena.int(0);
    let decl = p.arena.array_decl(a, zero);
    let idx = p.arena.int(0);
    let read = p.arena.index(a, idx);
    p.define_main(vec![decl, read]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::IndexOutOfRange {
            name: "a".into(),
            index: 0,
            len: 0
        }
    );
}

#[test]
fn indexing_a_plain_value_is_not_an_array() {
    // main() { x = 1; x[0]; }
    let mut p = Program::new();
    let x = p.sym("x");
    let one = p.arena.int(1);
    let set_x = p.arena.assign(x, one);
    let zero = p.arena.int(0);
    let read = p.arena.index(x, zero);
    p.define_main(vec![set_x, read]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::NotAnArray { name: "x".into() }
    );
}

#[test]
fn assigning_to_an_array_symbol_fails() {
    // main() { array a[2]; a = 5; }
    let mut p = Program::new();
    let a = p.sym("a");
    let two = p.arena.int(2);
    let decl = p.arena.array_decl(a, two);
    let five = p.arena.int(5);
    let set_a = p.arena.assign(a, five);
    p.define_main(vec![decl, set_a]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::NotAssignable { name: "a".into() }
    );
    // Monotonicity: the array is still an array.
    assert!(matches!(p.table.symbol(a).kind, SymbolKind::Array(_)));
}

#[test]
fn redeclaring_a_value_as_an_array_fails() {
    // main() { x = 1; array x[2]; }
    let mut p = Program::new();
    let x = p.sym("x");
    let one = p.arena.int(1);
    let set_x = p.arena.assign(x, one);
    let two = p.arena.int(2);
    let decl = p.arena.array_decl(x, two);
    p.define_main(vec![set_x, decl]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::NotAssignable { name: "x".into() }
    );
}

#[test]
fn array_argument_binds_a_snapshot_frame() {
    // g(b) { return b[0]; } main() { array a[3]; a[0] = 7; return g(a); }
    let mut p = Program::new();
    let a = p.sym("a");
    let b = p.sym("b");

    let zero = p.arena.int(0);
    let read_b = p.arena.index(b, zero);
    let ret_b = p.arena.unary(UnaryOp::Return, read_b);
    let g_body = p.arena.block(vec![ret_b]);
    let g = p.define("g", &[b], g_body);

    let three = p.arena.int(3);
    let decl = p.arena.array_decl(a, three);
    let zero2 = p.arena.int(0);
    let seven = p.arena.int(7);
    let write = p.arena.index_assign(a, zero2, seven);
    let a_ref = p.arena.var(a);
    let call_g = p.arena.call(g, vec![a_ref]);
    let ret = p.arena.unary(UnaryOp::Return, call_g);
    p.define_main(vec![decl, write, ret]);

    let outcome = p.run();
    assert_eq!(outcome.result, Ok(7));
    assert_eq!(outcome.env_depth, 0);
}

#[test]
fn callee_writes_hit_the_snapshot_not_the_global() {
    // h(b) { b[0] = 99; return b[0]; }
    // main() { array a[1]; r = h(a); println r; println a[0]; }
    let mut p = Program::new();
    let a = p.sym("a");
    let b = p.sym("b");
    let r = p.sym("r");

    let zero = p.arena.int(0);
    let ninety_nine = p.arena.int(99);
    let write_b = p.arena.index_assign(b, zero, ninety_nine);
    let zero2 = p.arena.int(0);
    let read_b = p.arena.index(b, zero2);
    let ret_b = p.arena.unary(UnaryOp::Return, read_b);
    let h_body = p.arena.block(vec![write_b, ret_b]);
    let h = p.define("h", &[b], h_body);

    let one = p.arena.int(1);
    let decl = p.arena.array_decl(a, one);
    let a_ref = p.arena.var(a);
    let call_h = p.arena.call(h, vec![a_ref]);
    let set_r = p.arena.assign(r, call_h);
    let r_ref = p.arena.var(r);
    let print_r = p.arena.unary(UnaryOp::Println, r_ref);
    let zero3 = p.arena.int(0);
    let read_a = p.arena.index(a, zero3);
    let print_a = p.arena.unary(UnaryOp::Println, read_a);
    p.define_main(vec![decl, set_r, print_r, print_a]);

    let outcome = p.run();
    assert_eq!(outcome.output, "99\n0\n");
}

#[test]
fn referencing_an_array_as_an_integer_fails() {
    // main() { array a[2]; a + 0; }
    let mut p = Program::new();
    let a = p.sym("a");
    let two = p.arena.int(2);
    let decl = p.arena.array_decl(a, two);
    let a_ref = p.arena.var(a);
    let zero = p.arena.int(0);
    let sum = p.arena.binary(mint_ir::BinaryOp::Add, a_ref, zero);
    p.define_main(vec![decl, sum]);

    let outcome = p.run();
    assert_eq!(
        outcome.result.unwrap_err().kind,
        EvalErrorKind::NotAValue { name: "a".into() }
    );
}
