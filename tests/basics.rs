mod common;

use common::assert_pp;
use quoted_pretty_printer::notation_constructors::{empty, flat, join, lit, nest, nl};
use quoted_pretty_printer::Notation;

fn words(items: &[&str]) -> Notation {
    join("[", items, "]", &(), |word, _| lit(word))
}

#[test]
fn basics_empty() {
    assert_pp(&empty(), 80, &[""]);
}

#[test]
fn basics_literal() {
    let notation = lit("Hello world!");
    assert_pp(&notation, 80, &["Hello world!"]);
}

#[test]
fn basics_concat() {
    let notation = lit("Hello") + lit(" world!");
    assert_pp(&notation, 80, &["Hello world!"]);
}

#[test]
fn basics_newline() {
    let notation = lit("Hello") ^ lit("world!");
    assert_pp(&notation, 80, &["Hello", "world!"]);
}

#[test]
fn basics_indent() {
    let notation = lit("Hello") + (2 >> lit("world!"));
    assert_pp(&notation, 80, &["Hello", "  world!"]);
}

#[test]
fn basics_nest_is_relative_to_enclosing_indent() {
    let notation = lit("a") + nest(2, nl() + lit("b") + nest(3, nl() + lit("c")) + nl() + lit("d"));
    assert_pp(&notation, 80, &["a", "  b", "     c", "  d"]);
}

#[test]
fn basics_flat() {
    let notation = flat(lit("short") | (lit("a") ^ lit("b")));
    assert_pp(&notation, 2, &["short"]);
}

#[test]
fn basics_choice() {
    let notation = lit("Hello world!") | lit("Hello") ^ lit("world!");
    assert_pp(&notation, 12, &["Hello world!"]);
    assert_pp(&notation, 11, &["Hello", "world!"]);
}

#[test]
fn basics_join_empty() {
    assert_pp(&words(&[]), 1, &["[]"]);
}

#[test]
fn basics_join() {
    let notation = words(&["a", "b", "c"]);
    assert_pp(&notation, 9, &["[a, b, c]"]);
    assert_pp(&notation, 8, &["[a,", " b,", " c]"]);
}

#[test]
fn basics_join_counts_what_follows() {
    // The closing text after the list has to fit on the same line too.
    let notation = words(&["a", "b"]) + lit(";");
    assert_pp(&notation, 7, &["[a, b];"]);
    assert_pp(&notation, 6, &["[a,", " b];"]);
}

#[test]
fn basics_join_nested() {
    let inner = join("(", &["xx", "yy"], ")", &(), |word, _| lit(word));
    let notation = lit("call") + nest(4, join("(", &[inner, lit("zz")], ")", &(), |n, _| n.clone()));
    assert_pp(&notation, 80, &["call((xx, yy), zz)"]);
    assert_pp(&notation, 15, &["call((xx, yy),", "     zz)"]);
    assert_pp(&notation, 10, &["call((xx,", "      yy),", "     zz)"]);
}

#[test]
fn basics_overlong_literal() {
    let notation = words(&["overlong", "x"]);
    assert_pp(&notation, 4, &["[overlong,", " x]"]);
}
