#![allow(unused)]

use quoted_pretty_printer::{format_expr, pretty_print, Expr, Notation, PrintOptions, Width};

pub fn print_lines(expr: &Expr, width: Width) -> Vec<String> {
    let options = PrintOptions::new(width).unwrap();
    format_expr(expr, &options)
        .unwrap()
        .split('\n')
        .map(|line| line.to_owned())
        .collect()
}

fn compare_lines(message: &str, actual: &[String], expected: &[&str]) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message,
            expected.join("\n"),
            actual.join("\n"),
        );
        assert_eq!(actual, expected);
    }
}

#[track_caller]
pub fn assert_fmt(expr: &Expr, width: Width, expected_lines: &[&str]) {
    let lines = print_lines(expr, width);
    compare_lines(
        &format!("IN FORMATTING AT WIDTH {}", width),
        &lines,
        expected_lines,
    );
}

#[track_caller]
pub fn assert_pp(notation: &Notation, width: Width, expected_lines: &[&str]) {
    let lines = pretty_print(notation, width).unwrap();
    compare_lines(
        &format!("IN PRETTY PRINTING AT WIDTH {}", width),
        &lines,
        expected_lines,
    );
}
