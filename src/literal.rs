//! Source syntax for literal leaves: symbols, strings, and numbers.

use crate::expr::Atomic;
use crate::infra::span;
use crate::notation::Notation;
use crate::notation_constructors::lit;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Symbols that are written bare after the `:`, even though they are not identifiers.
static OPERATOR_SYMBOLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "+", "-", "*", "/", "++", "--", "..", "<>", "|>", "<<<", ">>>", "~>>", "<<~", "~>", "<~",
        "<~>", "<|>", "==", "!=", "===", "!==", "<", ">", "<=", ">=", "=~", "&&", "&&&", "||",
        "|||", "!", "^^^", "\\\\", "<-", "::", "@", "&", "^",
    ]
    .iter()
    .copied()
    .collect()
});

/// Display an atomic literal.
pub fn literal(atomic: &Atomic) -> Notation {
    span!("literal");

    match atomic {
        Atomic::Symbol(name) => lit(&symbol_text(name)),
        Atomic::String(s) => lit(&quote_string(s)),
        Atomic::Integer(n) => lit(&n.to_string()),
        Atomic::Float(f) => lit(&float_text(*f)),
    }
}

/// The text of a keyword key, including its trailing colon and space: `name: `.
pub fn keyword_key(name: &str) -> String {
    if is_identifier(name) {
        format!("{}: ", name)
    } else {
        format!("{}: ", quote_string(name))
    }
}

fn symbol_text(name: &str) -> String {
    match name {
        "true" | "false" | "nil" => name.to_owned(),
        _ if is_identifier(name) || OPERATOR_SYMBOLS.contains(name) => format!(":{}", name),
        _ => format!(":{}", quote_string(name)),
    }
}

/// Identifiers start with a letter or underscore, continue with letters, digits, underscores, or
/// `@`, and may end with a single `?` or `!`.
fn is_identifier(name: &str) -> bool {
    let body = name
        .strip_suffix('?')
        .or_else(|| name.strip_suffix('!'))
        .unwrap_or(name);
    let mut chars = body.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '@')
        }
        _ => false,
    }
}

fn quote_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '#' if chars.peek() == Some(&'{') => quoted.push_str("\\#"),
            ch if ch.is_control() => quoted.push_str(&format!("\\x{:02X}", ch as u32)),
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Shortest round-trip form, always with a fractional part: `1.0`, `1.0e20`, `2.5e-7`.
fn float_text(f: f64) -> String {
    let text = format!("{:?}", f);
    match text.find('e') {
        Some(e) if !text[..e].contains('.') => format!("{}.0{}", &text[..e], &text[e..]),
        _ => text,
    }
}
