//! Shorthands for building [`Expr`] trees.

use crate::expr::{Atomic, Expr};

pub fn seq(items: Vec<Expr>) -> Expr {
    Expr::Sequence(items)
}

pub fn map(pairs: Vec<(Expr, Expr)>) -> Expr {
    Expr::Map(pairs)
}

pub fn tuple(items: Vec<Expr>) -> Expr {
    Expr::Tuple(items)
}

pub fn pair(first: Expr, second: Expr) -> Expr {
    Expr::Tuple(vec![first, second])
}

/// A keyword list, `[key: value, ...]`.
pub fn keywords(entries: Vec<(&str, Expr)>) -> Expr {
    Expr::Sequence(
        entries
            .into_iter()
            .map(|(key, value)| pair(sym(key), value))
            .collect(),
    )
}

pub fn fun_ref(name: &str, arity: u32) -> Expr {
    Expr::FunctionRef {
        name: name.to_owned(),
        arity,
    }
}

pub fn neg(inner: Expr) -> Expr {
    Expr::Negate(Box::new(inner))
}

pub fn alias(segments: &[&str]) -> Expr {
    Expr::AliasPath(segments.iter().map(|s| (*s).to_owned()).collect())
}

pub fn anon_call(captured_name: &str, args: Vec<Expr>) -> Expr {
    Expr::AnonymousCall {
        captured_name: captured_name.to_owned(),
        args,
    }
}

pub fn attr(name: &str) -> Expr {
    Expr::AttributeRef(name.to_owned())
}

pub fn attr_set(name: &str, value: Expr) -> Expr {
    Expr::AttributeSet {
        name: name.to_owned(),
        value: Box::new(value),
    }
}

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_owned())
}

pub fn index(base: Expr, key: Expr) -> Expr {
    Expr::IndexAccess {
        base: Box::new(base),
        key: Box::new(key),
    }
}

pub fn qualified(path: Expr, name: &str) -> Expr {
    Expr::QualifiedRef {
        path: Box::new(path),
        name: name.to_owned(),
    }
}

pub fn qualified_call(path: Expr, name: &str, args: Vec<Expr>) -> Expr {
    Expr::QualifiedCall {
        path: Box::new(path),
        name: name.to_owned(),
        args,
    }
}

pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Call {
        name: name.to_owned(),
        args,
    }
}

pub fn sigil(sigil: char, content: &str, modifiers: &str) -> Expr {
    Expr::QuotedLiteral {
        sigil,
        content: content.to_owned(),
        modifiers: modifiers.to_owned(),
    }
}

pub fn sym(name: &str) -> Expr {
    Expr::Atomic(Atomic::Symbol(name.to_owned()))
}

pub fn string(s: &str) -> Expr {
    Expr::Atomic(Atomic::String(s.to_owned()))
}

pub fn int(n: i64) -> Expr {
    Expr::Atomic(Atomic::Integer(n))
}

pub fn float(f: f64) -> Expr {
    Expr::Atomic(Atomic::Float(f))
}
