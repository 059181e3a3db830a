//! Turning syntax tree nodes into notations.

use crate::context::{Context, Tag};
use crate::expr::{has_keyword_keys, is_keyword_list, Atomic, Directive, Expr};
use crate::geometry::str_width;
use crate::infra::span;
use crate::literal::{keyword_key, literal};
use crate::notation::Notation;
use crate::notation_constructors::{concat, join, lit, nest};
use crate::sigil::sigil_text;

/// The notation for `expr`, which sits in `ctx`.
///
/// Each node formats its children in `ctx` with its own tag pushed, so the top tag a node sees
/// is always that of its immediate parent.
pub fn to_notation(expr: &Expr, ctx: &Context) -> Notation {
    use Expr::*;
    span!("to_notation");

    match expr {
        Sequence(items) => sequence(items, ctx),
        Map(pairs) => map(pairs, ctx),
        Tuple(items) => join("{", items, "}", &ctx.push(Tag::Tuple), to_notation),
        FunctionRef { name, arity } => lit(&format!("{}/{}", name, arity)),
        // TODO: `-0` comes out as `0`; keep the sign once nothing depends on the collapse.
        Negate(inner) if inner.is_zero() => lit("0"),
        Negate(inner) => {
            // `--` would read as an operator.
            let sign = if starts_with_minus(inner) { "- " } else { "-" };
            let inner = to_notation(inner, &ctx.push(Tag::Negative));
            lit(sign) + nest(str_width(sign), inner)
        }
        AliasPath(segments) => lit(&segments.join(".")),
        AnonymousCall {
            captured_name,
            args,
        } => call(lit(&format!("{}.", captured_name)), None, args, ctx),
        AttributeRef(name) => lit(&format!("@{}", name)),
        AttributeSet { name, value } => {
            let head = format!("@{} ", name);
            let value = to_notation(value, &ctx.push(Tag::Attribute));
            lit(&head) + nest(str_width(&head), value)
        }
        Identifier(name) => lit(name),
        IndexAccess { base, key } => {
            let inner = ctx.push(Tag::Access);
            let base = to_notation(base, &inner) + lit("[");
            let indent = base.flat_width().unwrap_or(0);
            base + nest(indent, to_notation(key, &inner)) + lit("]")
        }
        QualifiedRef { path, name } => qualified_name(path, name, ctx),
        QualifiedCall { path, name, args } => {
            call(qualified_name(path, name, ctx), None, args, ctx)
        }
        Call { name, args } => call(lit(name), Directive::from_name(name), args, ctx),
        QuotedLiteral {
            sigil,
            content,
            modifiers,
        } => lit(&sigil_text(*sigil, content, modifiers)),
        Expr::Atomic(atomic) => literal(atomic),
    }
}

/// Whether the text of `expr` begins with a minus sign.
fn starts_with_minus(expr: &Expr) -> bool {
    match expr {
        Expr::Negate(inner) => !inner.is_zero(),
        Expr::Atomic(Atomic::Integer(n)) => *n < 0,
        Expr::Atomic(Atomic::Float(f)) => f.is_sign_negative(),
        _ => false,
    }
}

fn sequence(items: &[Expr], ctx: &Context) -> Notation {
    let inner = ctx.push(Tag::List);
    if !is_keyword_list(items) {
        join("[", items, "]", &inner, to_notation)
    } else if ctx.top_is_any_of(&[Tag::Call, Tag::BareCall]) {
        join("", items, "", &inner, keyword_item)
    } else {
        join("[", items, "]", &inner, keyword_item)
    }
}

fn keyword_item(item: &Expr, ctx: &Context) -> Notation {
    match item.as_keyword_pair() {
        Some((key, value)) => keyword_entry(key, value, &ctx.push(Tag::Tuple)),
        None => to_notation(item, ctx),
    }
}

/// `key: value`, with any line breaks in the value aligned after the key.
fn keyword_entry(key: &str, value: &Expr, ctx: &Context) -> Notation {
    let key = keyword_key(key);
    lit(&key) + nest(str_width(&key), to_notation(value, ctx))
}

fn map(pairs: &[(Expr, Expr)], ctx: &Context) -> Notation {
    let inner = ctx.push(Tag::Map);
    let keyword_keys = has_keyword_keys(pairs);
    join("%{", pairs, "}", &inner, |(key, value), ctx| match key {
        Expr::Atomic(Atomic::Symbol(name)) if keyword_keys => keyword_entry(name, value, ctx),
        _ => {
            let key = to_notation(key, ctx) + lit(" => ");
            let indent = key.flat_width().unwrap_or(0);
            key + nest(indent, to_notation(value, ctx))
        }
    })
}

fn qualified_name(path: &Expr, name: &str, ctx: &Context) -> Notation {
    to_notation(path, &ctx.push(Tag::Call)) + lit(".") + lit(name)
}

/// `head(args)`, or `head args` for a directive. Line breaks among the arguments are indented
/// past the head.
fn call(head: Notation, directive: Option<Directive>, args: &[Expr], ctx: &Context) -> Notation {
    let (open, close, tag) = match directive {
        Some(_) if args.is_empty() => return head,
        Some(_) => (" ", "", Tag::BareCall),
        None => ("(", ")", Tag::Call),
    };
    let indent = head.flat_width().unwrap_or(0);
    let args = join(open, args, close, &ctx.push(tag), to_notation);
    concat(head, nest(indent, args))
}
