//! Free functions for building [`Notation`]s.

use crate::geometry::{str_width, Width};
use crate::notation::{Literal, Notation};
use std::rc::Rc;

pub fn empty() -> Notation {
    Notation::Empty
}

pub fn nl() -> Notation {
    Notation::Newline
}

pub fn lit(s: &str) -> Notation {
    Notation::Literal(Rc::new(Literal::new(s)))
}

pub fn flat(n: Notation) -> Notation {
    Notation::Flat(Rc::new(n))
}

/// Every line break inside `n` is followed by `indent` more columns of indentation.
pub fn nest(indent: Width, n: Notation) -> Notation {
    Notation::Indent(indent, Rc::new(n))
}

pub fn concat(n1: Notation, n2: Notation) -> Notation {
    n1 + n2
}

/* Join */

/// Display `open`, then each item separated by commas, then `close`.
///
/// All the items go on one line if they fit. Otherwise each item goes on its own line, indented
/// by the width of `open`, and `close` follows the last item directly. With no items this is just
/// `open` immediately followed by `close`.
pub fn join<T, O>(
    open: &str,
    items: &[T],
    close: &str,
    options: &O,
    mut format_item: impl FnMut(&T, &O) -> Notation,
) -> Notation {
    if items.is_empty() {
        return lit(&format!("{}{}", open, close));
    }

    let docs = items
        .iter()
        .map(|item| format_item(item, options))
        .collect::<Vec<_>>();
    let single = lit(open) + flat(separated(&docs, || lit(", "))) + lit(close);
    let multi = lit(open) + nest(str_width(open), separated(&docs, || lit(",") + nl())) + lit(close);
    single | multi
}

fn separated(docs: &[Notation], sep: impl Fn() -> Notation) -> Notation {
    let mut iter = docs.iter().cloned();
    let mut accumulator = iter.next().unwrap_or(Notation::Empty);
    for doc in iter {
        accumulator = accumulator + sep() + doc;
    }
    accumulator
}
