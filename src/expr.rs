#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A node of a quoted syntax tree, as produced by a parser.
///
/// Build these with the functions in [`expr_constructors`](crate::expr_constructors).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Expr {
    /// `[a, b]`, or `[a: 1, b: 2]` if every item is a pair with a symbol key.
    Sequence(Vec<Expr>),
    /// `%{a => b}`, or `%{a: b}` if every key is a symbol.
    Map(Vec<(Expr, Expr)>),
    /// `{a, b}`. Two-item pairs are tuples too.
    Tuple(Vec<Expr>),
    /// `name/arity`
    FunctionRef { name: String, arity: u32 },
    /// `-inner`
    Negate(Box<Expr>),
    /// `Foo.Bar`
    AliasPath(Vec<String>),
    /// `fun.(args)`: a call through a captured function.
    AnonymousCall { captured_name: String, args: Vec<Expr> },
    /// `@name`
    AttributeRef(String),
    /// `@name value`
    AttributeSet { name: String, value: Box<Expr> },
    /// A bare variable, or a zero-arity reference.
    Identifier(String),
    /// `base[key]`
    IndexAccess { base: Box<Expr>, key: Box<Expr> },
    /// `path.name`
    QualifiedRef { path: Box<Expr>, name: String },
    /// `path.name(args)`
    QualifiedCall {
        path: Box<Expr>,
        name: String,
        args: Vec<Expr>,
    },
    /// `name(args)`, or `name args` for a bareword [`Directive`].
    Call { name: String, args: Vec<Expr> },
    /// `~r/content/modifiers`
    QuotedLiteral {
        sigil: char,
        content: String,
        modifiers: String,
    },
    Atomic(Atomic),
}

/// A literal leaf value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Atomic {
    Symbol(String),
    String(String),
    Integer(i64),
    Float(f64),
}

/// Call names that are written without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Alias,
    Import,
    Require,
    Use,
}

impl Directive {
    pub fn from_name(name: &str) -> Option<Directive> {
        match name {
            "alias" => Some(Directive::Alias),
            "import" => Some(Directive::Import),
            "require" => Some(Directive::Require),
            "use" => Some(Directive::Use),
            _ => None,
        }
    }
}

impl Expr {
    /// If this is a two-item tuple whose first item is a symbol, its key and value.
    pub fn as_keyword_pair(&self) -> Option<(&str, &Expr)> {
        match self {
            Expr::Tuple(items) => match items.as_slice() {
                [Expr::Atomic(Atomic::Symbol(key)), value] => Some((key.as_str(), value)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether this is the integer literal `0`.
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Atomic(Atomic::Integer(0)))
    }

    /// The number of nodes on the longest path from this node to a leaf, counting both ends.
    ///
    /// Formatting recurses once per level, so callers handling untrusted trees can use this to
    /// reject pathologically deep input.
    pub fn depth(&self) -> usize {
        use Expr::*;

        fn max_depth<'a>(exprs: impl Iterator<Item = &'a Expr>) -> usize {
            exprs.map(Expr::depth).max().unwrap_or(0)
        }

        1 + match self {
            Sequence(items) | Tuple(items) => max_depth(items.iter()),
            Map(pairs) => max_depth(pairs.iter().flat_map(|(k, v)| vec![k, v])),
            Negate(inner) => inner.depth(),
            AnonymousCall { args, .. } | Call { args, .. } => max_depth(args.iter()),
            AttributeSet { value, .. } => value.depth(),
            IndexAccess { base, key } => base.depth().max(key.depth()),
            QualifiedRef { path, .. } => path.depth(),
            QualifiedCall { path, args, .. } => path.depth().max(max_depth(args.iter())),
            FunctionRef { .. }
            | AliasPath(_)
            | AttributeRef(_)
            | Identifier(_)
            | QuotedLiteral { .. }
            | Expr::Atomic(_) => 0,
        }
    }
}

/// Whether every item is a keyword pair. Empty lists are not keyword lists.
pub(crate) fn is_keyword_list(items: &[Expr]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.as_keyword_pair().is_some())
}

/// Whether every key is a symbol. Empty maps are not keyword maps.
pub(crate) fn has_keyword_keys(pairs: &[(Expr, Expr)]) -> bool {
    !pairs.is_empty()
        && pairs
            .iter()
            .all(|(key, _)| matches!(key, Expr::Atomic(Atomic::Symbol(_))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr_constructors::*;

    #[test]
    fn test_keyword_shape() {
        assert!(is_keyword_list(&[pair(sym("a"), int(1)), pair(sym("b"), int(2))]));
        assert!(!is_keyword_list(&[]));
        assert!(!is_keyword_list(&[pair(string("a"), int(1))]));
        assert!(!is_keyword_list(&[tuple(vec![sym("a"), int(1), int(2)])]));
        assert!(!is_keyword_list(&[pair(sym("a"), int(1)), int(2)]));
        assert!(has_keyword_keys(&[(sym("a"), int(1))]));
        assert!(!has_keyword_keys(&[(sym("a"), int(1)), (int(2), int(3))]));
    }

    #[test]
    fn test_depth() {
        assert_eq!(int(1).depth(), 1);
        assert_eq!(seq(vec![]).depth(), 1);
        assert_eq!(call("f", vec![seq(vec![int(1)]), ident("x")]).depth(), 3);
        assert_eq!(map(vec![(sym("a"), neg(neg(int(1))))]).depth(), 4);
    }

    #[test]
    fn test_directive() {
        assert_eq!(Directive::from_name("import"), Some(Directive::Import));
        assert_eq!(Directive::from_name("defmodule"), None);
        assert_eq!(Directive::from_name("Import"), None);
    }
}
