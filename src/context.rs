use crate::options::PrintOptions;
use std::sync::Arc;

/// The kind of an enclosing node, as far as formatting rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The items of a `Sequence`.
    List,
    /// The keys and values of a `Map`.
    Map,
    /// The items of a `Tuple`, and the value of a keyword pair.
    Tuple,
    /// The operand of a `Negate`.
    Negative,
    /// The value of an `AttributeSet`.
    Attribute,
    /// The base and key of an `IndexAccess`.
    Access,
    /// The arguments of a parenthesized call, and the path of a qualified reference.
    Call,
    /// The arguments of a bareword directive.
    BareCall,
}

/// Where a node sits in the tree: the tags of its ancestors, innermost first, together with the
/// options in effect. Contexts are immutable; [`Context::push`] makes a new one that shares its
/// ancestors with the old.
#[derive(Debug, Clone)]
pub struct Context {
    ancestors: Option<Arc<Frame>>,
    options: PrintOptions,
}

#[derive(Debug)]
struct Frame {
    tag: Tag,
    parent: Option<Arc<Frame>>,
}

impl Context {
    /// A context with no ancestors, for the root of a tree.
    pub fn new(options: PrintOptions) -> Context {
        Context {
            ancestors: None,
            options,
        }
    }

    /// The context for the children of a node with the given tag.
    #[must_use]
    pub fn push(&self, tag: Tag) -> Context {
        Context {
            ancestors: Some(Arc::new(Frame {
                tag,
                parent: self.ancestors.clone(),
            })),
            options: self.options,
        }
    }

    /// The tag of the immediate parent, if any.
    pub fn top(&self) -> Option<Tag> {
        self.ancestors.as_ref().map(|frame| frame.tag)
    }

    pub fn top_is_any_of(&self, tags: &[Tag]) -> bool {
        self.top().map_or(false, |tag| tags.contains(&tag))
    }

    /// Ancestor tags, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = Tag> + '_ {
        let mut remaining = self.ancestors.as_deref();
        std::iter::from_fn(move || {
            let frame = remaining?;
            remaining = frame.parent.as_deref();
            Some(frame.tag)
        })
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Context) -> bool {
        self.options == other.options && self.ancestors().eq(other.ancestors())
    }
}

impl Eq for Context {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_does_not_mutate() {
        let root = Context::new(PrintOptions::default());
        let call = root.push(Tag::Call);
        let list = call.push(Tag::List);
        let tuple = call.push(Tag::Tuple);

        assert_eq!(root.top(), None);
        assert_eq!(root.depth(), 0);
        assert_eq!(call.top(), Some(Tag::Call));
        assert_eq!(list.ancestors().collect::<Vec<_>>(), vec![Tag::List, Tag::Call]);
        assert_eq!(tuple.ancestors().collect::<Vec<_>>(), vec![Tag::Tuple, Tag::Call]);
        assert_eq!(list.options(), root.options());
    }

    #[test]
    fn test_top_is_any_of() {
        let root = Context::new(PrintOptions::default());
        assert!(!root.top_is_any_of(&[Tag::Call, Tag::BareCall]));

        let bare = root.push(Tag::BareCall);
        assert!(bare.top_is_any_of(&[Tag::Call, Tag::BareCall]));

        // Only the immediate parent counts.
        let nested = bare.push(Tag::Tuple);
        assert!(!nested.top_is_any_of(&[Tag::Call, Tag::BareCall]));
    }

    #[test]
    fn test_structural_equality() {
        let opts = PrintOptions::default();
        let a = Context::new(opts).push(Tag::Map).push(Tag::Access);
        let b = Context::new(opts).push(Tag::Map).push(Tag::Access);
        assert_eq!(a, b);
        assert_ne!(a, Context::new(opts).push(Tag::Access));
    }

    #[test]
    fn test_shareable_across_threads() {
        let ctx = Context::new(PrintOptions::default()).push(Tag::List);
        let handles = (0..4)
            .map(|_| {
                let ctx = ctx.clone();
                std::thread::spawn(move || ctx.push(Tag::Call).depth())
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
