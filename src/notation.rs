use crate::geometry::{str_width, Width};
use std::fmt;
use std::ops::{Add, BitOr, BitXor, Shr};
use std::rc::Rc;

/// Describes how to lay out a piece of formatted source. When constructing a Notation, you should
/// obey one requirement. If you do not, the pretty printer may choose poor layouts.
///
/// > For every choice `(x | y)`, the first line of `x` is shorter than (or equal to) the first
///   line of `y`.
///
/// Additionally, whenever possible the leftmost option of a choice should be flat (contain no
/// newlines). This allows containing notations to use the `Flat` constructor to attempt to fit it
/// in one line.
#[derive(Clone, Debug)]
pub enum Notation {
    /// Display nothing. Identical to `Literal("")`.
    Empty,
    /// Display a newline. If this is inside an `Indent`, the new line will be indented.
    Newline,
    /// Literal text. Cannot contain a newline.
    Literal(Rc<Literal>),
    /// Use the leftmost option of every choice in the contained notation. This must not contain
    /// any hard newlines; hence the name "flat".
    Flat(Rc<Notation>),
    /// Indent all lines of the contained notation except the first to the right by the given
    /// number of spaces.
    Indent(Width, Rc<Notation>),
    /// Display both notations. The first character of the right notation immediately follows the
    /// last character of the left notation. The right notation's indentation level is not
    /// affected.
    Concat(Rc<Notation>, Rc<Notation>),
    /// Display the left notation if its first line fits within the required width or if we're
    /// inside a `Flat`. Otherwise display the right. Make sure your choice obeys the `Notation`
    /// requirements.
    Choice(Rc<Notation>, Rc<Notation>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    string: String,
    /// Number of columns (*not* num bytes!)
    width: Width,
}

impl Literal {
    pub fn new(s: &str) -> Literal {
        debug_assert!(!s.contains('\n'), "Literal contains a newline: {:?}", s);
        Literal {
            string: s.to_owned(),
            width: str_width(s),
        }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn str(&self) -> &str {
        &self.string
    }
}

impl Notation {
    /// The width of this notation when printed flat, or `None` if it contains a hard newline
    /// outside of any choice.
    pub fn flat_width(&self) -> Option<Width> {
        use Notation::*;

        match self {
            Empty => Some(0),
            Newline => None,
            Literal(lit) => Some(lit.width()),
            Flat(note) | Indent(_, note) => note.flat_width(),
            Concat(note1, note2) => Some(note1.flat_width()? + note2.flat_width()?),
            Choice(note1, _) => note1.flat_width(),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Notation::*;

        match self {
            Empty => write!(f, "ε"),
            Newline => write!(f, "↵"),
            Literal(lit) => write!(f, "'{}'", lit.string),
            Flat(note) => write!(f, "Flat({})", note),
            Indent(i, note) => write!(f, "{}⇒({})", i, note),
            Concat(left, right) => write!(f, "{} + {}", left, right),
            Choice(opt1, opt2) => write!(f, "({} | {})", opt1, opt2),
        }
    }
}

impl Add<Notation> for Notation {
    type Output = Notation;

    /// Shorthand for `Concat`.
    fn add(self, other: Notation) -> Notation {
        Notation::Concat(Rc::new(self), Rc::new(other))
    }
}

impl BitOr<Notation> for Notation {
    type Output = Notation;

    /// Shorthand for `Choice`.
    fn bitor(self, other: Notation) -> Notation {
        Notation::Choice(Rc::new(self), Rc::new(other))
    }
}

impl BitXor<Notation> for Notation {
    type Output = Notation;

    /// Shorthand for `X + newline() + Y`.
    fn bitxor(self, other: Notation) -> Notation {
        self + Notation::Newline + other
    }
}

impl Shr<Notation> for Width {
    type Output = Notation;

    /// Shorthand for nesting (indented newline)
    fn shr(self, notation: Notation) -> Notation {
        Notation::Indent(self, Rc::new(Notation::Newline + notation))
    }
}
