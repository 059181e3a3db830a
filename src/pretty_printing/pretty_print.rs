use crate::geometry::Width;
use crate::infra::span;
use crate::notation::Notation;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintingError {
    #[error("Notation contains a Newline inside a Flat, but a Flat must fit on one line.")]
    NewlineInsideFlat,
}

/// Pretty print a notation, returning its lines.
///
/// `width` is the desired line width. The algorithm will attempt to, but is not guaranteed to,
/// find a layout that fits within that width. A line only overflows when some text that has no
/// choice in front of it is too long to fit.
pub fn pretty_print(notation: &Notation, width: Width) -> Result<Vec<String>, PrintingError> {
    span!("pretty_print");

    let mut printer = Printer::new(notation, width);
    printer.print()?;
    Ok(printer.lines)
}

/// Print the entirety of a notation to a single string, with lines separated by `\n`.
pub fn pretty_print_to_string(notation: &Notation, width: Width) -> Result<String, PrintingError> {
    Ok(pretty_print(notation, width)?.join("\n"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Take the left option of every choice. Newlines are forbidden.
    Flat,
    /// Take the left option of a choice only if its first line fits.
    Break,
}

#[derive(Debug, Clone, Copy)]
struct Chunk<'n> {
    indent: Width,
    mode: Mode,
    notation: &'n Notation,
}

impl<'n> Chunk<'n> {
    fn sub_chunk(self, notation: &'n Notation) -> Chunk<'n> {
        Chunk { notation, ..self }
    }
}

/// INVARIANTS:
/// - `col` is always the width of the last line in `lines`
struct Printer<'n> {
    /// Printing width
    width: Width,
    lines: Vec<String>,
    col: Width,
    /// Unresolved notations. Last element is the _leftmost_ chunk.
    chunks: Vec<Chunk<'n>>,
}

impl<'n> Printer<'n> {
    fn new(notation: &'n Notation, width: Width) -> Printer<'n> {
        Printer {
            width,
            lines: vec![String::new()],
            col: 0,
            chunks: vec![Chunk {
                indent: 0,
                mode: Mode::Break,
                notation,
            }],
        }
    }

    fn print(&mut self) -> Result<(), PrintingError> {
        use Notation::*;

        while let Some(chunk) = self.chunks.pop() {
            match chunk.notation {
                Empty => (),
                Literal(lit) => {
                    if let Some(line) = self.lines.last_mut() {
                        line.push_str(lit.str());
                    }
                    self.col = self.col.saturating_add(lit.width());
                }
                Newline => {
                    if chunk.mode == Mode::Flat {
                        return Err(PrintingError::NewlineInsideFlat);
                    }
                    self.lines.push(" ".repeat(chunk.indent as usize));
                    self.col = chunk.indent;
                }
                Flat(note) => self.chunks.push(Chunk {
                    mode: Mode::Flat,
                    ..chunk.sub_chunk(note)
                }),
                Indent(j, note) => self.chunks.push(Chunk {
                    indent: chunk.indent.saturating_add(*j),
                    ..chunk.sub_chunk(note)
                }),
                Concat(note1, note2) => {
                    self.chunks.push(chunk.sub_chunk(note2));
                    self.chunks.push(chunk.sub_chunk(note1));
                }
                Choice(opt1, opt2) => {
                    let choice = if chunk.mode == Mode::Flat || self.fits(chunk.sub_chunk(opt1)) {
                        opt1
                    } else {
                        opt2
                    };
                    self.chunks.push(chunk.sub_chunk(choice));
                }
            }
        }
        Ok(())
    }

    /// Whether `chunk`, followed by everything still waiting to be printed, fits in the remaining
    /// width up to the next newline.
    fn fits(&self, chunk: Chunk<'n>) -> bool {
        use Notation::*;
        span!("fits");

        let mut remaining = self.width as i32 - self.col as i32;
        let mut stack = vec![chunk];
        let mut suffix = self.chunks.iter().rev();
        while remaining >= 0 {
            let chunk = match stack.pop().or_else(|| suffix.next().copied()) {
                None => return true,
                Some(chunk) => chunk,
            };
            match chunk.notation {
                Empty => (),
                Literal(lit) => remaining -= lit.width() as i32,
                Newline => return chunk.mode == Mode::Break,
                Flat(note) => stack.push(Chunk {
                    mode: Mode::Flat,
                    ..chunk.sub_chunk(note)
                }),
                Indent(_, note) => stack.push(chunk.sub_chunk(note)),
                Concat(note1, note2) => {
                    stack.push(chunk.sub_chunk(note2));
                    stack.push(chunk.sub_chunk(note1));
                }
                // Whatever follows is assumed to break as early as it is able to.
                Choice(opt1, opt2) => {
                    let opt = match chunk.mode {
                        Mode::Flat => opt1,
                        Mode::Break => opt2,
                    };
                    stack.push(chunk.sub_chunk(opt));
                }
            }
        }
        false
    }
}
