//! Choosing delimiters for sigils, and escaping their contents.

use crate::infra::span;

/// The character that starts every sigil.
pub const SIGIL_MARKER: char = '~';

/// The sigil whose primary delimiters are slashes.
pub const REGEX_SIGIL: char = 'r';

/// An opening and closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: char,
    pub close: char,
}

const SLASHES: Delimiters = Delimiters {
    open: '/',
    close: '/',
};
const PARENS: Delimiters = Delimiters {
    open: '(',
    close: ')',
};
const BRACKETS: Delimiters = Delimiters {
    open: '[',
    close: ']',
};

/// The preferred delimiters for a sigil, and the ones to use if the content contains the
/// preferred closing delimiter.
pub fn delimiter_candidates(sigil: char) -> (Delimiters, Delimiters) {
    if sigil == REGEX_SIGIL {
        (SLASHES, PARENS)
    } else {
        (PARENS, BRACKETS)
    }
}

/// The delimiters to write `content` with.
pub fn choose_delimiters(sigil: char, content: &str) -> Delimiters {
    let (primary, fallback) = delimiter_candidates(sigil);
    if content.contains(primary.close) {
        fallback
    } else {
        primary
    }
}

/// Write a sigil as source text: marker, sigil character, delimited content, modifiers.
///
/// A closing delimiter in the content gets a backslash unless one already escapes it, and a
/// trailing lone backslash is doubled so it can't escape the closing delimiter. Newlines are
/// written as `\n` so the sigil always stays on one line. Uppercase sigils don't process escapes,
/// so for them a newline reads back as a backslash followed by `n`.
pub fn sigil_text(sigil: char, content: &str, modifiers: &str) -> String {
    span!("sigil_text");

    let delims = choose_delimiters(sigil, content);
    let mut text = String::with_capacity(content.len() + modifiers.len() + 4);
    text.push(SIGIL_MARKER);
    text.push(sigil);
    text.push(delims.open);
    // Length of the run of backslashes just before the current character.
    let mut backslashes = 0;
    for ch in content.chars() {
        match ch {
            '\\' => {
                backslashes += 1;
                text.push(ch);
                continue;
            }
            '\n' => text.push_str("\\n"),
            ch if ch == delims.close && backslashes % 2 == 0 => {
                text.push('\\');
                text.push(ch);
            }
            ch => text.push(ch),
        }
        backslashes = 0;
    }
    if backslashes % 2 == 1 {
        text.push('\\');
    }
    text.push(delims.close);
    text.push_str(modifiers);
    text
}
