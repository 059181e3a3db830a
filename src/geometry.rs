use unicode_width::UnicodeWidthStr;

/// Width, measured in display columns.
pub type Width = u16;

/// The number of columns `s` occupies when displayed. Wide characters count as two columns.
pub fn str_width(s: &str) -> Width {
    UnicodeWidthStr::width(s) as Width
}
