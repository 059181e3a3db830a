mod pretty_print;

pub use pretty_print::{pretty_print, pretty_print_to_string, PrintingError};
