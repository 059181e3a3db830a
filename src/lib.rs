//! A pretty printer for quoted syntax trees: calls, collections, literals, and sigils.
//!
//! [`to_notation`] turns an [`Expr`] into a [`Notation`], a layout document with choices in it,
//! and [`pretty_print`] picks a layout for a given width. [`format_expr`] does both.

mod context;
mod dispatch;
mod expr;
mod geometry;
mod infra;
mod literal;
mod notation;
mod options;
mod pretty_printing;
mod sigil;

pub mod expr_constructors;
pub mod notation_constructors;

pub use context::{Context, Tag};
pub use dispatch::to_notation;
pub use expr::{Atomic, Directive, Expr};
pub use geometry::{str_width, Width};
pub use literal::literal;
pub use notation::{Literal, Notation};
pub use options::{OptionsError, PrintOptions, DEFAULT_MAX_WIDTH};
pub use pretty_printing::{pretty_print, pretty_print_to_string, PrintingError};
pub use sigil::{choose_delimiters, delimiter_candidates, sigil_text, Delimiters};

/// Format a whole tree as source text, with lines no wider than `options.max_width` wherever
/// that's possible.
pub fn format_expr(expr: &Expr, options: &PrintOptions) -> Result<String, PrintingError> {
    let notation = to_notation(expr, &Context::new(*options));
    let lines = pretty_print(&notation, options.max_width)?;
    tracing::debug!(
        max_width = options.max_width,
        lines = lines.len(),
        "formatted expression"
    );
    Ok(lines.join("\n"))
}
