//! # pagemark
//!
//! Convert a small markdown subset to HTML fragments.
//!
//! The formatter is a fixed pipeline of text rewrites applied over the whole
//! document, in order:
//!
//! 1. `#`, `##`, `###` header lines
//! 2. fenced code blocks (body is HTML-escaped)
//! 3. inline code spans
//! 4. `**bold**` spans
//! 5. `- ` list items, with the first run of items wrapped in `<ul>`
//! 6. blank-line paragraph breaks, with the whole result wrapped in `<p>`
//!
//! There is no parse tree and no nesting awareness. Every input produces some
//! output; malformed input just renders oddly.
//!
//! ## Example
//!
//! ```rust
//! use pagemark::ContentFormatter;
//!
//! let formatter = ContentFormatter::new();
//! let html = formatter.format("# Hello\n\nSome **bold** text");
//! assert_eq!(html, "<p><h1>Hello</h1></p><p>Some <strong>bold</strong> text</p>");
//! ```
//!
//! ## Custom rules
//!
//! ```rust
//! use pagemark::{ContentFormatter, Rule};
//!
//! let mut formatter = ContentFormatter::new();
//! formatter.add_rule("emphasis", Rule::template(r"_([^_]+)_", "<em>$1</em>").unwrap());
//!
//! assert_eq!(formatter.format("_hi_"), "<p><em>hi</em></p>");
//! ```

mod options;
mod rules;
mod service;
mod utilities;

pub use options::{FormatOptions, ListWrapping};
pub use rules::{ReplacementFn, Rule, Rules};
pub use service::{format_content, ContentFormatter};
pub use utilities::*;

/// Error type for pagemark operations
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
