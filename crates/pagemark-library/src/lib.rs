//! # pagemark-library
//!
//! The educational article library: a fixed table of articles, written in the
//! pagemark markdown subset, plus renderers for the article index and for a
//! single article view.
//!
//! ## Example
//!
//! ```rust
//! use pagemark::ContentFormatter;
//! use pagemark_library::{article, render_article, Category};
//!
//! let rust = article(10).unwrap();
//! assert_eq!(rust.title, "Rust Ownership System");
//! assert_eq!(rust.category, Category::Advanced);
//!
//! let html = render_article(&ContentFormatter::new(), 10).unwrap();
//! assert!(html.contains("<h1>Rust Ownership System</h1>"));
//! ```

mod article;
mod catalog;
mod render;

pub use article::{Article, Category};
pub use catalog::{article, articles, by_category};
pub use render::{render_article, render_card, render_index};

/// Error type for library lookups
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Article not found: {0}")]
    NotFound(u32),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
