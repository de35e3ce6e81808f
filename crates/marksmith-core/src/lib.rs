//! marksmith-core - Markdown to HTML conversion
//!
//! This crate turns a markdown document into a tree of HTML nodes and
//! serializes that tree to an HTML string. It is pure computation: no
//! filesystem access, no templates, no base paths. Those live in
//! `marksmith-site`.
//!
//! # Architecture
//!
//! ```text
//! Markdown Document ──blocks──▶ ┌────────────────┐
//!                               │                │
//!                               │ HTML Node Tree │ ──▶ HTML String
//! Inline Spans ────────────────▶│                │
//!                               └────────────────┘
//! ```
//!
//! The document is cut into blocks at blank lines, each block is
//! classified from its first character, block bodies are tokenized into
//! styled inline spans, and every block becomes one HTML node under a
//! root `<div>`. The document title is extracted independently from the
//! first level-1 heading.
//!
//! # Example
//!
//! ```rust
//! use marksmith_core::{extract_title, markdown_to_html};
//!
//! let doc = "# Hello\n\nSome **bold** text";
//!
//! let title = extract_title(doc).unwrap();
//! let html = markdown_to_html(doc).unwrap();
//!
//! assert_eq!(title, "Hello");
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

mod block;
mod convert;
mod inline;
mod node;
mod span;
mod title;

pub use block::{classify, split_blocks, BlockType};
pub use convert::{markdown_to_html, markdown_to_node};
pub use inline::tokenize;
pub use node::{AttrMap, HtmlNode};
pub use span::{SpanKind, TextSpan};
pub use title::extract_title;

/// Error type for markdown conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unmatched {delimiter:?} delimiter in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("Missing URL in {0:?} span")]
    MissingUrl(String),

    #[error("Element must have a tag")]
    MissingTag,

    #[error("Element <{0}> must have at least one child")]
    EmptyParent(String),

    #[error("No level-1 heading found")]
    MissingTitle,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
