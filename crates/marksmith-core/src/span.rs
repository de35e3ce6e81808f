//! Inline text spans
//!
//! This module defines the typed spans the inline tokenizer produces.
//! Spans are created in left-to-right document order and never mutated.

/// The styling carried by a [`TextSpan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Unstyled text
    Plain,
    /// Strong emphasis (`**`)
    Bold,
    /// Emphasis (`*` or `_`)
    Italic,
    /// Inline code (`` ` ``)
    Code,
    /// Link with display text and target URL
    Link,
    /// Image with alt text and source URL
    Image,
}

/// A contiguous run of inline text with a single styling
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    /// Target URL, present only for link and image spans
    pub url: Option<String>,
}

impl TextSpan {
    /// Create an unstyled span
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SpanKind::Plain,
            url: None,
        }
    }

    /// Create a styled span with no URL
    pub fn styled(text: &str, kind: SpanKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    /// Create a link span
    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SpanKind::Link,
            url: Some(url.to_string()),
        }
    }

    /// Create an image span from its alt text and source URL
    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            text: alt.to_string(),
            kind: SpanKind::Image,
            url: Some(url.to_string()),
        }
    }
}
