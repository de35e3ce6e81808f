//! Block segmentation and classification
//!
//! A markdown document is cut into blocks at blank lines, and each block
//! is assigned a [`BlockType`] from its first character. Every branch
//! re-validates the whole block, so a block that merely starts like a
//! list or quote falls back to a paragraph.

use once_cell::sync::Lazy;
use regex::Regex;

/// One to six hashes, a space, then at least one non-space character
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6} \S").expect("valid heading regex"));

/// The six shapes a markdown block can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks are separated by blank lines; runs of blank lines (including
/// whitespace-only lines) collapse to nothing. Relative order is
/// preserved, and an empty document yields no blocks.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block of markdown text.
///
/// The decision is keyed on the first character; classification is total,
/// so anything that fails its branch's full-block check is a paragraph.
pub fn classify(block: &str) -> BlockType {
    match block.chars().next() {
        Some('#') => {
            if HEADING_RE.is_match(block) {
                BlockType::Heading
            } else {
                BlockType::Paragraph
            }
        }
        Some('`') => {
            if block.starts_with("```") && block.ends_with("```") && block.len() > 6 {
                BlockType::Code
            } else {
                BlockType::Paragraph
            }
        }
        Some('>') => {
            if block.split('\n').all(|line| line.starts_with('>')) {
                BlockType::Quote
            } else {
                BlockType::Paragraph
            }
        }
        Some('-') => {
            if block.split('\n').all(|line| line.starts_with("- ")) {
                BlockType::UnorderedList
            } else {
                BlockType::Paragraph
            }
        }
        Some('1') => classify_ordered(block),
        _ => BlockType::Paragraph,
    }
}

fn classify_ordered(block: &str) -> BlockType {
    for (index, line) in block.split('\n').enumerate() {
        // Single-character compare: numbering stops matching at item 10
        let expected = char::from_digit(index as u32 + 1, 10);
        let numbered = expected.is_some() && line.chars().next() == expected;
        if !numbered || line.get(1..3) != Some(". ") {
            return BlockType::Paragraph;
        }
    }
    BlockType::OrderedList
}
