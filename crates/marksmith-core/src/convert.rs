//! Block assembly
//!
//! Drives a whole-document conversion: segment into blocks, classify
//! each, tokenize the inline text, and collect one HTML node per block
//! under a root `div`.

use crate::block::{classify, split_blocks, BlockType};
use crate::inline::tokenize;
use crate::node::{AttrMap, HtmlNode};
use crate::span::{SpanKind, TextSpan};
use crate::{ConvertError, Result};

/// Convert a markdown document to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_node(markdown)?.to_html()
}

/// Convert a markdown document to an HTML node tree rooted at a `div`.
///
/// Any failure aborts the whole document; there is no partial tree.
pub fn markdown_to_node(markdown: &str) -> Result<HtmlNode> {
    let mut children = Vec::new();
    for block in split_blocks(markdown) {
        children.push(block_to_node(block)?);
    }
    HtmlNode::parent("div", children)
}

fn block_to_node(block: &str) -> Result<HtmlNode> {
    match classify(block) {
        BlockType::Paragraph => inline_container("p", block),
        BlockType::Heading => heading_node(block),
        BlockType::Code => code_node(block),
        BlockType::Quote => line_container("blockquote", "p", block, '>'),
        BlockType::UnorderedList => line_container("ul", "li", block, '-'),
        BlockType::OrderedList => line_container("ol", "li", block, '.'),
    }
}

/// Tokenize a block's text, newlines collapsed to spaces, under one tag
fn inline_container(tag: &str, text: &str) -> Result<HtmlNode> {
    let flat = text.replace('\n', " ");
    let spans = tokenize(&flat)?;
    HtmlNode::parent(tag, spans_to_nodes(spans)?)
}

fn heading_node(block: &str) -> Result<HtmlNode> {
    // Classification guarantees 1-6 hashes followed by a space
    let level = block.chars().take_while(|&c| c == '#').count();
    inline_container(&format!("h{}", level), &block[level + 1..])
}

fn code_node(block: &str) -> Result<HtmlNode> {
    // Code content is kept verbatim; inline syntax inside it is literal
    let content = block[3..block.len() - 3].trim_start();
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", content)])
}

/// Build one node per non-empty line, with each line stripped of its
/// leading marker and tokenized independently.
fn line_container(tag: &str, line_tag: &str, block: &str, marker: char) -> Result<HtmlNode> {
    let mut items = Vec::new();

    for line in block.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let rest = match line.find(marker) {
            Some(at) => line[at + 1..].trim(),
            None => line,
        };
        if rest.is_empty() {
            continue;
        }
        let spans = tokenize(rest)?;
        items.push(HtmlNode::parent(line_tag, spans_to_nodes(spans)?)?);
    }

    HtmlNode::parent(tag, items)
}

fn spans_to_nodes(spans: Vec<TextSpan>) -> Result<Vec<HtmlNode>> {
    spans.into_iter().map(span_to_node).collect()
}

fn span_to_node(span: TextSpan) -> Result<HtmlNode> {
    match span.kind {
        SpanKind::Plain => Ok(HtmlNode::text(&span.text)),
        SpanKind::Bold => Ok(HtmlNode::leaf("b", &span.text)),
        SpanKind::Italic => Ok(HtmlNode::leaf("i", &span.text)),
        SpanKind::Code => Ok(HtmlNode::leaf("code", &span.text)),
        SpanKind::Link => {
            let url = span_url(&span)?;
            let mut attrs = AttrMap::new();
            attrs.insert("href".to_string(), url);
            Ok(HtmlNode::leaf_with_attrs("a", &span.text, attrs))
        }
        SpanKind::Image => {
            let url = span_url(&span)?;
            let mut attrs = AttrMap::new();
            attrs.insert("src".to_string(), url);
            attrs.insert("alt".to_string(), span.text);
            HtmlNode::void("img", attrs)
        }
    }
}

fn span_url(span: &TextSpan) -> Result<String> {
    match &span.url {
        Some(url) if !url.is_empty() => Ok(url.clone()),
        _ => Err(ConvertError::MissingUrl(span.text.clone())),
    }
}
