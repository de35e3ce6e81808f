//! HTML node tree
//!
//! A minimal model of the HTML fragments the converter emits. There is
//! no element catalog and no escaping: tag names, text, and attribute
//! values are rendered verbatim, so content is trusted to be plain prose.

use indexmap::IndexMap;

use crate::{ConvertError, Result};

/// Element attributes, rendered in insertion order
pub type AttrMap = IndexMap<String, String>;

/// A node in the output HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text content, optionally wrapped in a tag. Without a tag the
    /// value is rendered bare.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: AttrMap,
    },
    /// A self-closing element such as `img`, carrying only attributes
    Void { tag: String, attrs: AttrMap },
    /// An element with nested children
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: AttrMap,
    },
}

impl HtmlNode {
    /// Bare text with no surrounding tag
    pub fn text(value: &str) -> HtmlNode {
        HtmlNode::Leaf {
            tag: None,
            value: value.to_string(),
            attrs: AttrMap::new(),
        }
    }

    /// Tagged text, e.g. `<b>bold</b>`
    pub fn leaf(tag: &str, value: &str) -> HtmlNode {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attrs: AttrMap::new(),
        }
    }

    /// Tagged text with attributes, e.g. `<a href="...">link</a>`
    pub fn leaf_with_attrs(tag: &str, value: &str, attrs: AttrMap) -> HtmlNode {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attrs,
        }
    }

    /// Self-closing element. The tag must be non-empty.
    pub fn void(tag: &str, attrs: AttrMap) -> Result<HtmlNode> {
        if tag.is_empty() {
            return Err(ConvertError::MissingTag);
        }
        Ok(HtmlNode::Void {
            tag: tag.to_string(),
            attrs,
        })
    }

    /// Element with children. The tag must be non-empty and at least
    /// one child is required.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<HtmlNode> {
        if tag.is_empty() {
            return Err(ConvertError::MissingTag);
        }
        if children.is_empty() {
            return Err(ConvertError::EmptyParent(tag.to_string()));
        }
        Ok(HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: AttrMap::new(),
        })
    }

    /// Serialize the node and its descendants to an HTML string.
    ///
    /// Children are concatenated with no separators. Constructor
    /// invariants are checked again here, since nodes can also be built
    /// directly from the enum variants.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                out.push('<');
                out.push_str(tag);
                push_attrs(out, attrs);
                out.push('>');
                out.push_str(value);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            HtmlNode::Void { tag, attrs } => {
                if tag.is_empty() {
                    return Err(ConvertError::MissingTag);
                }
                out.push('<');
                out.push_str(tag);
                push_attrs(out, attrs);
                out.push_str(" />");
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(ConvertError::MissingTag);
                }
                if children.is_empty() {
                    return Err(ConvertError::EmptyParent(tag.clone()));
                }
                out.push('<');
                out.push_str(tag);
                push_attrs(out, attrs);
                out.push('>');
                for child in children {
                    child.write_html(out)?;
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Ok(())
    }
}

fn push_attrs(out: &mut String, attrs: &AttrMap) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
