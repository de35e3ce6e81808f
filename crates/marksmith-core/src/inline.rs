//! Inline tokenization
//!
//! Cuts a run of text into typed [`TextSpan`]s through a fixed pipeline:
//! delimiter splits for bold, italic, and code, then image extraction,
//! then link extraction. Each stage only examines spans still typed
//! [`SpanKind::Plain`], so styled spans are never rescanned and emphasis
//! does not nest.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::{SpanKind, TextSpan};
use crate::{ConvertError, Result};

/// `![alt](url)` with bracket-free alt text and parenthesis-free URL
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("valid image regex"));

/// `[text](url)`, which also matches the tail of image syntax
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("valid link regex"));

/// Tokenize a run of text into styled spans.
///
/// The pipeline order is fixed: `**` (bold), `*` (italic), `_` (italic),
/// `` ` `` (code), images, links. An unmatched delimiter fails the whole
/// call rather than producing a partial result.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    spans = split_delimiter(spans, "*", SpanKind::Italic)?;
    spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    spans = split_delimiter(spans, "`", SpanKind::Code)?;
    spans = split_images(spans);
    spans = split_links(spans);
    Ok(spans)
}

/// Partition plain spans on a delimiter, alternating plain and styled
/// pieces. Empty pieces are dropped; an even piece count means the
/// delimiter was left unclosed.
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != SpanKind::Plain {
            result.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(ConvertError::UnmatchedDelimiter {
                delimiter,
                text: span.text,
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextSpan::plain(piece));
            } else {
                result.push(TextSpan::styled(piece, kind));
            }
        }
    }

    Ok(result)
}

/// A single image or link occurrence inside a plain span
struct SyntaxMatch<'t> {
    start: usize,
    end: usize,
    label: &'t str,
    url: &'t str,
}

fn syntax_matches<'t>(re: &Regex, text: &'t str) -> Vec<SyntaxMatch<'t>> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?;
            let url = caps.get(2)?;
            Some(SyntaxMatch {
                start: whole.start(),
                end: whole.end(),
                label: label.as_str(),
                url: url.as_str(),
            })
        })
        .collect()
}

/// Replace every `![alt](url)` occurrence in plain spans with an image
/// span, keeping the surrounding text as new plain spans.
fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != SpanKind::Plain {
            result.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut cursor = 0;
        let mut matched = false;

        for m in syntax_matches(&IMAGE_RE, text) {
            if m.start > cursor {
                result.push(TextSpan::plain(&text[cursor..m.start]));
            }
            result.push(TextSpan::image(m.label, m.url));
            cursor = m.end;
            matched = true;
        }

        if !matched {
            result.push(span);
        } else if cursor < text.len() {
            result.push(TextSpan::plain(&text[cursor..]));
        }
    }

    result
}

/// Replace every `[text](url)` occurrence in plain spans with a link
/// span. A match directly preceded by `!` is image syntax and is left in
/// the surrounding plain text.
fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != SpanKind::Plain {
            result.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut cursor = 0;
        let mut matched = false;

        for m in syntax_matches(&LINK_RE, text) {
            if m.start > 0 && text.as_bytes()[m.start - 1] == b'!' {
                continue;
            }
            if m.start > cursor {
                result.push(TextSpan::plain(&text[cursor..m.start]));
            }
            result.push(TextSpan::link(m.label, m.url));
            cursor = m.end;
            matched = true;
        }

        if !matched {
            result.push(span);
        } else if cursor < text.len() {
            result.push(TextSpan::plain(&text[cursor..]));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_delimiter_split_trailing() {
        let spans = vec![TextSpan::plain("Hello, world. _Here I come!_")];
        assert_eq!(
            split_delimiter(spans, "_", SpanKind::Italic).unwrap(),
            vec![
                TextSpan::plain("Hello, world. "),
                TextSpan::styled("Here I come!", SpanKind::Italic),
            ]
        );
    }

    #[test]
    fn test_delimiter_split_leading() {
        let spans = vec![TextSpan::plain("_Start with italic_ and then plain.")];
        assert_eq!(
            split_delimiter(spans, "_", SpanKind::Italic).unwrap(),
            vec![
                TextSpan::styled("Start with italic", SpanKind::Italic),
                TextSpan::plain(" and then plain."),
            ]
        );
    }

    #[test]
    fn test_delimiter_split_repeated() {
        let spans = vec![TextSpan::plain("Mixing _italic_ and _more italics_ here.")];
        assert_eq!(
            split_delimiter(spans, "_", SpanKind::Italic).unwrap(),
            vec![
                TextSpan::plain("Mixing "),
                TextSpan::styled("italic", SpanKind::Italic),
                TextSpan::plain(" and "),
                TextSpan::styled("more italics", SpanKind::Italic),
                TextSpan::plain(" here."),
            ]
        );
    }

    #[test]
    fn test_delimiter_split_absent() {
        let spans = vec![TextSpan::plain("No delimiters here.")];
        assert_eq!(
            split_delimiter(spans, "_", SpanKind::Italic).unwrap(),
            vec![TextSpan::plain("No delimiters here.")]
        );
    }

    #[test]
    fn test_delimiter_unmatched() {
        let spans = vec![TextSpan::plain("This is _unmatched italic.")];
        let err = split_delimiter(spans, "_", SpanKind::Italic).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnmatchedDelimiter { delimiter: "_", .. }
        ));
    }

    #[test]
    fn test_styled_spans_pass_through() {
        let spans = vec![
            TextSpan::styled("already_bold_text", SpanKind::Bold),
            TextSpan::plain("plain"),
        ];
        // The underscores inside the bold span are not touched
        assert_eq!(
            split_delimiter(spans.clone(), "_", SpanKind::Italic).unwrap(),
            spans
        );
    }

    #[test]
    fn test_image_split() {
        let text = "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif) \
                    and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
        assert_eq!(
            split_images(vec![TextSpan::plain(text)]),
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::image("rick roll", "https://i.imgur.com/aKaOqIh.gif"),
                TextSpan::plain(" and "),
                TextSpan::image("obi wan", "https://i.imgur.com/fJRm4Vk.jpeg"),
            ]
        );
    }

    #[test]
    fn test_image_split_adjacent() {
        let text = "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif)\
                    ![ and obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
        assert_eq!(
            split_images(vec![TextSpan::plain(text)]),
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::image("rick roll", "https://i.imgur.com/aKaOqIh.gif"),
                TextSpan::image(" and obi wan", "https://i.imgur.com/fJRm4Vk.jpeg"),
            ]
        );
    }

    #[test]
    fn test_image_split_absent() {
        let spans = vec![TextSpan::plain("No image here")];
        assert_eq!(split_images(spans.clone()), spans);
    }

    #[test]
    fn test_link_split() {
        let text = "This is text with a link [to boot dev](https://www.boot.dev) \
                    and [to youtube](https://www.youtube.com/@bootdotdev)";
        assert_eq!(
            split_links(vec![TextSpan::plain(text)]),
            vec![
                TextSpan::plain("This is text with a link "),
                TextSpan::link("to boot dev", "https://www.boot.dev"),
                TextSpan::plain(" and "),
                TextSpan::link("to youtube", "https://www.youtube.com/@bootdotdev"),
            ]
        );
    }

    #[test]
    fn test_link_split_adjacent() {
        let text = "This is text with a link [to boot dev](https://www.boot.dev)\
                    [ and to youtube](https://www.youtube.com/@bootdotdev)";
        assert_eq!(
            split_links(vec![TextSpan::plain(text)]),
            vec![
                TextSpan::plain("This is text with a link "),
                TextSpan::link("to boot dev", "https://www.boot.dev"),
                TextSpan::link(" and to youtube", "https://www.youtube.com/@bootdotdev"),
            ]
        );
    }

    #[test]
    fn test_link_split_skips_image_syntax() {
        let text = "This is text with a link [to google](https://www.google.com) \
                    and a ![picture of you](https://example.com/you.jpg)";
        let spans = vec![TextSpan::plain(text)];

        let link_split = split_links(spans.clone());
        assert_eq!(
            link_split,
            vec![
                TextSpan::plain("This is text with a link "),
                TextSpan::link("to google", "https://www.google.com"),
                TextSpan::plain(" and a ![picture of you](https://example.com/you.jpg)"),
            ]
        );

        let image_split = split_images(spans);
        assert_eq!(
            image_split,
            vec![
                TextSpan::plain("This is text with a link [to google](https://www.google.com) and a "),
                TextSpan::image("picture of you", "https://example.com/you.jpg"),
            ]
        );

        // Either extraction order settles on the same spans
        assert_eq!(split_images(link_split), split_links(image_split));
    }

    #[test]
    fn test_tokenize_pipeline() {
        let text = "This is **text** with an _italic_ word and a `code block` \
                    and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) \
                    and a [link](https://boot.dev)";
        assert_eq!(
            tokenize(text).unwrap(),
            vec![
                TextSpan::plain("This is "),
                TextSpan::styled("text", SpanKind::Bold),
                TextSpan::plain(" with an "),
                TextSpan::styled("italic", SpanKind::Italic),
                TextSpan::plain(" word and a "),
                TextSpan::styled("code block", SpanKind::Code),
                TextSpan::plain(" and an "),
                TextSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_odd_delimiters() {
        assert!(tokenize("one `tick").is_err());
        assert!(tokenize("a **b** c **d").is_err());
        assert!(tokenize("a **b** c **d**").is_ok());
    }

    #[test]
    fn test_tokenize_preserves_text() {
        let spans = tokenize("a **b** c _d_ and `e`").unwrap();
        let rebuilt: String = spans.iter().map(|span| span.text.as_str()).collect();
        assert_eq!(rebuilt, "a b c d and e");
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").unwrap(), Vec::<TextSpan>::new());
    }
}
