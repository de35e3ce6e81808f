//! Title extraction

use crate::{ConvertError, Result};

/// Return the text of the document's first level-1 heading.
///
/// Lines are scanned raw, independently of block parsing, so the
/// heading counts even when it is not a block of its own. Each line is
/// trimmed before the `# ` prefix check.
pub fn extract_title(markdown: &str) -> Result<String> {
    for line in markdown.lines() {
        if let Some(title) = line.trim().strip_prefix("# ") {
            return Ok(title.to_string());
        }
    }
    Err(ConvertError::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let md = "# I'm a little program\n# Short and stout\n# Here is my input\n# Here is my out.";
        assert_eq!(extract_title(md).unwrap(), "I'm a little program");
    }

    #[test]
    fn test_extract_title_late() {
        let md = "Wait for it\n#Waait for it\n## Waaait for it\n##Waaaait for it\n# Now! ";
        assert_eq!(extract_title(md).unwrap(), "Now!");
    }

    #[test]
    fn test_extract_title_indented() {
        assert_eq!(extract_title("   # Indented title\t").unwrap(), "Indented title");
    }

    #[test]
    fn test_extract_title_missing() {
        let md = "This is not a title\n#Neither is this\n### Don't look at me\n\
                  There is no # title here";
        let err = extract_title(md).unwrap_err();
        assert!(matches!(err, ConvertError::MissingTitle));
    }
}
