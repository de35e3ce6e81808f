//! Page templating
//!
//! A template is an ordinary HTML file with two literal placeholders,
//! `{{ Title }}` and `{{ Content }}`. There is no template language
//! beyond plain text substitution.

/// Render a full page from a template.
///
/// Fills the placeholders, then rebases root-relative `href="/` and
/// `src="/` attributes onto `base_path`. The rebase runs after the
/// content substitution, so links inside converted markdown are rebased
/// too. All replacements are literal text matches, not URL aware.
pub fn render_page(template: &str, title: &str, content: &str, base_path: &str) -> String {
    template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", content)
        .replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path))
}
