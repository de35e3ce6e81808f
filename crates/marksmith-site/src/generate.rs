//! Page generation

use std::fs;
use std::path::{Path, PathBuf};

use marksmith_core::{extract_title, markdown_to_html};

use crate::template::render_page;
use crate::{Result, SiteError};

/// Convert one markdown file into a rendered HTML page at `dest`.
///
/// Parent directories of `dest` are created as needed.
pub fn generate_page(source: &Path, template: &str, dest: &Path, base_path: &str) -> Result<()> {
    let markdown = fs::read_to_string(source).map_err(|e| SiteError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let title = extract_title(&markdown).map_err(|e| SiteError::Convert {
        path: source.to_path_buf(),
        source: e,
    })?;
    let content = markdown_to_html(&markdown).map_err(|e| SiteError::Convert {
        path: source.to_path_buf(),
        source: e,
    })?;
    let page = render_page(template, &title, &content, base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(dest, page).map_err(|e| SiteError::Write {
        path: dest.to_path_buf(),
        source: e,
    })
}

/// Convert every `.md` file under `content_dir` into an `.html` page
/// under `dest_dir`, mirroring the directory layout.
///
/// Returns the generated page paths. The first failing document aborts
/// the whole batch.
pub fn generate_pages(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>> {
    let mut generated = Vec::new();
    generate_dir_recursive(content_dir, template, dest_dir, base_path, &mut generated)?;
    Ok(generated)
}

fn generate_dir_recursive(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
    base_path: &str,
    generated: &mut Vec<PathBuf>,
) -> Result<()> {
    let entries = fs::read_dir(content_dir).map_err(|e| SiteError::ReadDir {
        path: content_dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| SiteError::ReadDir {
            path: content_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            let sub_dest = dest_dir.join(entry.file_name());
            generate_dir_recursive(&path, template, &sub_dest, base_path, generated)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest, base_path)?;
            generated.push(dest);
        }
    }

    Ok(())
}
