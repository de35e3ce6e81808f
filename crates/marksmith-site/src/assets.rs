//! Static asset copying

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, SiteError};

/// Mirror the static asset directory into the destination directory.
///
/// An existing destination is deleted first, so the result is an exact
/// copy with no leftovers from previous runs. Returns the destination
/// paths of all copied files.
pub fn copy_static(source: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    if dest.exists() {
        fs::remove_dir_all(dest).map_err(|e| SiteError::RemoveDir {
            path: dest.to_path_buf(),
            source: e,
        })?;
    }
    fs::create_dir_all(dest).map_err(|e| SiteError::CreateDir {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let mut copied = Vec::new();
    copy_dir_recursive(source, dest, &mut copied)?;
    Ok(copied)
}

fn copy_dir_recursive(source: &Path, dest: &Path, copied: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(source).map_err(|e| SiteError::ReadDir {
        path: source.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| SiteError::ReadDir {
            path: source.to_path_buf(),
            source: e,
        })?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            fs::create_dir(&to).map_err(|e| SiteError::CreateDir {
                path: to.clone(),
                source: e,
            })?;
            copy_dir_recursive(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to).map_err(|e| SiteError::Copy {
                path: from.clone(),
                source: e,
            })?;
            copied.push(to);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_static_mirrors_tree() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        let dest = dir.path().join("public");
        write_file(&source.join("index.css"), "body { margin: 0; }");
        write_file(&source.join("images/logo.png"), "not really a png");

        let copied = copy_static(&source, &dest).unwrap();

        assert_eq!(copied.len(), 2);
        assert_eq!(
            fs::read_to_string(dest.join("index.css")).unwrap(),
            "body { margin: 0; }"
        );
        assert_eq!(
            fs::read_to_string(dest.join("images/logo.png")).unwrap(),
            "not really a png"
        );
        assert!(copied.iter().any(|p| p.ends_with("index.css")));
        assert!(copied.iter().any(|p| p.ends_with("images/logo.png")));
    }

    #[test]
    fn test_copy_static_replaces_existing_output() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        let dest = dir.path().join("public");
        write_file(&source.join("index.css"), "fresh");
        write_file(&dest.join("stale.html"), "left over from a previous run");

        copy_static(&source, &dest).unwrap();

        assert!(dest.join("index.css").exists());
        assert!(!dest.join("stale.html").exists());
    }

    #[test]
    fn test_copy_static_empty_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        let dest = dir.path().join("public");
        fs::create_dir(&source).unwrap();

        let copied = copy_static(&source, &dest).unwrap();

        assert!(copied.is_empty());
        assert!(dest.is_dir());
    }

    #[test]
    fn test_copy_static_missing_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("does-not-exist");
        let dest = dir.path().join("public");

        let err = copy_static(&source, &dest).unwrap_err();

        assert!(matches!(err, SiteError::ReadDir { .. }));
        assert!(err.to_string().contains("Failed to read directory"));
    }
}
