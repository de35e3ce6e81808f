//! Static site generation on top of [`marksmith_core`].
//!
//! Three small layers turn a content tree into a published site:
//!
//! - [`copy_static`] mirrors the static asset directory into the output
//!   directory, replacing whatever was there.
//! - [`render_page`] fills a template's `{{ Title }}` and
//!   `{{ Content }}` placeholders and rebases absolute `href`/`src`
//!   attributes.
//! - [`generate_page`] / [`generate_pages`] convert one markdown file,
//!   or a whole content tree, into HTML pages in a mirrored layout.
//!
//! All functions are plain synchronous filesystem calls. Batch
//! generation stops at the first failing document.

use std::path::PathBuf;

mod assets;
mod generate;
mod template;

pub use assets::copy_static;
pub use generate::{generate_page, generate_pages};
pub use template::render_page;

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to remove directory {path}: {source}")]
    RemoveDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: marksmith_core::ConvertError,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
