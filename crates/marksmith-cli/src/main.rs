use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use marksmith_site::{copy_static, generate_pages};

#[derive(Parser)]
#[command(name = "marksmith")]
#[command(about = "Generate a static HTML site from markdown content")]
struct Cli {
    /// Base URL path the site will be served under
    #[arg(default_value = "/")]
    base_path: String,

    /// Directory holding the markdown content tree
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Directory holding static assets to copy verbatim
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output directory for the generated site
    #[arg(long, default_value = "public")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let template = fs::read_to_string(&cli.template)
        .with_context(|| format!("Failed to read template {}", cli.template.display()))?;

    // The static copy wipes the output directory, so it has to run
    // before any pages land there
    let copied = copy_static(&cli.static_dir, &cli.output)?;
    for path in &copied {
        println!("Copied {}", path.display());
    }

    let generated = generate_pages(&cli.content, &template, &cli.output, &cli.base_path)?;
    for path in &generated {
        println!("Generated {}", path.display());
    }

    Ok(())
}
