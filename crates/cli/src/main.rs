//! CLI tool for converting markdown notes into Beamer slide decks.

use anyhow::{Context, Result};
use beamer_core::{BeamerRenderer, Document};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Convert a markdown file into a LaTeX Beamer presentation.
#[derive(Parser, Debug)]
#[command(name = "md2beamer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input markdown file
    #[arg(default_value = "test.md")]
    input: PathBuf,

    /// Output LaTeX file
    #[arg(short, long, default_value = "output.tex")]
    output: PathBuf,

    /// Also print the rendered document to stdout
    #[arg(short, long)]
    print: bool,

    /// Print the plain display of every paragraph instead of rendering
    #[arg(long, conflicts_with = "json")]
    plain: bool,

    /// Print the parsed document model as JSON instead of rendering
    #[arg(long)]
    json: bool,

    /// Document title (default: "Sample title")
    #[arg(long)]
    title: Option<String>,

    /// Document author (default: "Anonymous")
    #[arg(long)]
    author: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    log::info!("Processing: {}", args.input.display());
    let document = read_document(&args.input)?;

    if args.plain {
        print!("{}", document.display_string());
        return Ok(());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize document")?;
        println!("{}", json);
        return Ok(());
    }

    let renderer = build_renderer(&args);
    let output = renderer.render(&document);

    if args.print {
        print!("{}", output);
    }

    write_output(&args.output, &output)?;
    log::info!(
        "Written {} slides to: {}",
        document.slide_count(),
        args.output.display()
    );

    Ok(())
}

/// Read and parse the input file.
fn read_document(input_path: &Path) -> Result<Document> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    beamer_core::parse_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", input_path.display()))
}

/// Configure the renderer from the command-line overrides.
fn build_renderer(args: &Args) -> BeamerRenderer {
    let mut renderer = BeamerRenderer::new();
    if let Some(title) = &args.title {
        renderer = renderer.with_title(title.as_str());
    }
    if let Some(author) = &args.author {
        renderer = renderer.with_author(author.as_str());
    }
    renderer
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("md2beamer-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_paths() {
        let args = Args::parse_from(["md2beamer"]);
        assert_eq!(args.input, PathBuf::from("test.md"));
        assert_eq!(args.output, PathBuf::from("output.tex"));
        assert!(!args.print);
    }

    #[test]
    fn test_explicit_paths() {
        let args = Args::parse_from(["md2beamer", "talk.md", "-o", "talk.tex", "-p"]);
        assert_eq!(args.input, PathBuf::from("talk.md"));
        assert_eq!(args.output, PathBuf::from("talk.tex"));
        assert!(args.print);
    }

    #[test]
    fn test_plain_conflicts_with_json() {
        assert!(Args::try_parse_from(["md2beamer", "--plain", "--json"]).is_err());
    }

    #[test]
    fn test_build_renderer_overrides() {
        let args = Args::parse_from(["md2beamer", "--title", "Talk", "--author", "Me"]);
        let output = build_renderer(&args).render(&Document::new());
        assert!(output.contains("\\title{Talk}"));
        assert!(output.contains("\\author{Me}"));

        let defaults = Args::parse_from(["md2beamer"]);
        let output = build_renderer(&defaults).render(&Document::new());
        assert_eq!(output, Document::new().render());
    }

    #[test]
    fn test_convert_file() {
        let input = temp_path("convert.md");
        let output = temp_path("convert.tex");
        fs::write(&input, "# Intro\nPlain sentence. **Bold** sentence.\n").unwrap();

        let document = read_document(&input).unwrap();
        write_output(&output, &document.render()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("\\section{Intro}\n"));
        assert!(written.contains("\\textbf{Bold} sentence\n"));
        assert!(written.ends_with("\\end{document}\n"));

        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = read_document(&temp_path("does-not-exist.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
