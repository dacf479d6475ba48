use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use whitelist_tools::{logging, toc};

/// Prints a markdown table of contents for `## [ID] Title` headings.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Markdown file to index.
    path: Option<PathBuf>,

    /// Anything after the path is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }

    let Some(path) = cli.path else {
        println!("Usage: toc-generator <path_to_markdown_file>");
        return ExitCode::FAILURE;
    };
    if !cli.ignored.is_empty() {
        tracing::debug!(ignored = ?cli.ignored, "extra arguments ignored");
    }

    // Read failures are reported on stdout and still exit successfully;
    // only a missing argument is a usage error.
    match toc::read_markdown_file(&path) {
        Ok(markdown) => println!("{}", toc::generate_toc(&markdown)),
        Err(e) => {
            tracing::warn!(error = %e, "cannot read markdown");
            println!("Error: {e}");
        }
    }
    ExitCode::SUCCESS
}
