//! Markdown table-of-contents generation.
//!
//! Headings of the form `## [ID] Title` are collected in document order and
//! rendered as a two-column table whose links point at `#{id}-{slug}`
//! anchors.

use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, instrument};

const TABLE_HEADER: [&str; 2] = ["| ID | Title |", "| :--- | :--- |"];

/// Failures while loading the markdown source.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found - {}", .0.display())]
    NotFound(PathBuf),
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A `## [id] title` heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub id: &'a str,
    pub title: &'a str,
}

/// Slugs handed out during one generation run.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    links: HashSet<String>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the slug for `title`, suffixing `-1`, `-2`, ... until it is
    /// unused, and registers the result.
    pub fn generate_link(&mut self, title: &str) -> String {
        let base = slugify(title);
        let mut link = base.clone();
        let mut count = 1;
        while self.links.contains(&link) {
            link = format!("{base}-{count}");
            count += 1;
        }
        self.links.insert(link.clone());
        link
    }
}

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"## \[(.*?)\] (.*)").expect("valid heading regex"))
}

fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\w\s-]").expect("valid strip regex"))
}

fn dash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[-\s]+").expect("valid dash regex"))
}

/// Lowercases `title`, drops punctuation and joins words with single hyphens.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = strip_pattern().replace_all(&lower, "");
    dash_pattern()
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}

/// All headings in `markdown`, in document order. Lines that don't match are
/// skipped.
pub fn headings(markdown: &str) -> Vec<Heading<'_>> {
    heading_pattern()
        .captures_iter(markdown)
        .filter_map(|caps| {
            let id = caps.get(1)?.as_str();
            let title = caps.get(2)?.as_str();
            Some(Heading {
                id,
                title: title.strip_suffix('\r').unwrap_or(title),
            })
        })
        .collect()
}

/// Renders the table of contents for `markdown`.
pub fn generate_toc(markdown: &str) -> String {
    let mut registry = LinkRegistry::new();
    let mut toc: Vec<String> = TABLE_HEADER.iter().map(|l| l.to_string()).collect();
    for Heading { id, title } in headings(markdown) {
        let link = registry.generate_link(title);
        toc.push(format!(
            "| {id} | [{title}](#{}-{link}) |",
            id.to_lowercase()
        ));
    }
    debug!(headings = toc.len() - TABLE_HEADER.len(), "generated table of contents");
    toc.join("\n")
}

/// Reads a markdown file, telling a missing file apart from other failures.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_markdown_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
