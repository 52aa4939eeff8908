//! Markdown loading and front matter parsing.
//!
//! A post file starts with a front matter block of `key: value` lines between two `---`
//! delimiters. Only `title` and `categories` are required; everything else is kept in
//! [`FrontMatter::extra`].
//!
//! ## Frontmatter Format
//!
//! ```yaml
//! ---
//! title: "Article Title"     # double quotes are stripped
//! categories: rust cli tools # whitespace separated tags
//! ---
//! ```
//!
//! Values are taken literally. Splitting happens on the first `": "` of each line, so
//! escaped colons and nested quotes are not interpreted.
//!
//! ## Usage
//!
//! ```rust
//! use medium_pub_rs::markdown::MarkdownParser;
//!
//! # fn example() -> medium_pub_rs::Result<()> {
//! let parser = MarkdownParser::new();
//! let post = parser.parse("---\ntitle: \"Hi\"\ncategories: a b\n---\nBody")?;
//!
//! assert_eq!(post.title, "Hi");
//! assert_eq!(post.tags, vec!["a", "b"]);
//! # Ok(())
//! # }
//! ```

use crate::error::{MediumError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)---(.*?)---").expect("front matter pattern is valid"));

const KEY_VALUE_SEPARATOR: &str = ": ";

/// Raw front matter fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub categories: Option<String>,
    /// Every other key in the block
    pub extra: HashMap<String, String>,
}

impl FrontMatter {
    /// Parses the first `---` delimited block found in `text`.
    pub fn parse(text: &str) -> Result<Self> {
        let block = FRONT_MATTER_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .ok_or(MediumError::FrontMatterNotFound)?;

        let mut front_matter = FrontMatter::default();
        for line in block.as_str().trim().lines() {
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
                tracing::debug!("Skipping front matter line without a value: {line:?}");
                continue;
            };

            front_matter.insert(key.trim(), value.trim().to_string());
        }

        Ok(front_matter)
    }

    fn insert(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = Some(value),
            "categories" => self.categories = Some(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// Post title with every double quote removed.
    pub fn title(&self) -> Result<String> {
        self.title
            .as_deref()
            .map(|title| title.replace('"', ""))
            .ok_or_else(|| MediumError::missing_field("title"))
    }

    /// Tags from splitting `categories` on whitespace.
    pub fn tags(&self) -> Result<Vec<String>> {
        self.categories
            .as_deref()
            .map(|categories| categories.split_whitespace().map(str::to_string).collect())
            .ok_or_else(|| MediumError::missing_field("categories"))
    }

    /// Gets any front matter value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "title" => self.title.as_deref(),
            "categories" => self.categories.as_deref(),
            _ => self.extra.get(key).map(String::as_str),
        }
    }
}

/// A post file with its required metadata resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownPost {
    /// Title with double quotes stripped
    pub title: String,
    /// Tags in the order they appear in `categories`
    pub tags: Vec<String>,
    pub front_matter: FrontMatter,
    /// The whole file, front matter included
    pub original_text: String,
}

/// Markdown parser for post files.
#[derive(Debug, Default)]
pub struct MarkdownParser;

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a post from a string.
    pub fn parse(&self, markdown: &str) -> Result<MarkdownPost> {
        let front_matter = FrontMatter::parse(markdown)?;
        let title = front_matter.title()?;
        let tags = front_matter.tags()?;

        tracing::debug!("Parsed front matter: title={title:?}, tags={tags:?}");

        Ok(MarkdownPost {
            title,
            tags,
            front_matter,
            original_text: markdown.to_string(),
        })
    }

    /// Parses a post from a file.
    pub async fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<MarkdownPost> {
        let content = read_post_file(&path).await?;
        self.parse(&content)
    }
}

/// Reads the full text of a post file.
///
/// The file must be valid UTF-8; anything else is reported as [`MediumError::FileRead`].
pub async fn read_post_file<P: AsRef<Path>>(path: P) -> Result<String> {
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| MediumError::file_error(path.as_ref().display().to_string(), e))
}
