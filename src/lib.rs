//! # Medium draft publisher
//!
//! Publishes a Markdown file with a small front matter header to Medium as a draft post.
//!
//! ## Flow
//!
//! 1. Read the file named on the command line
//! 2. Parse `title` and `categories` from the `---` delimited front matter
//! 3. Show what will be posted and wait for a single `y`
//! 4. Create the post with `publishStatus: draft` and print its URL
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medium_pub_rs::{Config, MediumClient, MarkdownParser, Post, Result};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let client = MediumClient::new(Config::from_env()?)?;
//!     let parsed = MarkdownParser::new().parse_file("./post.md").await?;
//!     let published = client.create_post(&Post::from(&parsed)).await?;
//!     println!("Draft created at: {}", published.url);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod confirm;
pub mod error;
pub mod http;
pub mod markdown;
pub mod post;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use client::MediumClient;
pub use config::Config;
pub use confirm::{ReaderConfirmation, StdinConfirmation};
pub use error::{MediumError, Result};
pub use markdown::{FrontMatter, MarkdownParser, MarkdownPost};
pub use post::{Post, PublishedPost};
pub use traits::{ConfirmationProvider, Publisher};
