//! Command line surface and the load → parse → confirm → publish flow.

use crate::error::Result;
use crate::markdown::{MarkdownParser, read_post_file};
use crate::post::{Post, PublishedPost};
use crate::traits::{ConfirmationProvider, Publisher};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Publish a front matter Markdown file to Medium as a draft.
#[derive(Parser, Debug)]
#[command(name = "medium-pub", version, about)]
pub struct Cli {
    /// Markdown file with `title` and `categories` front matter
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Published(PublishedPost),
    Declined,
}

/// Loads and parses `path`, asks for confirmation, and publishes on a `y`.
///
/// Parsing happens before the prompt, so a malformed file never reaches the publisher.
/// Declining is a normal outcome, not an error.
pub async fn run<P, C, W>(
    path: &Path,
    publisher: &P,
    confirmation: &mut C,
    out: &mut W,
) -> Result<Outcome>
where
    P: Publisher + ?Sized,
    C: ConfirmationProvider + ?Sized,
    W: Write,
{
    let content = read_post_file(path).await?;
    let parsed = MarkdownParser::new().parse(&content)?;

    write_prompt(out, path, &parsed.title, &parsed.tags)?;

    if !confirmation.confirm()? {
        writeln!(out, "Bye! :-)")?;
        return Ok(Outcome::Declined);
    }

    writeln!(out, "Publish post ...")?;
    out.flush()?;

    let published = publisher.publish(&Post::from(&parsed)).await?;

    writeln!(out, "Check your post at '{}'", published.url)?;
    Ok(Outcome::Published(published))
}

fn write_prompt<W: Write>(out: &mut W, path: &Path, title: &str, tags: &[String]) -> Result<()> {
    writeln!(out, "Do you want to post file '{}'? N/y", path.display())?;
    writeln!(out)?;
    writeln!(out, "Title:")?;
    writeln!(out)?;
    writeln!(out, "\t{title}")?;
    writeln!(out)?;
    writeln!(out, "Tags:")?;
    writeln!(out, "\t{}", tags.join(", "))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediumError;
    use crate::post::{ContentFormat, PublishStatus};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "---\ntitle: \"My Post\"\ncategories: tech life\n---\nBody text here.\n";

    #[derive(Default)]
    struct RecordingPublisher {
        calls: Mutex<Vec<Post>>,
        fail: bool,
    }

    #[async_trait]
    impl Publisher for RecordingPublisher {
        async fn publish(&self, post: &Post) -> Result<PublishedPost> {
            self.calls.lock().unwrap().push(post.clone());
            if self.fail {
                return Err(MediumError::from_api_response(401, "Token was invalid."));
            }
            Ok(PublishedPost {
                id: Some("abc123".to_string()),
                title: Some(post.title.clone()),
                author_id: None,
                tags: post.tags.clone(),
                url: "https://medium.com/@me/my-post-abc123".to_string(),
                publish_status: Some(post.publish_status),
            })
        }
    }

    struct Answer(Option<bool>);

    impl ConfirmationProvider for Answer {
        fn confirm(&mut self) -> Result<bool> {
            self.0
                .take()
                .ok_or_else(|| MediumError::Internal(anyhow::anyhow!("asked twice")))
        }
    }

    fn sample_file(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_confirmed_run_publishes_once() {
        let file = sample_file(SAMPLE);
        let publisher = RecordingPublisher::default();
        let mut out = Vec::new();

        let outcome = run(file.path(), &publisher, &mut Answer(Some(true)), &mut out)
            .await
            .unwrap();

        let calls = publisher.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].title, "My Post");
        assert_eq!(calls[0].tags, vec!["tech", "life"]);
        assert_eq!(calls[0].content, SAMPLE);
        assert_eq!(calls[0].content_format, ContentFormat::Markdown);
        assert_eq!(calls[0].publish_status, PublishStatus::Draft);

        match outcome {
            Outcome::Published(post) => {
                assert_eq!(post.url, "https://medium.com/@me/my-post-abc123")
            }
            Outcome::Declined => panic!("Expected a published post"),
        }

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Publish post ..."));
        assert!(out.ends_with("Check your post at 'https://medium.com/@me/my-post-abc123'\n"));
    }

    #[tokio::test]
    async fn test_declined_run_does_not_publish() {
        let file = sample_file(SAMPLE);
        let publisher = RecordingPublisher::default();
        let mut out = Vec::new();

        let outcome = run(file.path(), &publisher, &mut Answer(Some(false)), &mut out)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert!(publisher.calls.lock().unwrap().is_empty());

        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("Bye! :-)\n"));
        assert!(!out.contains("Publish post"));
    }

    #[tokio::test]
    async fn test_prompt_layout() {
        let file = sample_file(SAMPLE);
        let mut out = Vec::new();

        run(
            file.path(),
            &RecordingPublisher::default(),
            &mut Answer(Some(false)),
            &mut out,
        )
        .await
        .unwrap();

        let expected = format!(
            "Do you want to post file '{}'? N/y\n\nTitle:\n\n\tMy Post\n\nTags:\n\ttech, life\n\nBye! :-)\n",
            file.path().display()
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_parse_failure_happens_before_prompt() {
        let file = sample_file("# No front matter\n\nJust text.\n");
        let publisher = RecordingPublisher::default();
        let mut answer = Answer(Some(true));
        let mut out = Vec::new();

        let err = run(file.path(), &publisher, &mut answer, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, MediumError::FrontMatterNotFound));
        assert!(publisher.calls.lock().unwrap().is_empty());
        // The user was never asked
        assert_eq!(answer.0, Some(true));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_missing_categories_is_fatal() {
        let file = sample_file("---\ntitle: Lonely\n---\nBody\n");
        let publisher = RecordingPublisher::default();

        let err = run(
            file.path(),
            &publisher,
            &mut Answer(Some(true)),
            &mut Vec::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, MediumError::MissingField { .. }));
        assert!(publisher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &dir.path().join("missing.md"),
            &RecordingPublisher::default(),
            &mut Answer(Some(true)),
            &mut Vec::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, MediumError::FileRead { .. }));
    }

    #[tokio::test]
    async fn test_publish_error_propagates() {
        let file = sample_file(SAMPLE);
        let publisher = RecordingPublisher {
            fail: true,
            ..Default::default()
        };

        let err = run(
            file.path(),
            &publisher,
            &mut Answer(Some(true)),
            &mut Vec::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, MediumError::Unauthorized { .. }));
        assert_eq!(publisher.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["medium-pub", "post.md"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("post.md"));

        assert!(Cli::try_parse_from(["medium-pub"]).is_err());
        assert!(Cli::try_parse_from(["medium-pub", "a.md", "b.md"]).is_err());
    }
}
