//! Post payloads and draft creation.

use crate::auth::UserResolver;
use crate::error::Result;
use crate::http::{MediumHttpClient, MediumResponse};
use crate::markdown::MarkdownPost;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Format of the post content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Markdown,
}

/// Visibility of a post. Drafts are the only status this tool creates; the others can come
/// back in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Public,
    Draft,
    Unlisted,
}

/// Represents a Medium post for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post title
    pub title: String,
    pub content_format: ContentFormat,
    /// Post body
    pub content: String,
    pub tags: Vec<String>,
    pub publish_status: PublishStatus,
}

impl Post {
    /// Creates a markdown draft.
    pub fn new(title: String, content: String) -> Self {
        Self {
            title,
            content_format: ContentFormat::Markdown,
            content,
            tags: Vec::new(),
            publish_status: PublishStatus::Draft,
        }
    }

    /// Sets the post tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

impl From<&MarkdownPost> for Post {
    /// Builds a draft whose content is the whole file, front matter included.
    fn from(post: &MarkdownPost) -> Self {
        Post::new(post.title.clone(), post.original_text.clone()).with_tags(post.tags.clone())
    }
}

/// Created post as returned by Medium.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub publish_status: Option<PublishStatus>,
}

/// Post manager for creating drafts under the token owner's account.
#[derive(Debug)]
pub struct PostManager {
    http_client: Arc<MediumHttpClient>,
    user_resolver: Arc<UserResolver>,
}

impl PostManager {
    /// Creates a new post manager.
    pub fn new(http_client: Arc<MediumHttpClient>, user_resolver: Arc<UserResolver>) -> Self {
        Self {
            http_client,
            user_resolver,
        }
    }

    /// Creates a post under the authenticated user.
    pub async fn create_post(&self, post: &Post) -> Result<PublishedPost> {
        let author_id = self.user_resolver.author_id().await?;

        tracing::info!(
            "Creating {:?} post {:?} with {} tags",
            post.publish_status,
            post.title,
            post.tags.len()
        );

        let endpoint = format!("/users/{author_id}/posts");
        let response = self.http_client.post_json(&endpoint, post).await?;
        let created: MediumResponse<PublishedPost> =
            MediumHttpClient::read_json(response).await?;
        let published = created.into_result()?;

        tracing::info!("Successfully created post: {}", published.url);
        Ok(published)
    }
}
