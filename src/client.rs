//! Main client facade for the Medium API.

use crate::auth::{MediumUser, UserResolver};
use crate::config::Config;
use crate::error::Result;
use crate::http::MediumHttpClient;
use crate::post::{Post, PostManager, PublishedPost};
use crate::traits::Publisher;
use async_trait::async_trait;
use std::sync::Arc;

/// Medium client that owns the HTTP layer, the user lookup and post creation.
#[derive(Debug)]
pub struct MediumClient {
    user_resolver: Arc<UserResolver>,
    post_manager: PostManager,
}

impl MediumClient {
    /// Creates a client from validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let http_client = Arc::new(MediumHttpClient::with_config(&config)?);
        let user_resolver = Arc::new(UserResolver::new(Arc::clone(&http_client)));
        let post_manager = PostManager::new(http_client, Arc::clone(&user_resolver));

        Ok(Self {
            user_resolver,
            post_manager,
        })
    }

    /// Gets the account the token belongs to.
    pub async fn me(&self) -> Result<&MediumUser> {
        self.user_resolver.current_user().await
    }

    /// Creates a post under the token owner's account.
    pub async fn create_post(&self, post: &Post) -> Result<PublishedPost> {
        self.post_manager.create_post(post).await
    }
}

#[async_trait]
impl Publisher for MediumClient {
    async fn publish(&self, post: &Post) -> Result<PublishedPost> {
        self.create_post(post).await
    }
}
